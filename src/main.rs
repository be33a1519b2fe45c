mod clock;
mod config;
mod food;
mod game;
mod grid;
mod input;
mod logger;
mod render;
mod runner;
mod snake;
mod terminal;

use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use clock::TickClock;
use config::{ConfigError, GameConfig};
use game::Game;
use render::CanvasRenderer;
use terminal::{TerminalCanvas, TerminalGuard, TerminalInput};

#[derive(Parser)]
#[command(name = "torsnek", version, about)]
struct Args {
    /// YAML config file; defaults apply when it does not exist
    #[arg(long, default_value = "torsnek.yaml")]
    config: PathBuf,
    /// Board width in cells
    #[arg(long)]
    width: Option<u16>,
    /// Board height in cells
    #[arg(long)]
    height: Option<u16>,
    /// Simulation ticks per second
    #[arg(long)]
    tps: Option<u32>,
    /// Seed for food placement and starting direction
    #[arg(long)]
    seed: Option<u64>,
    /// Append log lines to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Print the effective config as YAML and exit
    #[arg(long)]
    print_config: bool,
}

impl Args {
    fn resolve_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::load(&self.config)?;
        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(tps) = self.tps {
            config.ticks_per_second = tps;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger(args.log_file.as_deref())?;

    let config = args.resolve_config()?;
    if args.print_config {
        print!("{}", config.to_yaml()?);
        return Ok(());
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log!(
        "Starting on a {}x{} board at {} ticks/s, seed {}",
        config.grid_width,
        config.grid_height,
        config.ticks_per_second,
        seed
    );

    let mut game = Game::new(&config, StdRng::seed_from_u64(seed))?;
    terminal::ensure_fits(config.grid())?;

    let score = {
        let _guard = TerminalGuard::new()?;
        let mut input = TerminalInput;
        let mut renderer = CanvasRenderer::new(TerminalCanvas::new(stdout()));
        let mut clock = TickClock::new(config.tick_interval());
        runner::run(&mut game, &mut input, &mut renderer, &mut clock)?
    };

    println!("Game Over! Final score: {}", score);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_config_path() -> String {
        let random_number: u32 = rand::random();
        std::env::temp_dir()
            .join(format!("missing_torsnek_config_{}.yaml", random_number))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let path = missing_config_path();
        let args = Args::try_parse_from([
            "torsnek", "--config", path.as_str(), "--width", "12", "--tps", "20",
        ])
        .unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(
            config,
            GameConfig {
                grid_width: 12,
                grid_height: 30,
                ticks_per_second: 20,
            }
        );
    }

    #[test]
    fn test_flags_override_config_file() {
        let path = missing_config_path();
        std::fs::write(&path, "grid_width: 20\ngrid_height: 12\nticks_per_second: 15\n").unwrap();
        let args = Args::try_parse_from(["torsnek", "--config", path.as_str(), "--height", "40"]).unwrap();

        let config = args.resolve_config().unwrap();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 40);
        assert_eq!(config.ticks_per_second, 15);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_overrides_are_validated() {
        let path = missing_config_path();
        let args = Args::try_parse_from(["torsnek", "--config", path.as_str(), "--width", "2"]).unwrap();
        assert!(matches!(args.resolve_config(), Err(ConfigError::Invalid(_))));

        let args = Args::try_parse_from(["torsnek", "--config", path.as_str(), "--tps", "0"]).unwrap();
        assert!(matches!(args.resolve_config(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_no_flags_gives_defaults() {
        let path = missing_config_path();
        let args = Args::try_parse_from(["torsnek", "--config", path.as_str()]).unwrap();
        assert_eq!(args.resolve_config().unwrap(), GameConfig::default());
        assert!(args.seed.is_none());
        assert!(!args.print_config);
    }
}
