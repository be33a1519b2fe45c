use std::io;

use rand::Rng;

use crate::clock::TickClock;
use crate::game::{Game, TickOutcome};
use crate::input::InputSource;
use crate::render::RenderSink;

/// Drives the game one tick at a time until a quit arrives: poll, tick, render, wait.
/// The quitting tick is still rendered. Returns the score at exit.
pub fn run<R, I, S>(
    game: &mut Game<R>,
    input: &mut I,
    sink: &mut S,
    clock: &mut TickClock,
) -> io::Result<u32>
where
    R: Rng,
    I: InputSource,
    S: RenderSink,
{
    loop {
        let events = input.poll()?;
        let outcome = game.tick(events);
        sink.render(&game.frame())?;

        if outcome == TickOutcome::Quit {
            return Ok(game.snake().score());
        }

        clock.wait();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::Food;
    use crate::game::GameState;
    use crate::grid::{Direction, GridSize, Position};
    use crate::input::{InputEvent, ScriptedInput};
    use crate::render::Frame;
    use crate::snake::Snake;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    #[derive(Debug, PartialEq)]
    struct Seen {
        head: Position,
        score: u32,
        state: GameState,
        has_overlay: bool,
    }

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<Seen>,
    }

    impl RenderSink for RecordingSink {
        fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
            self.frames.push(Seen {
                head: frame.snake[0],
                score: frame.score,
                state: frame.state,
                has_overlay: frame.overlay.is_some(),
            });
            Ok(())
        }
    }

    fn game(cells: &[Position], direction: Direction, food: Position) -> Game<StdRng> {
        Game::from_parts(
            GridSize::new(30, 30),
            Snake::from_parts(cells, direction),
            Food::at(food),
            StdRng::seed_from_u64(9),
        )
    }

    #[test]
    fn test_one_render_per_tick_until_quit() {
        let mut game = game(&[Position::new(15, 15)], Direction::Right, Position::new(17, 14));
        let mut input = ScriptedInput::new([
            vec![],
            vec![InputEvent::Direction(Direction::Up)],
            vec![InputEvent::Direction(Direction::Right), InputEvent::Quit],
            vec![InputEvent::Direction(Direction::Down)],
        ]);
        let mut sink = RecordingSink::default();
        let mut clock = TickClock::new(Duration::from_millis(1));

        let score = run(&mut game, &mut input, &mut sink, &mut clock).unwrap();

        assert_eq!(score, 10);
        assert_eq!(
            sink.frames.iter().map(|seen| seen.head).collect::<Vec<_>>(),
            vec![Position::new(16, 15), Position::new(16, 14), Position::new(17, 14)]
        );
        assert_eq!(sink.frames[2].score, 10);
    }

    #[test]
    fn test_game_over_then_restart_then_quit() {
        let cells = [
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
        ];
        let mut game = game(&cells, Direction::Right, Position::new(0, 0));
        let mut input = ScriptedInput::new([
            vec![],
            vec![InputEvent::Direction(Direction::Up)],
            vec![InputEvent::Restart],
            vec![InputEvent::Quit],
        ]);
        let mut sink = RecordingSink::default();
        let mut clock = TickClock::new(Duration::from_millis(1));

        run(&mut game, &mut input, &mut sink, &mut clock).unwrap();

        assert_eq!(sink.frames.len(), 4);
        assert_eq!(
            sink.frames[0],
            Seen {
                head: Position::new(5, 5),
                score: 0,
                state: GameState::GameOver,
                has_overlay: true,
            }
        );
        assert_eq!(sink.frames[1], sink.frames[0]);
        assert_eq!(
            sink.frames[2],
            Seen {
                head: Position::new(15, 15),
                score: 0,
                state: GameState::Playing,
                has_overlay: false,
            }
        );
        assert_eq!(sink.frames[3].state, GameState::Playing);
    }
}
