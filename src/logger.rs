use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Line logger. The terminal is owned by the game while it runs, so lines go to a file
/// or nowhere.
pub struct Logger {
    sink: Option<File>,
}

impl Logger {
    fn new(sink: Option<File>) -> Self {
        Self { sink }
    }

    pub fn log(&self, message: &str) {
        let Some(mut file) = self.sink.as_ref() else {
            return;
        };
        let line = format!("[{}] {}\n", Local::now().format("%Y-%m-%d %H:%M:%S%.3f"), message);
        // A failed log write must not take the game down.
        file.write_all(line.as_bytes()).ok();
    }
}

/// Sets up the process-wide logger, appending to `path` when given.
pub fn init_logger(path: Option<&Path>) -> io::Result<()> {
    let sink = match path {
        Some(path) => Some(OpenOptions::new().create(true).append(true).open(path)?),
        None => None,
    };
    LOGGER.get_or_init(|| Logger::new(sink));
    Ok(())
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
