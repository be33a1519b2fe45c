#[cfg(test)]
use std::collections::VecDeque;
use std::io;

use crate::grid::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Direction(Direction),
    Restart,
    Quit,
}

/// Everything one tick cares about from the events that arrived since the previous tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickInput {
    pub direction: Option<Direction>,
    pub restart: bool,
    pub quit: bool,
}

impl TickInput {
    /// Only the last directional event survives; earlier ones are dropped, not queued.
    pub fn collect<I>(events: I) -> Self
    where
        I: IntoIterator<Item = InputEvent>,
    {
        events
            .into_iter()
            .fold(TickInput::default(), |mut input, event| {
                match event {
                    InputEvent::Direction(direction) => input.direction = Some(direction),
                    InputEvent::Restart => input.restart = true,
                    InputEvent::Quit => input.quit = true,
                }
                input
            })
    }
}

pub trait InputSource {
    /// Drains whatever is pending without waiting for more.
    fn poll(&mut self) -> io::Result<Vec<InputEvent>>;
}

/// Replays pre-recorded batches, one per poll. Runs out into empty polls.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: VecDeque<Vec<InputEvent>>,
}

#[cfg(test)]
impl ScriptedInput {
    pub fn new<I>(batches: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            batches: batches.into_iter().collect(),
        }
    }
}

#[cfg(test)]
impl InputSource for ScriptedInput {
    fn poll(&mut self) -> io::Result<Vec<InputEvent>> {
        Ok(self.batches.pop_front().unwrap_or_default())
    }
}
