use rand::Rng;

use crate::config::GameConfig;
use crate::food::{Food, GridFull};
use crate::grid::{Direction, GridSize};
use crate::input::{InputEvent, TickInput};
use crate::log;
use crate::render::{Frame, Overlay};
use crate::snake::{Snake, StepOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

pub struct Game<R> {
    grid: GridSize,
    snake: Snake,
    food: Food,
    state: GameState,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: &GameConfig, mut rng: R) -> Result<Self, GridFull> {
        let grid = config.grid();
        let snake = Snake::new(&grid, &mut rng);
        let food = Food::spawn(&grid, snake.body(), &mut rng)?;

        Ok(Self {
            grid,
            snake,
            food,
            state: GameState::Playing,
            rng,
        })
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    /// Runs one tick against the events gathered since the previous one.
    pub fn tick<I>(&mut self, events: I) -> TickOutcome
    where
        I: IntoIterator<Item = InputEvent>,
    {
        let input = TickInput::collect(events);

        match self.state {
            GameState::Playing => self.advance(input.direction),
            GameState::GameOver => {
                if input.restart {
                    self.restart();
                }
            }
        }

        if input.quit {
            log!("Quit requested. Score: {}", self.snake.score());
            TickOutcome::Quit
        } else {
            TickOutcome::Continue
        }
    }

    fn advance(&mut self, direction: Option<Direction>) {
        if let Some(direction) = direction {
            self.snake.set_direction(direction);
        }

        let target = self.snake.next_head(&self.grid);
        if self.snake.step(&self.grid) == StepOutcome::SelfCollision {
            self.state = GameState::GameOver;
            log!(
                "Game over: self collision at ({}, {}). Score: {}",
                target.x,
                target.y,
                self.snake.score()
            );
            return;
        }

        let head = self.snake.head();
        if head != self.food.position() {
            return;
        }

        self.snake.grow();
        log!(
            "Ate food at ({}, {}). Score: {}, length {} of {}",
            head.x,
            head.y,
            self.snake.score(),
            self.snake.len(),
            self.snake.target_length()
        );

        if let Err(err) = self.food.relocate(&self.grid, self.snake.body(), &mut self.rng) {
            self.state = GameState::GameOver;
            log!("Game over: {}. Score: {}", err, self.snake.score());
        }
    }

    fn restart(&mut self) {
        self.snake.reset(&self.grid, &mut self.rng);
        match self.food.relocate(&self.grid, self.snake.body(), &mut self.rng) {
            Ok(_) => {
                self.state = GameState::Playing;
                log!("Restarted, heading {:?}", self.snake.direction());
            }
            Err(err) => log!("Restart failed: {}", err),
        }
    }

    pub fn frame(&self) -> Frame<'_> {
        let overlay = match self.state {
            GameState::Playing => None,
            GameState::GameOver => Some(Overlay::game_over(self.snake.score())),
        };

        Frame {
            grid: self.grid,
            snake: self.snake.body(),
            food: self.food.position(),
            score: self.snake.score(),
            state: self.state,
            overlay,
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(grid: GridSize, snake: Snake, food: Food, rng: R) -> Self {
        Self {
            grid,
            snake,
            food,
            state: GameState::Playing,
            rng,
        }
    }
}
