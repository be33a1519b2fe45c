use std::collections::VecDeque;

use rand::Rng;

use crate::grid::{Direction, GridSize, Position};

pub const SCORE_INCREMENT: u32 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    SelfCollision,
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    direction: Direction,
    target_length: usize,
    score: u32,
}

impl Snake {
    /// A one-cell snake in the middle of the board heading somewhere random.
    pub fn new<R: Rng + ?Sized>(grid: &GridSize, rng: &mut R) -> Self {
        let mut body = VecDeque::new();
        body.push_back(grid.center());

        Self {
            body,
            direction: Direction::random(rng),
            target_length: 1,
            score: 0,
        }
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, grid: &GridSize, rng: &mut R) {
        *self = Self::new(grid, rng);
    }

    pub fn head(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    /// Occupied cells, head first.
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a live snake; the body always keeps its head.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Turns the snake unless `direction` would reverse it onto itself.
    /// Returns whether the turn was accepted.
    pub fn set_direction(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.direction) {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
        self.score += SCORE_INCREMENT;
    }

    /// The cell the head would enter on the next step.
    pub fn next_head(&self, grid: &GridSize) -> Position {
        grid.advance(self.head(), self.direction)
    }

    /// Moves the head one cell. On a self-collision the body is left untouched.
    pub fn step(&mut self, grid: &GridSize) -> StepOutcome {
        let next_head = self.next_head(grid);

        // The neck is skipped: it is either being vacated or unreachable without a reversal.
        if self.body.iter().skip(2).any(|segment| *segment == next_head) {
            return StepOutcome::SelfCollision;
        }

        self.body.push_front(next_head);
        if self.body.len() > self.target_length {
            self.body.pop_back();
        }

        StepOutcome::Moved
    }

    #[cfg(test)]
    pub(crate) fn from_parts(body: &[Position], direction: Direction) -> Self {
        Self {
            body: body.iter().copied().collect(),
            direction,
            target_length: body.len(),
            score: 0,
        }
    }
}
