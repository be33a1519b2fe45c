use std::collections::HashSet;

use rand::seq::IteratorRandom;
use rand::Rng;
use thiserror::Error;

use crate::grid::{GridSize, Position};

/// Random draws tried before falling back to scanning the board for free cells.
const MAX_SAMPLE_ATTEMPTS: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("no free cell left on the board for food")]
pub struct GridFull;

#[derive(Clone, Debug)]
pub struct Food {
    position: Position,
}

impl Food {
    /// Places food on a random cell that is not in `excluded`.
    pub fn spawn<'a, R, I>(grid: &GridSize, excluded: I, rng: &mut R) -> Result<Self, GridFull>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
    {
        let mut food = Self {
            position: grid.center(),
        };
        food.relocate(grid, excluded, rng)?;
        Ok(food)
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the food to a uniformly random cell outside `excluded`. When every cell is
    /// excluded the position is kept and `GridFull` is returned.
    pub fn relocate<'a, R, I>(
        &mut self,
        grid: &GridSize,
        excluded: I,
        rng: &mut R,
    ) -> Result<Position, GridFull>
    where
        R: Rng + ?Sized,
        I: IntoIterator<Item = &'a Position>,
    {
        let excluded: HashSet<Position> = excluded.into_iter().copied().collect();
        if excluded.len() >= grid.cell_count() {
            return Err(GridFull);
        }

        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = grid.random_cell(rng);
            if !excluded.contains(&candidate) {
                self.position = candidate;
                return Ok(candidate);
            }
        }

        let candidate = grid
            .cells()
            .filter(|cell| !excluded.contains(cell))
            .choose(rng)
            .ok_or(GridFull)?;
        self.position = candidate;
        Ok(candidate)
    }

    #[cfg(test)]
    pub(crate) fn at(position: Position) -> Self {
        Self { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_relocate_avoids_excluded_cells() {
        let grid = GridSize::new(6, 6);
        let mut rng = StdRng::seed_from_u64(11);
        let excluded: Vec<Position> = grid.cells().filter(|cell| cell.y < 5).collect();
        let mut food = Food::at(Position::new(0, 0));

        for _ in 0..50 {
            let placed = food.relocate(&grid, &excluded, &mut rng).unwrap();
            assert_eq!(placed, food.position());
            assert!(!excluded.contains(&food.position()));
            assert!(grid.contains(food.position()));
        }
    }

    #[test]
    fn test_relocate_finds_the_last_free_cell() {
        let grid = GridSize::new(10, 10);
        let mut rng = StdRng::seed_from_u64(5);
        let free = Position::new(3, 7);
        let excluded: Vec<Position> = grid.cells().filter(|cell| *cell != free).collect();
        let mut food = Food::at(Position::new(0, 0));

        assert_eq!(food.relocate(&grid, &excluded, &mut rng), Ok(free));
        assert_eq!(food.position(), free);
    }

    #[test]
    fn test_relocate_on_full_grid_keeps_position() {
        let grid = GridSize::new(4, 4);
        let mut rng = StdRng::seed_from_u64(1);
        let excluded: Vec<Position> = grid.cells().collect();
        let mut food = Food::at(Position::new(2, 2));

        assert_eq!(food.relocate(&grid, &excluded, &mut rng), Err(GridFull));
        assert_eq!(food.position(), Position::new(2, 2));
    }

    #[test]
    fn test_spawn_never_lands_on_excluded_center() {
        let grid = GridSize::new(30, 30);
        let center = [grid.center()];
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let food = Food::spawn(&grid, &center, &mut rng).unwrap();
            assert_ne!(food.position(), grid.center());
        }
    }
}
