use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Cell, GridSize};

/// Seedable source of randomness for one game process.
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly random in-bounds cell. The grid must not be empty.
    pub fn random_cell(&mut self, grid: &GridSize) -> Cell {
        let x = self.rng.random_range(0..grid.width);
        let y = self.rng.random_range(0..grid.height);
        Cell::new(x as i32, y as i32)
    }

    pub fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_cells() {
        let grid = GridSize::new(20, 15);
        let mut a = GameRng::new(7);
        let mut b = GameRng::new(7);
        for _ in 0..50 {
            assert_eq!(a.random_cell(&grid), b.random_cell(&grid));
        }
    }

    #[test]
    fn test_random_cell_in_bounds() {
        let grid = GridSize::new(3, 2);
        let mut rng = GameRng::new(42);
        for _ in 0..200 {
            assert!(grid.contains(rng.random_cell(&grid)));
        }
    }
}
