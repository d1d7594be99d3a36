use std::collections::HashSet;

use crate::log_debug;
use super::game_rng::GameRng;
use super::types::{Cell, GridSize};

const SAMPLE_ATTEMPTS: usize = 100;

pub struct FoodSpawner {
    grid: GridSize,
    rng: GameRng,
}

impl FoodSpawner {
    pub fn new(grid: GridSize, rng: GameRng) -> Self {
        Self { grid, rng }
    }

    /// Picks a uniformly random free cell, or `None` when `occupied` covers the grid.
    pub fn spawn(&mut self, occupied: &HashSet<Cell>) -> Option<Cell> {
        if self.grid.cell_count() == 0 {
            return None;
        }

        for _ in 0..SAMPLE_ATTEMPTS {
            let cell = self.rng.random_cell(&self.grid);
            if !occupied.contains(&cell) {
                log_debug!("Food spawned at ({}, {})", cell.x, cell.y);
                return Some(cell);
            }
        }

        // Crowded grid: sample among what is left instead of retrying blindly.
        let free: Vec<Cell> = self
            .grid
            .cells()
            .filter(|cell| !occupied.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        let cell = free[self.rng.random_index(free.len())];
        log_debug!(
            "Food spawned at ({}, {}) after exhaustive search, {} free cells",
            cell.x,
            cell.y,
            free.len()
        );
        Some(cell)
    }
}
