use rand::Rng;
use tracing::debug;

use super::{
    config::LifeConfig,
    grid::{LifeGrid, next_generation},
};

/// Double-buffered Game of Life simulation
#[derive(Debug, Clone)]
pub struct Life {
    current: LifeGrid,
    next: LifeGrid,
    generation: u64,
}

impl Life {
    /// Create a simulation whose first generation is a random soup
    pub fn new<R: Rng + ?Sized>(config: &LifeConfig, rng: &mut R) -> Self {
        let mut life = Self::from_grid(LifeGrid::new(config.width, config.height));
        life.reseed(rng);
        life
    }

    /// Start from a given pattern
    pub fn from_grid(grid: LifeGrid) -> Self {
        let next = LifeGrid::new(grid.width(), grid.height());
        Self {
            current: grid,
            next,
            generation: 0,
        }
    }

    /// Replace the board with a fresh random soup and restart the count
    pub fn reseed<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.current.randomize(rng);
        self.generation = 0;
        debug!(population = self.current.population(), "reseeded board");
    }

    /// Advance one generation
    pub fn step(&mut self) {
        next_generation(&self.current, &mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    pub fn grid(&self) -> &LifeGrid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.current.population()
    }
}
