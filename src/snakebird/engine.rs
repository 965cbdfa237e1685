use rand::{rngs::StdRng, seq::SliceRandom};
use std::time::Duration;
use tracing::{debug, info};

use super::{
    config::SnakebirdConfig,
    direction::Direction,
    state::{Position, Snake, World},
};
use crate::rng::{seed_or_clock, seeded};

/// Why a move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    /// Target cell is off the grid
    OutOfBounds,
    /// Target cell is inside a platform
    Platform,
    /// Target cell is already part of the snake
    SelfCollision,
}

/// Result of trying to move the head one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Blocked(BlockReason),
}

/// Result of one gravity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityOutcome {
    /// Some segment rests on a platform or the bottom edge
    Supported,
    /// The whole snake dropped one row
    Fell,
}

/// What happened during one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameResult {
    /// Present when a direction was pressed this frame
    pub movement: Option<MoveOutcome>,
    /// Fruits the head was on after the move phase
    pub fruits_eaten: usize,
    /// Present when the gravity timer fired this frame
    pub gravity: Option<GravityOutcome>,
}

/// Accumulates real frame time and fires once per interval
///
/// The accumulator is cleared when it fires, so leftover time past the
/// interval is dropped rather than carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct GravityTimer {
    interval: Duration,
    accumulated: Duration,
}

impl GravityTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    /// Add one frame's elapsed time; true when gravity should run
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        self.accumulated += elapsed;
        if self.accumulated >= self.interval {
            self.accumulated = Duration::ZERO;
            true
        } else {
            false
        }
    }

    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

/// The puzzle rules: movement, fruit, gravity
pub struct SnakebirdEngine {
    config: SnakebirdConfig,
    rng: StdRng,
}

impl SnakebirdEngine {
    /// Create an engine; fruit placement is seeded from the config or the clock
    pub fn new(config: SnakebirdConfig) -> Self {
        let seed = seed_or_clock(config.seed);
        debug!(seed, "snakebird rng seeded");
        Self {
            config,
            rng: seeded(seed),
        }
    }

    pub fn config(&self) -> &SnakebirdConfig {
        &self.config
    }

    /// Build the starting level with a fresh set of fruits
    pub fn reset(&mut self) -> World {
        let snake = Snake::new(self.config.initial_snake.clone(), self.config.cell_count());
        let mut world = World::new(
            snake,
            self.config.platforms.clone(),
            Vec::new(),
            self.config.grid_width,
            self.config.grid_height,
        );

        for _ in 0..self.config.fruit_count {
            match self.pick_fruit_cell(&world) {
                Some(pos) => world.fruits.push(pos),
                None => break,
            }
        }

        world
    }

    /// Run one frame in order: move, eat, then gravity if the timer fires
    pub fn frame(
        &mut self,
        world: &mut World,
        timer: &mut GravityTimer,
        direction: Option<Direction>,
        elapsed: Duration,
    ) -> FrameResult {
        let movement = direction.map(|dir| Self::try_move(world, dir));
        let fruits_eaten = self.consume_fruit(world);
        let gravity = timer.advance(elapsed).then(|| Self::apply_gravity(world));

        FrameResult {
            movement,
            fruits_eaten,
            gravity,
        }
    }

    /// Shift the snake one cell if the target is in bounds and empty
    pub fn try_move(world: &mut World, direction: Direction) -> MoveOutcome {
        let target = world.snake.head().moved_in_direction(direction);

        if let Some(reason) = Self::check_target(world, target) {
            debug!(?direction, ?reason, x = target.x, y = target.y, "move blocked");
            return MoveOutcome::Blocked(reason);
        }

        world.snake.shift_towards(target);
        MoveOutcome::Moved
    }

    fn check_target(world: &World, target: Position) -> Option<BlockReason> {
        if !world.is_in_bounds(target) {
            return Some(BlockReason::OutOfBounds);
        }
        if world.is_platform(target) {
            return Some(BlockReason::Platform);
        }
        if world.snake.occupies(target) {
            return Some(BlockReason::SelfCollision);
        }
        None
    }

    /// Eat every fruit under the head, growing once and relocating each
    ///
    /// Returns the number of fruits eaten. A fruit with nowhere left to go
    /// is removed from the board.
    pub fn consume_fruit(&mut self, world: &mut World) -> usize {
        let head = world.snake.head();
        let mut eaten = 0;

        while let Some(index) = world.fruits.iter().position(|&f| f == head) {
            world.fruits.swap_remove(index);
            world.snake.grow();
            eaten += 1;

            match self.pick_fruit_cell(world) {
                Some(pos) => world.fruits.push(pos),
                None => debug!("no free cell left for fruit"),
            }
            info!(length = world.snake.len(), "fruit eaten");
        }

        eaten
    }

    /// Choose uniformly among every free cell
    fn pick_fruit_cell(&mut self, world: &World) -> Option<Position> {
        world.free_cells().choose(&mut self.rng).copied()
    }

    /// Drop the snake one row unless something holds it up
    pub fn apply_gravity(world: &mut World) -> GravityOutcome {
        let below_is_solid = |pos: Position| {
            let below = pos.below();
            !world.is_in_bounds(below) || world.is_platform(below)
        };

        // No solid cell under any segment means every below-cell is in
        // bounds and platform-free, so the fall is all-or-nothing
        if world.snake.body().iter().any(|&segment| below_is_solid(segment)) {
            return GravityOutcome::Supported;
        }

        world.snake.fall();
        debug!(head_y = world.snake.head().y, "snake fell");
        GravityOutcome::Fell
    }
}
