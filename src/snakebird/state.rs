use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the puzzle grid; y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }

    /// The cell directly underneath
    pub fn below(&self) -> Self {
        self.moved_by(0, 1)
    }

    /// Whether two cells share an edge
    pub fn is_adjacent(&self, other: Position) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

/// Solid axis-aligned rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Platform {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.x
            && (pos.x as i64) < self.x as i64 + self.width as i64
            && pos.y >= self.y
            && (pos.y as i64) < self.y as i64 + self.height as i64
    }

    /// Whether every cell of the platform lies in a `width` x `height` grid
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.width > 0
            && self.height > 0
            && self.x as i64 + self.width as i64 <= width as i64
            && self.y as i64 + self.height as i64 <= height as i64
    }

    /// Every cell covered by the platform, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y.saturating_add(self.height)).flat_map(move |y| {
            (self.x..self.x.saturating_add(self.width)).map(move |x| Position::new(x, y))
        })
    }
}

/// The player-controlled snake
///
/// Segments are ordered head first. Length never exceeds `capacity`, which is
/// the number of cells in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Position>,
    capacity: usize,
}

impl Snake {
    pub fn new(body: Vec<Position>, capacity: usize) -> Self {
        assert!(!body.is_empty(), "snake needs a head");
        assert!(
            body.len() <= capacity,
            "snake of {} segments exceeds capacity {capacity}",
            body.len()
        );
        Self { body, capacity }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Rigid shift: the head takes `new_head` and every other segment takes
    /// the position of the one in front of it
    pub fn shift_towards(&mut self, new_head: Position) {
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Append a copy of the tail segment
    ///
    /// Returns false and leaves the snake unchanged once it fills the grid.
    pub fn grow(&mut self) -> bool {
        if self.body.len() >= self.capacity {
            return false;
        }
        self.body.push(self.tail());
        debug_assert!(self.body.len() <= self.capacity);
        true
    }

    /// Drop every segment one row
    pub fn fall(&mut self) {
        for segment in &mut self.body {
            *segment = segment.below();
        }
    }
}

/// Everything that changes while the puzzle runs, plus the fixed level
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    pub snake: Snake,
    pub platforms: Vec<Platform>,
    pub fruits: Vec<Position>,
    pub grid_width: usize,
    pub grid_height: usize,
}

impl World {
    pub fn new(
        snake: Snake,
        platforms: Vec<Platform>,
        fruits: Vec<Position>,
        grid_width: usize,
        grid_height: usize,
    ) -> Self {
        Self {
            snake,
            platforms,
            fruits,
            grid_width,
            grid_height,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && (pos.x as i64) < self.grid_width as i64
            && pos.y >= 0
            && (pos.y as i64) < self.grid_height as i64
    }

    pub fn is_platform(&self, pos: Position) -> bool {
        self.platforms.iter().any(|p| p.contains(pos))
    }

    /// A fruit may go here: in bounds, off the snake, off platforms and not
    /// stacked on another fruit
    pub fn is_free_for_fruit(&self, pos: Position) -> bool {
        self.is_in_bounds(pos)
            && !self.snake.occupies(pos)
            && !self.is_platform(pos)
            && !self.fruits.contains(&pos)
    }

    /// All cells a new fruit could be placed on, row by row
    pub fn free_cells(&self) -> Vec<Position> {
        let mut cells = Vec::new();
        for y in 0..self.grid_height as i32 {
            for x in 0..self.grid_width as i32 {
                let pos = Position::new(x, y);
                if self.is_free_for_fruit(pos) {
                    cells.push(pos);
                }
            }
        }
        cells
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width.saturating_mul(self.grid_height)
    }
}
