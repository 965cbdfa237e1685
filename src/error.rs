use thiserror::Error;

/// Longest side either program accepts, in cells
pub const MAX_GRID_SIDE: usize = 1024;

/// Reasons a configuration is refused before a program starts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 1x1, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("grid of {width}x{height} exceeds the {max}x{max} limit")]
    GridTooLarge {
        width: usize,
        height: usize,
        max: usize,
    },

    #[error("{what} must be greater than zero")]
    ZeroRate { what: &'static str },

    #[error("snake needs at least one segment")]
    EmptySnake,

    #[error("snake has {len} segments but the grid only holds {capacity}")]
    SnakeTooLong { len: usize, capacity: usize },

    #[error("snake segment ({x}, {y}) is outside the grid")]
    SegmentOutOfBounds { x: i32, y: i32 },

    #[error("snake segment ({x}, {y}) overlaps a platform")]
    SegmentOnPlatform { x: i32, y: i32 },

    #[error("snake segment ({x}, {y}) appears more than once")]
    DuplicateSegment { x: i32, y: i32 },

    #[error("snake segments {index} and {next} are not adjacent")]
    DisconnectedSnake { index: usize, next: usize },

    #[error("platform #{index} has zero width or height")]
    EmptyPlatform { index: usize },

    #[error("platform #{index} does not fit inside the grid")]
    PlatformOutOfBounds { index: usize },
}
