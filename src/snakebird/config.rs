use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;

use super::state::{Platform, Position};
use crate::error::{ConfigError, MAX_GRID_SIDE};

/// Configuration for the Snakebird puzzle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnakebirdConfig {
    /// Width of the puzzle grid
    pub grid_width: usize,
    /// Height of the puzzle grid
    pub grid_height: usize,
    /// Redraw and input rate
    pub frame_rate_hz: u32,
    /// Real time between gravity checks
    pub gravity_interval_ms: u64,
    /// Starting segments, head first
    pub initial_snake: Vec<Position>,
    /// Solid level geometry
    pub platforms: Vec<Platform>,
    /// Fruits kept on the board at once
    pub fruit_count: usize,
    /// Fixed RNG seed for fruit placement, wall clock when absent
    pub seed: Option<u64>,
}

impl Default for SnakebirdConfig {
    fn default() -> Self {
        Self {
            grid_width: 20,
            grid_height: 15,
            frame_rate_hz: 60,
            gravity_interval_ms: 250,
            initial_snake: vec![
                Position::new(5, 5),
                Position::new(5, 6),
                Position::new(5, 7),
                Position::new(5, 8),
            ],
            platforms: default_platforms(),
            fruit_count: 3,
            seed: None,
        }
    }
}

fn default_platforms() -> Vec<Platform> {
    vec![
        Platform::new(0, 13, 20, 2), // ground
        Platform::new(2, 9, 6, 1),
        Platform::new(12, 7, 5, 1),
        Platform::new(9, 10, 2, 3),
    ]
}

impl SnakebirdConfig {
    /// An empty level of the given size with the default snake
    pub fn open(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            platforms: Vec::new(),
            ..Default::default()
        }
    }

    /// Number of cells in the grid, and so the longest the snake can get
    pub fn cell_count(&self) -> usize {
        self.grid_width.saturating_mul(self.grid_height)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.frame_rate_hz.max(1)))
    }

    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.gravity_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width == 0 || self.grid_height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.grid_width,
                height: self.grid_height,
            });
        }
        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.grid_width,
                height: self.grid_height,
                max: MAX_GRID_SIDE,
            });
        }
        if self.frame_rate_hz == 0 {
            return Err(ConfigError::ZeroRate {
                what: "frame_rate_hz",
            });
        }
        if self.gravity_interval_ms == 0 {
            return Err(ConfigError::ZeroRate {
                what: "gravity_interval_ms",
            });
        }

        for (index, platform) in self.platforms.iter().enumerate() {
            if platform.width <= 0 || platform.height <= 0 {
                return Err(ConfigError::EmptyPlatform { index });
            }
            if !platform.fits_within(self.grid_width, self.grid_height) {
                return Err(ConfigError::PlatformOutOfBounds { index });
            }
        }

        self.validate_snake()
    }

    fn validate_snake(&self) -> Result<(), ConfigError> {
        let snake = &self.initial_snake;
        if snake.is_empty() {
            return Err(ConfigError::EmptySnake);
        }
        if snake.len() > self.cell_count() {
            return Err(ConfigError::SnakeTooLong {
                len: snake.len(),
                capacity: self.cell_count(),
            });
        }

        let mut seen = HashSet::new();
        for &Position { x, y } in snake {
            let in_bounds = x >= 0
                && y >= 0
                && (x as i64) < self.grid_width as i64
                && (y as i64) < self.grid_height as i64;
            if !in_bounds {
                return Err(ConfigError::SegmentOutOfBounds { x, y });
            }
            if self.platforms.iter().any(|p| p.contains(Position::new(x, y))) {
                return Err(ConfigError::SegmentOnPlatform { x, y });
            }
            if !seen.insert((x, y)) {
                return Err(ConfigError::DuplicateSegment { x, y });
            }
        }

        for (index, pair) in snake.windows(2).enumerate() {
            if !pair[0].is_adjacent(pair[1]) {
                return Err(ConfigError::DisconnectedSnake {
                    index,
                    next: index + 1,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SnakebirdConfig::default();
        assert_eq!(config.grid_width, 20);
        assert_eq!(config.grid_height, 15);
        assert_eq!(config.cell_count(), 300);
        assert_eq!(config.gravity_interval(), Duration::from_millis(250));
        assert_eq!(config.initial_snake.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_segment_on_platform() {
        let mut config = SnakebirdConfig::default();
        config.platforms.push(Platform::new(5, 7, 1, 1));
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOnPlatform { x: 5, y: 7 })
        );
    }

    #[test]
    fn test_rejects_out_of_bounds_snake() {
        let mut config = SnakebirdConfig::open(10, 10);
        config.initial_snake = vec![Position::new(0, 0), Position::new(-1, 0)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::SegmentOutOfBounds { x: -1, y: 0 })
        );
    }

    #[test]
    fn test_rejects_duplicate_and_disconnected_segments() {
        let mut config = SnakebirdConfig::open(10, 10);
        config.initial_snake = vec![Position::new(1, 1), Position::new(1, 2), Position::new(1, 1)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateSegment { x: 1, y: 1 })
        );

        config.initial_snake = vec![Position::new(1, 1), Position::new(3, 1)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::DisconnectedSnake { index: 0, next: 1 })
        );
    }

    #[test]
    fn test_rejects_snake_longer_than_grid() {
        let mut config = SnakebirdConfig::open(2, 1);
        config.initial_snake = vec![Position::new(0, 0), Position::new(1, 0), Position::new(1, 1)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::SnakeTooLong {
                len: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_rejects_bad_platforms() {
        let mut config = SnakebirdConfig::open(10, 10);
        config.initial_snake = vec![Position::new(0, 0)];

        config.platforms = vec![Platform::new(8, 8, 3, 1)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlatformOutOfBounds { index: 0 })
        );

        config.platforms = vec![Platform::new(4, 4, 1, 1), Platform::new(2, 2, 0, 1)];
        assert_eq!(config.validate(), Err(ConfigError::EmptyPlatform { index: 1 }));
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = SnakebirdConfig::open(usize::MAX, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                width: usize::MAX,
                height: 2,
                max: MAX_GRID_SIDE
            })
        );
    }

    #[test]
    fn test_rejects_overflowing_platform() {
        let mut config = SnakebirdConfig::open(10, 10);
        config.initial_snake = vec![Position::new(0, 0)];

        config.platforms = vec![Platform::new(i32::MAX - 1, 0, 5, 1)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlatformOutOfBounds { index: 0 })
        );

        config.platforms = vec![Platform::new(0, i32::MAX, 1, i32::MAX)];
        assert_eq!(
            config.validate(),
            Err(ConfigError::PlatformOutOfBounds { index: 0 })
        );
    }

    #[test]
    fn test_json_level() {
        let json = r#"{
            "grid_width": 8,
            "grid_height": 6,
            "initial_snake": [{ "x": 1, "y": 1 }, { "x": 1, "y": 2 }],
            "platforms": [{ "x": 0, "y": 5, "width": 8, "height": 1 }],
            "fruit_count": 1
        }"#;
        let config: SnakebirdConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.platforms, vec![Platform::new(0, 5, 8, 1)]);
        assert_eq!(config.frame_rate_hz, 60);
        assert!(config.validate().is_ok());
    }
}
