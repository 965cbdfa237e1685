use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{ConfigError, MAX_GRID_SIDE};

/// Configuration for the Game of Life program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LifeConfig {
    /// Width of the grid in cells
    pub width: usize,
    /// Height of the grid in cells
    pub height: usize,
    /// Generations per second; also the redraw rate
    pub tick_rate_hz: u32,
    /// Fixed RNG seed for the initial soup, wall clock when absent
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 70,
            height: 45,
            tick_rate_hz: 10,
            seed: None,
        }
    }
}

impl LifeConfig {
    /// Create a configuration with a custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Time between generations
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz.max(1)))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }

        if self.width > MAX_GRID_SIDE || self.height > MAX_GRID_SIDE {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
                max: MAX_GRID_SIDE,
            });
        }

        if self.tick_rate_hz == 0 {
            return Err(ConfigError::ZeroRate {
                what: "tick_rate_hz",
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LifeConfig::default();
        assert_eq!(config.width, 70);
        assert_eq!(config.height, 45);
        assert_eq!(config.tick_rate_hz, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_grid() {
        let config = LifeConfig::new(0, 10);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyGrid {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let config = LifeConfig::new(usize::MAX, 2);
        assert_eq!(
            config.validate(),
            Err(ConfigError::GridTooLarge {
                width: usize::MAX,
                height: 2,
                max: MAX_GRID_SIDE
            })
        );
        assert!(LifeConfig::new(MAX_GRID_SIDE, MAX_GRID_SIDE).validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_rate() {
        let config = LifeConfig {
            tick_rate_hz: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroRate { .. })
        ));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: LifeConfig = serde_json::from_str(r#"{ "width": 30, "seed": 9 }"#).unwrap();
        assert_eq!(config.width, 30);
        assert_eq!(config.height, 45);
        assert_eq!(config.seed, Some(9));
    }
}
