use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration rejected at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must be at least 5x5, got {rows}x{cols}")]
    BoardTooSmall { rows: usize, cols: usize },
    #[error("starting_level must be at least 1")]
    StartingLevelZero,
    #[error("starting_level ({starting}) cannot exceed max_level ({max})")]
    StartingLevelAboveMax { starting: u32, max: u32 },
    #[error("foods_per_level must be at least 1")]
    FoodsPerLevelZero,
    #[error("initial_snake_size must be at least 1")]
    SnakeSizeZero,
    #[error("initial snake of size {size} does not fit on {rows} rows")]
    SnakeDoesNotFit { size: usize, rows: usize },
    #[error("initial_food_count must be at least 1")]
    FoodCountZero,
    #[error("target_score must be at least 1 when set")]
    TargetScoreZero,
}

/// Configuration for a game instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells
    pub cols: usize,
    /// Board height in cells
    pub rows: usize,
    /// Initial level; also the initial tick rate in ticks per second
    pub starting_level: u32,
    /// Foods eaten before the level increments
    pub foods_per_level: u32,
    /// Level cap; the tick rate never rises past this
    pub max_level: u32,
    /// Snake segments at game start
    pub initial_snake_size: usize,
    /// Food items on the board at game start
    pub initial_food_count: usize,
    /// When true, the first colliding tick flags the collision instead of
    /// ending the game; a second one ends it
    pub collision_grace: bool,
    /// Optional finite objective: reaching this score wins the game
    pub target_score: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cols: 30,
            rows: 20,
            starting_level: 1,
            foods_per_level: 10,
            max_level: 25,
            initial_snake_size: 3,
            initial_food_count: 1,
            collision_grace: false,
            target_score: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    /// Create a small board for testing.
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Validate all fields; called before any game can start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 5 || self.cols < 5 {
            return Err(ConfigError::BoardTooSmall {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.starting_level == 0 {
            return Err(ConfigError::StartingLevelZero);
        }

        if self.starting_level > self.max_level {
            return Err(ConfigError::StartingLevelAboveMax {
                starting: self.starting_level,
                max: self.max_level,
            });
        }

        if self.foods_per_level == 0 {
            return Err(ConfigError::FoodsPerLevelZero);
        }

        if self.initial_snake_size == 0 {
            return Err(ConfigError::SnakeSizeZero);
        }

        // The body extends downward from the center row.
        if self.rows / 2 + self.initial_snake_size > self.rows {
            return Err(ConfigError::SnakeDoesNotFit {
                size: self.initial_snake_size,
                rows: self.rows,
            });
        }

        if self.initial_food_count == 0 {
            return Err(ConfigError::FoodCountZero);
        }

        if self.target_score == Some(0) {
            return Err(ConfigError::TargetScoreZero);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.cols, 30);
        assert_eq!(config.rows, 20);
        assert_eq!(config.starting_level, 1);
        assert_eq!(config.foods_per_level, 10);
        assert_eq!(config.max_level, 25);
        assert_eq!(config.initial_snake_size, 3);
        assert_eq!(config.initial_food_count, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_starting_level_above_max_rejected() {
        let config = GameConfig {
            starting_level: 30,
            max_level: 25,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::StartingLevelAboveMax {
                starting: 30,
                max: 25
            })
        );
    }

    #[test]
    fn test_tiny_board_rejected() {
        let config = GameConfig::new(4, 4);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BoardTooSmall { .. })
        ));
    }

    #[test]
    fn test_oversized_snake_rejected() {
        let config = GameConfig {
            rows: 10,
            initial_snake_size: 6,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SnakeDoesNotFit { size: 6, rows: 10 })
        );
    }

    #[test]
    fn test_zero_fields_rejected() {
        let base = GameConfig::default();

        let mut config = base.clone();
        config.starting_level = 0;
        assert_eq!(config.validate(), Err(ConfigError::StartingLevelZero));

        let mut config = base.clone();
        config.foods_per_level = 0;
        assert_eq!(config.validate(), Err(ConfigError::FoodsPerLevelZero));

        let mut config = base.clone();
        config.initial_snake_size = 0;
        assert_eq!(config.validate(), Err(ConfigError::SnakeSizeZero));

        let mut config = base.clone();
        config.initial_food_count = 0;
        assert_eq!(config.validate(), Err(ConfigError::FoodCountZero));

        let mut config = base;
        config.target_score = Some(0);
        assert_eq!(config.validate(), Err(ConfigError::TargetScoreZero));
    }
}
