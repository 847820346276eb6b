use crate::error::ConfigError;
use crate::generator::{DEFAULT_GRID_SIZE, DEFAULT_MAX_ATTEMPTS, GeneratorConfig};

pub const DEFAULT_WORDS_PER_ROUND: usize = 5;
pub const DEFAULT_MIN_WORDS: usize = 3;

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Side length N of the N×N grid
    pub grid_size: usize,
    /// Random placement trials per word
    pub max_attempts: usize,
    /// Words drawn from the theme for each round
    pub words_per_round: usize,
    /// Below this many usable theme words the fallback list is used
    pub min_words: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            words_per_round: DEFAULT_WORDS_PER_ROUND,
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.words_per_round == 0 {
            return Err(ConfigError::ZeroWordsPerRound);
        }
        Ok(())
    }

    #[must_use]
    pub const fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            grid_size: self.grid_size,
            max_attempts: self.max_attempts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.generator(), GeneratorConfig::default());
    }

    #[test]
    fn test_validate_rejects_zeroes() {
        let base = GameConfig::default();
        let grid = GameConfig { grid_size: 0, ..base };
        let attempts = GameConfig { max_attempts: 0, ..base };
        let words = GameConfig { words_per_round: 0, ..base };
        assert_eq!(grid.validate(), Err(ConfigError::EmptyGrid));
        assert_eq!(attempts.validate(), Err(ConfigError::ZeroAttempts));
        assert_eq!(words.validate(), Err(ConfigError::ZeroWordsPerRound));
    }
}
