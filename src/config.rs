//! Game configuration.
//!
//! There is intentionally little to configure: the rule set and the
//! 4-symbol alphabet are fixed. What remains is the RNG seed and the
//! nominal pause before each level advance. The core only stores the
//! delay; the presentation layer owns the actual timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Nominal pause between completing a level and the next level starting.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(1000);

/// Configuration for one game instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the random sequence generator.
    pub seed: u64,
    /// How long presentation should wait before firing the level advance.
    pub advance_delay: Duration,
}

impl GameConfig {
    /// Create a configuration with the given seed and the default delay.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }

    /// Override the advance delay (builder pattern).
    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GameConfig::new(42);
        assert_eq!(config.seed, 42);
        assert_eq!(config.advance_delay, DEFAULT_ADVANCE_DELAY);
    }

    #[test]
    fn test_config_builder_override() {
        let config = GameConfig::new(42).with_advance_delay(Duration::from_millis(250));
        assert_eq!(config.advance_delay, Duration::from_millis(250));
    }
}
