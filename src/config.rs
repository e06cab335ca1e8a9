//! Game configuration.
//!
//! A [`GameConfig`] is built once (defaults, JSON file, CLI overrides) and then
//! handed by reference to every level. Nothing mutates it afterwards; the speed
//! picked in the level menu lives in the session, not here.

use crate::error::ConfigError;
use crate::render::Image;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Snake speed tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Speed {
    /// 120 ms per step, 1 point per apple.
    Slowest,
    /// 95 ms per step, 3 points per apple.
    Slow,
    /// 70 ms per step, 5 points per apple.
    #[default]
    Normal,
    /// 50 ms per step, 7 points per apple.
    Fast,
    /// 40 ms per step, 9 points per apple.
    Fastest,
}

impl Speed {
    /// All tiers, slowest first.
    pub const ALL: [Speed; 5] = [
        Speed::Slowest,
        Speed::Slow,
        Speed::Normal,
        Speed::Fast,
        Speed::Fastest,
    ];

    /// Movement tick period.
    #[must_use]
    pub const fn tick(self) -> Duration {
        let ms = match self {
            Speed::Slowest => 120,
            Speed::Slow => 95,
            Speed::Normal => 70,
            Speed::Fast => 50,
            Speed::Fastest => 40,
        };
        Duration::from_millis(ms)
    }

    /// Points awarded for each apple at this speed.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Speed::Slowest => 1,
            Speed::Slow => 3,
            Speed::Normal => 5,
            Speed::Fast => 7,
            Speed::Fastest => 9,
        }
    }

    /// Menu label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Speed::Slowest => "Slowest",
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
            Speed::Fastest => "Fastest",
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable game settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in game pixels.
    pub screen_width: u16,
    /// Screen height in game pixels.
    pub screen_height: u16,
    /// Snake length at the start of a game.
    pub snake_length: u16,
    /// Speed tier selected when the program starts.
    pub speed: Speed,
    /// A bonus item appears after this many apples.
    pub bonus_trigger: u32,
    /// Starting value of the bonus countdown.
    pub bonus_countdown: u32,
    /// Period of one bonus countdown step, in milliseconds.
    pub bonus_countdown_ms: u64,
    /// Period of one death blink, in milliseconds.
    pub death_blink_ms: u64,
    /// Number of death blinks before the game-over screen.
    pub death_blinks: u32,
    /// Blink period of the letter being edited on the high-score screen.
    pub name_blink_ms: u64,
    /// Fixed RNG seed for apple and bonus placement (random when unset).
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 104,
            screen_height: 84,
            snake_length: 10,
            speed: Speed::Normal,
            bonus_trigger: 10,
            bonus_countdown: 20,
            bonus_countdown_ms: 100,
            death_blink_ms: 150,
            death_blinks: 10,
            name_blink_ms: 300,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// describes a grid the snake cannot fit in.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if u32::from(self.screen_width) > Image::MAX_WIDTH {
            return Err(ConfigError::Invalid(format!(
                "screen width {} exceeds {} pixels",
                self.screen_width,
                Image::MAX_WIDTH
            )));
        }
        let (width, height) = self.grid_size();
        if width < 4 || height < 2 {
            return Err(ConfigError::Invalid(format!(
                "screen {}x{} leaves a {width}x{height} grid",
                self.screen_width, self.screen_height
            )));
        }
        if self.snake_length < 2 {
            return Err(ConfigError::Invalid(format!(
                "snake length {} is below 2",
                self.snake_length
            )));
        }
        // The starting snake extends left from the middle column.
        if self.snake_length > width / 2 + 1 {
            return Err(ConfigError::Invalid(format!(
                "snake length {} does not fit a grid {width} cells wide",
                self.snake_length
            )));
        }
        if self.bonus_trigger == 0 || self.death_blinks == 0 {
            return Err(ConfigError::Invalid(
                "bonus_trigger and death_blinks must be non-zero".to_string(),
            ));
        }
        if self.bonus_countdown_ms == 0 || self.death_blink_ms == 0 || self.name_blink_ms == 0 {
            return Err(ConfigError::Invalid("timer periods must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Grid dimensions in cells: the playfield inside the border, 4 pixels per cell.
    #[must_use]
    pub const fn grid_size(&self) -> (u16, u16) {
        (
            self.screen_width.saturating_sub(8) / 4,
            self.screen_height.saturating_sub(16) / 4,
        )
    }

    /// Bonus countdown step period.
    #[must_use]
    pub const fn bonus_countdown_period(&self) -> Duration {
        Duration::from_millis(self.bonus_countdown_ms)
    }

    /// Death blink period.
    #[must_use]
    pub const fn death_blink_period(&self) -> Duration {
        Duration::from_millis(self.death_blink_ms)
    }

    /// Name editor blink period.
    #[must_use]
    pub const fn name_blink_period(&self) -> Duration {
        Duration::from_millis(self.name_blink_ms)
    }
}
