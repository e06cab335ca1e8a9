//! Error types for the snake engine.

use crate::game::InvariantViolation;
use std::fmt;
use std::io;

/// Failure to read or write the high-score store.
#[derive(Debug)]
pub enum StorageError {
    /// The file could not be read or written.
    Io(io::Error),
    /// The file contents are not valid JSON for a score table.
    Parse(serde_json::Error),
    /// The JSON parsed but does not describe a valid table.
    Shape(String),
    /// No home directory to place the default store under.
    NoHome,
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "score store I/O error: {e}"),
            Self::Parse(e) => write!(f, "score store is not valid JSON: {e}"),
            Self::Shape(reason) => write!(f, "score store is malformed: {reason}"),
            Self::NoHome => write!(f, "cannot determine the home directory"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Shape(_) | Self::NoHome => None,
        }
    }
}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// A glyph table that cannot be decoded at the declared font height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontError {
    /// Font height of zero.
    ZeroHeight,
    /// The glyph's content bit count is not a multiple of the font height.
    MalformedGlyph {
        /// Character the glyph belongs to.
        ch: char,
        /// Number of content bits after the marker bit.
        bits: u32,
        /// Declared font height.
        height: u32,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHeight => write!(f, "font height must be non-zero"),
            Self::MalformedGlyph { ch, bits, height } => write!(
                f,
                "glyph {ch:?} has {bits} content bits, not a multiple of height {height}"
            ),
        }
    }
}

impl std::error::Error for FontError {}

/// Failure to load a game configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not a valid configuration.
    Parse(serde_json::Error),
    /// A value is outside the range the engine supports.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "cannot read config: {e}"),
            Self::Parse(e) => write!(f, "invalid config: {e}"),
            Self::Invalid(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Fatal failure while running the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A built-in font failed to decode.
    Font(FontError),
    /// The board reached a state the rules cannot continue from.
    Invariant(InvariantViolation),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(e) => write!(f, "font error: {e}"),
            Self::Invariant(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Font(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}

impl From<FontError> for GameError {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

impl From<InvariantViolation> for GameError {
    fn from(e: InvariantViolation) -> Self {
        Self::Invariant(e)
    }
}
