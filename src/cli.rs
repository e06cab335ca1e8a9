//! CLI command implementations for Snake2.

pub(crate) mod play;
pub(crate) mod scores;
pub(crate) mod simulate;
pub(crate) mod text;

use clap::ValueEnum;
use snake2::render::Alignment;
use snake2::{GameConfig, Speed};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Output format for the `simulate` and `scores` commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Speed tier as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SpeedArg {
    /// 120 ms per step.
    Slowest,
    /// 95 ms per step.
    Slow,
    /// 70 ms per step.
    Normal,
    /// 50 ms per step.
    Fast,
    /// 40 ms per step.
    Fastest,
}

impl From<SpeedArg> for Speed {
    fn from(arg: SpeedArg) -> Self {
        match arg {
            SpeedArg::Slowest => Speed::Slowest,
            SpeedArg::Slow => Speed::Slow,
            SpeedArg::Normal => Speed::Normal,
            SpeedArg::Fast => Speed::Fast,
            SpeedArg::Fastest => Speed::Fastest,
        }
    }
}

/// Font for the `text` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum FontChoice {
    /// 11-pixel proportional font.
    Main,
    /// 8-pixel font.
    Small,
    /// 5-pixel digits.
    Digits,
}

/// Horizontal alignment for the `text` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum AlignArg {
    /// Flush left, after the margin.
    Left,
    /// Centered.
    Center,
    /// Flush right, before the margin.
    Right,
}

impl From<AlignArg> for Alignment {
    fn from(arg: AlignArg) -> Self {
        match arg {
            AlignArg::Left => Alignment::Left,
            AlignArg::Center => Alignment::Center,
            AlignArg::Right => Alignment::Right,
        }
    }
}

/// CLI error type.
#[derive(Debug)]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for CliError {}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snake2::ConfigError> for CliError {
    fn from(e: snake2::ConfigError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snake2::StorageError> for CliError {
    fn from(e: snake2::StorageError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snake2::GameError> for CliError {
    fn from(e: snake2::GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<snake2::InvariantViolation> for CliError {
    fn from(e: snake2::InvariantViolation) -> Self {
        Self::new(e.to_string())
    }
}

/// Install the log subscriber. `RUST_LOG` picks the level (default `warn`).
///
/// Logs go to `log_file` when given, else to stderr unless `stderr` is false.
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub(crate) fn init_logging(log_file: Option<&Path>, stderr: bool) -> Result<(), CliError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // A second init (tests, repeated calls) keeps the first subscriber.
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| CliError::new(format!("Failed to create {}: {e}", path.display())))?;
            let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
        }
        None if stderr => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
        None => {}
    }
    Ok(())
}

/// Load the configuration file, or defaults, then apply overrides.
///
/// # Errors
///
/// Returns an error if the file cannot be loaded or the result is invalid.
pub(crate) fn load_config(
    path: Option<&Path>,
    speed: Option<SpeedArg>,
    seed: Option<u64>,
) -> Result<GameConfig, CliError> {
    let mut config = match path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(speed) = speed {
        config.speed = speed.into();
    }
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;
    Ok(config)
}

/// The high-score file: `explicit`, or the default under the home directory.
///
/// # Errors
///
/// Returns an error if no explicit path is given and the home directory is unknown.
pub(crate) fn scores_path(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match explicit {
        Some(path) => Ok(path),
        None => Ok(snake2::scores::default_store_path()?),
    }
}
