//! Simulate command implementation - a headless game played by a greedy
//! autopilot.

use super::{CliError, OutputFormat, SpeedArg};
use serde::Serialize;
use snake2::game::{CellKind, Coord, Direction, GameGrid};
use snake2::levels::{Arena, ArenaState, Context, Key};
use snake2::{Fonts, GameConfig, HighScoreTable, Session};

/// JSON-serializable simulation summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonSummary {
    /// Random seed used.
    pub(super) seed: u64,
    /// Speed tier.
    pub(super) speed: String,
    /// Movement ticks played.
    pub(super) ticks: u32,
    /// Final score.
    pub(super) score: u32,
    /// Final snake length.
    pub(super) length: u32,
    /// Whether the run ended in a collision.
    pub(super) crashed: bool,
}

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the board breaks.
pub(crate) fn execute(
    seed: Option<u64>,
    ticks: u32,
    speed: Option<SpeedArg>,
    config: Option<std::path::PathBuf>,
    format: OutputFormat,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(42)
    });
    let config = super::load_config(config.as_deref(), speed, Some(seed))?;
    let (summary, arena) = simulate(&config, seed, ticks)?;

    match format {
        OutputFormat::Text => {
            print!("{}", arena.grid().render_ascii());
            println!();
            println!("Simulation (seed: {seed}, speed: {})", summary.speed);
            println!("  Ticks: {}", summary.ticks);
            println!("  Score: {}", summary.score);
            println!("  Length: {}", summary.length);
            if summary.crashed {
                println!("  Ended in a collision");
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary).map_err(|e| CliError::new(e.to_string()))?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Play up to `ticks` movement steps and summarise the run.
///
/// # Errors
///
/// Returns an error if the board breaks.
pub(super) fn simulate(config: &GameConfig, seed: u64, ticks: u32) -> Result<(JsonSummary, Arena), CliError> {
    let fonts = Fonts::load().map_err(|e| CliError::new(e.to_string()))?;
    let mut session = Session::new(config.speed, HighScoreTable::new(), None);
    let mut ctx = Context {
        config,
        session: &mut session,
        fonts: &fonts,
    };
    let mut arena = Arena::new(config);
    arena.start(&ctx)?;

    let tick = config.speed.tick();
    let mut played = 0;
    while played < ticks && arena.state() == ArenaState::Running {
        if let Some(direction) = choose(arena.grid()) {
            arena.key(key_for(direction), &mut ctx);
        }
        arena.advance(tick, &mut ctx)?;
        played += 1;
    }
    tracing::info!(seed, ticks = played, score = arena.score(), "simulation finished");

    let summary = JsonSummary {
        seed,
        speed: config.speed.to_string(),
        ticks: played,
        score: arena.score(),
        length: arena.grid().length(),
        crashed: arena.state() != ArenaState::Running,
    };
    Ok((summary, arena))
}

const fn key_for(direction: Direction) -> Key {
    match direction {
        Direction::Up => Key::Up,
        Direction::Down => Key::Down,
        Direction::Left => Key::Left,
        Direction::Right => Key::Right,
    }
}

/// Pick the safe direction that brings the head closest to food.
///
/// Returns `None` when every move is fatal.
fn choose(grid: &GameGrid) -> Option<Direction> {
    let head = grid.head();
    let targets: Vec<Coord> = grid
        .iter()
        .filter(|(_, cell)| cell.food && !cell.kind.is_snake())
        .map(|(at, _)| at)
        .collect();

    Direction::ALL
        .into_iter()
        .filter(|&d| d != grid.direction().reverse())
        .filter(|&d| {
            let next = grid.neighbor(head, d);
            grid.cell(next)
                .is_some_and(|cell| !cell.kind.is_snake() || cell.kind == CellKind::Tail)
        })
        .min_by_key(|&d| {
            let next = grid.neighbor(head, d);
            targets
                .iter()
                .map(|&t| distance(grid, next, t))
                .min()
                .unwrap_or(0)
        })
}

/// Manhattan distance on the wrapping grid.
fn distance(grid: &GameGrid, a: Coord, b: Coord) -> u32 {
    let dx = a.x.abs_diff(b.x);
    let dy = a.y.abs_diff(b.y);
    u32::from(dx.min(grid.width() - dx)) + u32::from(dy.min(grid.height() - dy))
}
