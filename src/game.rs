//! Game layer for Snake II.
//!
//! Implements the playfield rules:
//! - Toroidal grid of cells holding the snake, apples and bonus items
//! - One movement step per tick with feeding, growth and collision
//! - Cell sprites and the arena readouts
//! - Invariant checks on the snake chain

pub mod cell;
pub mod grid;
pub mod invariants;
pub mod scoreboard;

pub use cell::{BonusHalf, BonusKind, Cell, CellKind, Direction, corner_direction};
pub use grid::{Coord, GameGrid, StepOutcome};
pub use invariants::{InvariantViolation, check_invariants};
pub use scoreboard::{BonusCountdown, CountdownTick, ScoreBoard};
