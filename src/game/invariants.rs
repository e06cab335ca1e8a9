//! Board invariants - sanity checks that detect bugs.
//!
//! A correctly played board always holds one unbroken snake. These checks
//! never fire in normal play; if they do, the step logic is wrong.

use crate::game::{CellKind, GameGrid};

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all board invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(grid: &GameGrid) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let length = grid.length();

    let mut heads = Vec::new();
    let mut tails = 0u32;
    let mut counters = Vec::new();

    for (coord, cell) in grid.iter() {
        match cell.kind {
            CellKind::Free if cell.counter != 0 => violations.push(InvariantViolation {
                message: format!("Free cell at {coord:?} has counter {}", cell.counter),
            }),
            kind if kind.is_snake() => {
                if cell.counter == 0 {
                    violations.push(InvariantViolation {
                        message: format!("{kind:?} cell at {coord:?} has counter 0"),
                    });
                }
                counters.push(cell.counter);
                if kind == CellKind::Head {
                    heads.push((coord, cell.counter));
                }
                if kind == CellKind::Tail {
                    tails += 1;
                    if cell.counter != 1 {
                        violations.push(InvariantViolation {
                            message: format!("Tail at {coord:?} has counter {}", cell.counter),
                        });
                    }
                }
            }
            _ => {}
        }
    }

    if heads.len() != 1 {
        violations.push(InvariantViolation {
            message: format!("Expected one head, found {}", heads.len()),
        });
    }
    if let Some(&(coord, counter)) = heads.first() {
        if coord != grid.head() {
            violations.push(InvariantViolation {
                message: format!("Head cell at {coord:?} but head position is {:?}", grid.head()),
            });
        }
        if counter != length {
            violations.push(InvariantViolation {
                message: format!("Head counter {counter} != length {length}"),
            });
        }
    }
    if length >= 2 && tails != 1 {
        violations.push(InvariantViolation {
            message: format!("Expected one tail, found {tails}"),
        });
    }

    // Counters must be exactly length, length - 1, ..., 1.
    counters.sort_unstable_by(|a, b| b.cmp(a));
    let expected: Vec<u32> = (1..=length).rev().collect();
    if counters != expected {
        violations.push(InvariantViolation {
            message: format!("Chain counters {counters:?} do not run from {length} down to 1"),
        });
    }

    // Each segment except the head must touch the next one up the chain.
    for (coord, cell) in grid.iter().filter(|(_, c)| c.kind.is_snake() && c.counter < length) {
        let linked = crate::game::Direction::ALL.iter().any(|&d| {
            grid.cell(grid.neighbor(coord, d))
                .is_some_and(|n| n.kind.is_snake() && n.counter == cell.counter + 1)
        });
        if !linked {
            violations.push(InvariantViolation {
                message: format!("Segment {} at {coord:?} is detached from the chain", cell.counter),
            });
        }
    }

    violations
}

/// Assert all board invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(grid: &GameGrid) {
    let violations = check_invariants(grid);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Board invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_grid: &GameGrid) {}
