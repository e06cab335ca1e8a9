#![no_main]

//! Playfield fuzzer.
//!
//! Plays a game with fuzzer-chosen turns, bonus spawns and grid sizes, and
//! checks the board invariants after every step.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use snake2::game::{Direction, GameGrid, StepOutcome, check_invariants};

/// A fuzzer-generated action.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzAction {
    /// Queue a turn, then step.
    Turn(u8),
    /// Step without turning.
    Step,
    /// Place a bonus item.
    Bonus,
    /// Remove the bonus item.
    RemoveBonus,
}

/// Structured input for playfield fuzzing.
#[derive(Arbitrary, Debug)]
struct GridInput {
    width: u8,
    height: u8,
    length: u8,
    seed: u64,
    actions: Vec<FuzzAction>,
}

fuzz_target!(|input: GridInput| {
    // Cap values to avoid excessive runtime
    let width = u16::from(input.width % 30).max(4);
    let height = u16::from(input.height % 30).max(2);
    let length = u16::from(input.length % 8).max(2);

    let mut grid = GameGrid::new(width, height, length, Some(input.seed));
    if grid.start().is_err() {
        return;
    }

    for action in input.actions.into_iter().take(2000) {
        match action {
            FuzzAction::Turn(d) => {
                grid.turn(Direction::ALL[usize::from(d) % Direction::ALL.len()]);
            }
            FuzzAction::Step => {}
            FuzzAction::Bonus => {
                let _ = grid.add_bonus();
                continue;
            }
            FuzzAction::RemoveBonus => {
                grid.remove_bonus();
                continue;
            }
        }
        match grid.step() {
            Ok(StepOutcome::Collision) | Err(_) => return,
            Ok(_) => {}
        }
        let violations = check_invariants(&grid);
        assert!(violations.is_empty(), "{violations:?}");
    }
});
