//! Benchmarks for the playfield step and paint.
//!
//! The step is the per-tick hot path; painting runs every frame.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use snake2::game::{Direction, GameGrid, StepOutcome};
use snake2::render::Screen;

fn started(seed: u64) -> GameGrid {
    let mut grid = GameGrid::new(24, 17, 10, Some(seed));
    let _ = grid.start();
    grid
}

fn bench_step(c: &mut Criterion) {
    c.bench_function("grid_step_1000", |b| {
        b.iter(|| {
            let mut grid = started(black_box(42));
            for step in 0..1000u32 {
                grid.turn(if step % 24 == 23 {
                    Direction::Down
                } else {
                    Direction::Right
                });
                match grid.step() {
                    Ok(StepOutcome::Collision) | Err(_) => break,
                    Ok(outcome) => {
                        black_box(outcome);
                    }
                }
            }
            black_box(grid)
        });
    });
}

fn bench_paint(c: &mut Criterion) {
    let grid = started(7);
    c.bench_function("grid_paint", |b| {
        b.iter(|| {
            let mut screen = Screen::new(104, 84);
            black_box(&grid).paint(&mut screen);
            black_box(screen)
        });
    });
}

fn bench_add_bonus(c: &mut Criterion) {
    c.bench_function("grid_add_bonus", |b| {
        let mut grid = started(3);
        b.iter(|| black_box(grid.add_bonus()));
    });
}

criterion_group!(benches, bench_step, bench_paint, bench_add_bonus);
criterion_main!(benches);
