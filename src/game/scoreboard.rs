//! Score and bonus countdown readouts above the arena.

use crate::render::{Canvas, Font};

/// Largest score the four-digit readout can show.
pub const MAX_DISPLAY_SCORE: u32 = 9999;

/// Largest countdown the two-digit readout can show.
pub const MAX_DISPLAY_COUNTDOWN: u32 = 99;

/// Running score for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBoard {
    score: u32,
}

impl ScoreBoard {
    /// Top-left pixel of the readout.
    pub const ORIGIN: (i32, i32) = (2, 2);

    /// A board at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { score: 0 }
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.score = 0;
    }

    /// Add points, saturating.
    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// The exact score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Four zero-padded digits. Scores above 9999 show as `9999`.
    #[must_use]
    pub fn as_string(&self) -> String {
        format!("{:04}", self.score.min(MAX_DISPLAY_SCORE))
    }

    /// Paint the readout with the digit font.
    pub fn paint<C: Canvas + ?Sized>(&self, digits: &Font, canvas: &mut C) {
        let (x, y) = Self::ORIGIN;
        digits.render(&self.as_string()).paint(x, y, false, canvas);
    }
}

/// Result of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Still counting; the value left.
    Running(u32),
    /// Reached zero.
    Expired,
}

/// The bonus countdown, worth its remaining value when the bonus is eaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BonusCountdown {
    value: u32,
}

impl BonusCountdown {
    /// A countdown at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Restart from `start`.
    pub fn reset(&mut self, start: u32) {
        self.value = start;
    }

    /// Remaining value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Count down by one.
    pub fn tick(&mut self) -> CountdownTick {
        self.value = self.value.saturating_sub(1);
        if self.value == 0 {
            CountdownTick::Expired
        } else {
            CountdownTick::Running(self.value)
        }
    }

    /// Two zero-padded digits, capped at `99`.
    #[must_use]
    pub fn as_string(&self) -> String {
        format!("{:02}", self.value.min(MAX_DISPLAY_COUNTDOWN))
    }

    /// Paint the readout in the top-right corner of a screen `screen_width`
    /// pixels wide.
    pub fn paint<C: Canvas + ?Sized>(&self, digits: &Font, screen_width: u16, canvas: &mut C) {
        let x = i32::from(screen_width) - 9;
        digits.render(&self.as_string()).paint(x, 2, false, canvas);
    }
}
