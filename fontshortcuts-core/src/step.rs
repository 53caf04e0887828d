/// Step arithmetic for the increase/decrease commands
use crate::constants::MAX_FONT_SIZE;

/// Which way a step command moves the font size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Increase => 1.0,
            Direction::Decrease => -1.0,
        }
    }
}

/// Values a step command persists: the new size and the line height paired with it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepChange {
    pub font_size: i64,
    pub line_height: f64,
}

/// Compute the next font size and its line height.
///
/// Returns `None` when the rounded, clamped candidate equals `current`, which
/// covers a zero step and an increase at the ceiling. Only the upper bound is
/// enforced here; a decrease may go below `MIN_FONT_SIZE`.
pub fn compute_step(
    current: f64,
    step: f64,
    direction: Direction,
    line_height_ratio: f64,
) -> Option<StepChange> {
    let rounded = round_half_up(current + step * direction.sign());
    if rounded.is_nan() {
        return None;
    }

    let candidate = clamp_font_size(rounded);
    if !candidate.is_finite() || candidate == current {
        return None;
    }

    Some(StepChange {
        font_size: candidate as i64,
        line_height: candidate * line_height_ratio,
    })
}

/// Upper clamp for the step path. A lower clamp belongs here too if one is ever added.
pub fn clamp_font_size(candidate: f64) -> f64 {
    candidate.min(MAX_FONT_SIZE as f64)
}

/// Round to the nearest integer, ties toward positive infinity (-2.5 -> -2)
fn round_half_up(value: f64) -> f64 {
    // `value + 0.5` is inexact near 2^53, so compare the fraction instead
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
