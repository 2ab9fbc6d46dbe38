//! Derived match statistics
//!
//! Every rate here guards its denominator: an empty over count yields `0.0`
//! (or `None` for the chase equation) instead of dividing by zero.

use std::fmt;

/// Overs as a fractional count, `overs + balls / 6`
pub fn fractional_overs(overs: u32, balls: u32) -> f64 {
    f64::from(overs) + f64::from(balls) / 6.0
}

/// Current run rate: runs per over, `0.0` before the first ball
pub fn run_rate(runs: u32, overs: u32, balls: u32) -> f64 {
    let total = fractional_overs(overs, balls);
    if total > 0.0 {
        f64::from(runs) / total
    } else {
        0.0
    }
}

/// Runs needed per over to reach `target` in the balls that remain.
///
/// Returns `None` once no balls remain (or the innings is over-bowled).
pub fn required_run_rate(target: u32, runs: u32, max_overs: u32, overs: u32, balls: u32) -> Option<f64> {
    let remaining = remaining_balls(max_overs, overs, balls)?;
    let needed = target.saturating_sub(runs);
    Some(f64::from(needed) * 6.0 / f64::from(remaining))
}

/// Balls left in an innings of `max_overs`, `None` when none remain
pub fn remaining_balls(max_overs: u32, overs: u32, balls: u32) -> Option<u32> {
    let bowled = u64::from(overs) * 6 + u64::from(balls);
    let limit = u64::from(max_overs) * 6;
    match limit.checked_sub(bowled) {
        Some(0) | None => None,
        Some(n) => u32::try_from(n).ok(),
    }
}

/// Batting strike rate: runs per hundred balls
pub fn strike_rate(runs: u32, balls: u32) -> f64 {
    if balls == 0 {
        0.0
    } else {
        f64::from(runs) * 100.0 / f64::from(balls)
    }
}

/// Bowling economy: runs conceded per over
pub fn economy(runs: u32, overs: u32, balls: u32) -> f64 {
    run_rate(runs, overs, balls)
}

/// A rate rendered with exactly two decimal places
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rate(pub f64);

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
