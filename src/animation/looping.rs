/// How a periodic animation maps time past its period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoopMode {
    /// Jump back to the start after each period.
    Repeat,
    /// Play forward then backward (yoyo); one full cycle is two periods.
    PingPong,
}

/// Map local time (seconds) onto normalized progress in `[0, 1)` / `[0, 1]` for a looping
/// animation with the given `period`.
///
/// Returns `None` for non-positive or non-finite periods or times so callers never divide by
/// zero or propagate NaN. Negative local time (still inside a start delay) maps to `0.0`.
pub fn loop_progress(local_secs: f64, period: f64, mode: LoopMode) -> Option<f64> {
    if !period.is_finite() || period <= 0.0 || !local_secs.is_finite() {
        return None;
    }
    if local_secs <= 0.0 {
        return Some(0.0);
    }
    match mode {
        LoopMode::Repeat => Some(local_secs.rem_euclid(period) / period),
        LoopMode::PingPong => {
            let cycle = 2.0 * period;
            let pos = local_secs.rem_euclid(cycle);
            if pos <= period {
                Some(pos / period)
            } else {
                Some((cycle - pos) / period)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/looping.rs"]
mod tests;
