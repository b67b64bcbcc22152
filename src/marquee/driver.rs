use crate::{
    animation::looping::{LoopMode, loop_progress},
    foundation::core::Vec2,
    marquee::config::ScrollDirection,
};

/// Returns the half width when a measured full track width can drive a loop.
pub fn usable_half_width(track_width_px: Option<f64>) -> Option<f64> {
    let w = track_width_px?;
    if !w.is_finite() || w <= 0.0 {
        return None;
    }
    Some(w / 2.0)
}

/// Linear, endlessly repeating translation of the doubled track.
///
/// The driver keeps its own scaled clock: each step adds `dt * speed_scale`, so the offset is a
/// pure function of elapsed time and the speed history. One loop always takes
/// `loop_duration_secs` of scaled time, whatever the measured width.
#[derive(Clone, Debug)]
pub struct ScrollDriver {
    loop_duration_secs: f64,
    direction: ScrollDirection,
    half_width_px: Option<f64>,
    local_secs: f64,
    cycles: u64,
    paused: bool,
    cancelled: bool,
}

impl ScrollDriver {
    /// A driver that has not started yet.
    pub fn new(loop_duration_secs: f64, direction: ScrollDirection) -> Self {
        Self {
            loop_duration_secs,
            direction,
            half_width_px: None,
            local_secs: 0.0,
            cycles: 0,
            paused: false,
            cancelled: false,
        }
    }

    /// Start looping over `half_width_px`. Returns `false` (and stays idle) for unusable widths
    /// or a cancelled driver.
    pub fn start(&mut self, half_width_px: f64) -> bool {
        if self.cancelled || !half_width_px.is_finite() || half_width_px <= 0.0 {
            return false;
        }
        self.half_width_px = Some(half_width_px);
        self.local_secs = 0.0;
        self.cycles = 0;
        true
    }

    /// `true` once a valid width has been supplied and the driver was not cancelled.
    pub fn is_running(&self) -> bool {
        self.half_width_px.is_some() && !self.cancelled
    }

    /// Suspend motion without losing position.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume after [`ScrollDriver::pause`].
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// `true` while paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Stop for good; further steps are ignored.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// `true` after [`ScrollDriver::cancel`].
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Width of one copy of the source content, once measured.
    pub fn half_width_px(&self) -> Option<f64> {
        self.half_width_px
    }

    /// Completed loops since start.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Advance by `dt` seconds at `speed_scale`. Returns `true` if the position moved.
    pub fn advance(&mut self, dt: f64, speed_scale: f64) -> bool {
        if !self.is_running() || self.paused {
            return false;
        }
        if !self.loop_duration_secs.is_finite() || self.loop_duration_secs <= 0.0 {
            return false;
        }
        let step = dt * speed_scale;
        if !step.is_finite() || step <= 0.0 {
            return false;
        }
        let total = self.local_secs + step;
        let wraps = (total / self.loop_duration_secs).floor();
        self.cycles = self.cycles.saturating_add(wraps as u64);
        self.local_secs = (total - wraps * self.loop_duration_secs).max(0.0);
        if self.local_secs >= self.loop_duration_secs {
            self.local_secs = 0.0;
            self.cycles = self.cycles.saturating_add(1);
        }
        true
    }

    /// Normalized position within the current loop in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        loop_progress(self.local_secs, self.loop_duration_secs, LoopMode::Repeat).unwrap_or(0.0)
    }

    /// Horizontal track offset in pixels; `0.0` before start.
    pub fn offset_px(&self) -> f64 {
        let Some(half) = self.half_width_px else {
            return 0.0;
        };
        let p = self.progress();
        match self.direction {
            ScrollDirection::Left => -half * p,
            ScrollDirection::Right => -half * (1.0 - p),
        }
    }

    /// Track translation as a 2-D vector.
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.offset_px(), 0.0)
    }

    /// Current velocity in px/s at `speed_scale`; zero before start.
    pub fn velocity_px_per_sec(&self, speed_scale: f64) -> f64 {
        match self.half_width_px {
            Some(half) => half / self.loop_duration_secs * speed_scale,
            None => 0.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/driver.rs"]
mod tests;
