use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::Vec2;

/// Absolute 0-based frame index on a host's frame timeline.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> FolioResult<Self> {
        if den == 0 {
            return Err(FolioError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(FolioError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Duration of one frame in seconds.
    pub fn frame_duration_secs(self) -> f64 {
        f64::from(self.den) / f64::from(self.num)
    }

    /// Convert frame count to seconds.
    pub fn frames_to_secs(self, frames: u64) -> f64 {
        (frames as f64) * self.frame_duration_secs()
    }

    /// Convert seconds to frame count using floor semantics.
    pub fn secs_to_frames_floor(self, secs: f64) -> u64 {
        (secs * self.as_f64()).floor().max(0.0) as u64
    }
}

/// Fixed-rate frame clock used to drive animations headlessly.
///
/// Each step's `dt` is derived from absolute frame times rather than accumulated, so
/// long runs do not drift from `frames_to_secs`.
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    fps: Fps,
    frame: FrameIndex,
}

impl FrameClock {
    /// Start a clock at frame 0.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            frame: FrameIndex(0),
        }
    }

    /// Current frame.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// Elapsed seconds at the current frame.
    pub fn now_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.frame.0)
    }

    /// Advance by one frame and return the elapsed `dt` in seconds.
    pub fn step(&mut self) -> f64 {
        let before = self.now_secs();
        self.frame = FrameIndex(self.frame.0.saturating_add(1));
        self.now_secs() - before
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
