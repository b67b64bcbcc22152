/// Visible-area ratio most sections wait for before revealing.
pub const SECTION_THRESHOLD: f64 = 0.1;

/// One-shot visibility latch driven by an intersection observer.
///
/// Once revealed it stays revealed, so entrance animations run at most once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    revealed: bool,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(SECTION_THRESHOLD)
    }
}

impl RevealLatch {
    /// Latch that trips when at least `threshold` of the section is visible.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed: false,
        }
    }

    /// Feed the latest visible ratio. Returns `true` only on the observation that trips the latch.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        if self.revealed || !visible_ratio.is_finite() {
            return false;
        }
        // A zero threshold still needs some intersection.
        let trips = if self.threshold == 0.0 {
            visible_ratio > 0.0
        } else {
            visible_ratio >= self.threshold
        };
        self.revealed = trips;
        trips
    }

    /// `true` once tripped.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/reveal.rs"]
mod tests;
