use crate::{
    animation::{
        ease::Ease,
        looping::{LoopMode, loop_progress},
    },
    foundation::core::Vec2,
    marquee::config::BobConfig,
};

/// Vertical yoyo for one track tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemOscillator {
    /// Track index this oscillator drives.
    pub index: usize,
    /// Peak upward displacement in pixels.
    pub amplitude_px: f64,
    /// One-way duration (rest to peak) in seconds.
    pub half_period_secs: f64,
    /// Seconds before the first movement.
    pub delay_secs: f64,
    /// Ease applied on each leg.
    pub ease: Ease,
}

impl ItemOscillator {
    /// Oscillator parameters for track index `index`.
    pub fn for_index(index: usize, cfg: &BobConfig) -> Self {
        let variants = cfg.period_variants.max(1) as usize;
        let variant = (index % variants) as f64;
        Self {
            index,
            amplitude_px: cfg.amplitude_px,
            half_period_secs: cfg.base_half_period_secs + variant * cfg.half_period_step_secs,
            delay_secs: index as f64 * cfg.stagger_secs,
            ease: cfg.ease,
        }
    }

    /// Vertical offset in pixels at `elapsed_secs` since mount, in `[-amplitude_px, 0]`.
    pub fn offset_at(&self, elapsed_secs: f64) -> f64 {
        let local = elapsed_secs - self.delay_secs;
        match loop_progress(local, self.half_period_secs, LoopMode::PingPong) {
            Some(p) => -self.amplitude_px * self.ease.apply(p),
            None => 0.0,
        }
    }
}

/// All tile oscillators of a strip, sharing one clock that is independent of the scroll driver.
#[derive(Clone, Debug, Default)]
pub struct OscillatorBank {
    oscillators: Vec<ItemOscillator>,
    elapsed_secs: f64,
    cancelled: bool,
}

impl OscillatorBank {
    /// One oscillator per tile index in `0..count`.
    pub fn new(count: usize, cfg: &BobConfig) -> Self {
        Self {
            oscillators: (0..count)
                .map(|i| ItemOscillator::for_index(i, cfg))
                .collect(),
            elapsed_secs: 0.0,
            cancelled: false,
        }
    }

    /// Number of oscillators.
    pub fn len(&self) -> usize {
        self.oscillators.len()
    }

    /// `true` when there are no tiles to bob.
    pub fn is_empty(&self) -> bool {
        self.oscillators.is_empty()
    }

    /// Oscillator parameters for tile `index`.
    pub fn get(&self, index: usize) -> Option<&ItemOscillator> {
        self.oscillators.get(index)
    }

    /// Seconds the bank clock has run.
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    /// Advance the shared clock. Returns `false` if cancelled or `dt` is unusable.
    pub fn advance(&mut self, dt: f64) -> bool {
        if self.cancelled || !dt.is_finite() || dt <= 0.0 {
            return false;
        }
        self.elapsed_secs += dt;
        true
    }

    /// Current per-tile translations `(index, offset)`.
    pub fn translations(&self) -> impl Iterator<Item = (usize, Vec2)> + '_ {
        let t = self.elapsed_secs;
        self.oscillators
            .iter()
            .map(move |o| (o.index, Vec2::new(0.0, o.offset_at(t))))
    }

    /// Stop all oscillators.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// `true` after [`OscillatorBank::cancel`].
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/oscillator.rs"]
mod tests;
