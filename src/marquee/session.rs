use crate::{
    foundation::{core::Vec2, error::FolioResult},
    marquee::{
        config::MarqueeConfig,
        driver::{ScrollDriver, usable_half_width},
        oscillator::OscillatorBank,
        rate::RateController,
        track::{CarouselItem, Track},
    },
};

/// Capabilities a rendering environment lends to a mounted marquee.
pub trait RenderHost {
    /// Full rendered width of the doubled track in pixels, or `None` before layout.
    fn measure_track_width(&mut self) -> Option<f64>;

    /// Apply a translation to the track node.
    fn translate_track(&mut self, offset: Vec2);

    /// Apply a translation to tile `index` of the track.
    fn translate_item(&mut self, index: usize, offset: Vec2);

    /// Notified once per resource as the session tears down.
    fn released(&mut self, _resource: Teardown) {}
}

/// Resources released on unmount, in release order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Teardown {
    /// The track translation loop.
    ScrollDriver,
    /// Every per-tile bob.
    Oscillators,
    /// Pointer enter/leave handling.
    HoverListeners,
}

/// Lifecycle phase of a mounted marquee.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Source list is empty; nothing renders or animates.
    Empty,
    /// Waiting for a usable track width.
    Measuring,
    /// Scrolling.
    Running,
    /// Torn down; no further host updates.
    Unmounted,
}

/// Snapshot of the playback state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlaybackState {
    /// Lifecycle phase.
    pub phase: Phase,
    /// Current horizontal track offset in pixels.
    pub offset_px: f64,
    /// Current speed multiplier.
    pub speed_scale: f64,
    /// Multiplier being eased toward.
    pub target_scale: f64,
    /// Completed loops.
    pub cycles: u64,
    /// Pointer over the strip.
    pub hovered: bool,
}

/// A marquee mounted on a render host.
///
/// The session exclusively borrows its host for as long as it lives and releases every
/// animation in `Drop`, so a host can never receive updates from a torn-down strip.
pub struct MarqueeSession<'h, H: RenderHost> {
    host: &'h mut H,
    track: Track,
    driver: ScrollDriver,
    rate: RateController,
    oscillators: OscillatorBank,
    phase: Phase,
}

impl<'h, H: RenderHost> MarqueeSession<'h, H> {
    /// Mount a strip of `items` on `host`.
    ///
    /// Builds the doubled track and tile oscillators, then tries a first measurement. If the
    /// host cannot report a usable width yet the session stays in [`Phase::Measuring`] and
    /// re-measures on each tick.
    #[tracing::instrument(skip(items, cfg, host), fields(items = items.len()))]
    pub fn mount(
        items: Vec<CarouselItem>,
        cfg: &MarqueeConfig,
        host: &'h mut H,
    ) -> FolioResult<Self> {
        cfg.validate()?;

        let track = Track::duplicate(items);
        let phase = if track.is_empty() {
            Phase::Empty
        } else {
            Phase::Measuring
        };
        let oscillators = OscillatorBank::new(track.len(), &cfg.bob);

        let mut session = Self {
            host,
            track,
            driver: ScrollDriver::new(cfg.loop_duration_secs, cfg.direction),
            rate: RateController::new(&cfg.hover),
            oscillators,
            phase,
        };
        if session.phase == Phase::Measuring {
            session.try_start();
        }
        Ok(session)
    }

    fn try_start(&mut self) -> bool {
        let Some(half) = usable_half_width(self.host.measure_track_width()) else {
            tracing::debug!("track width not measurable yet; deferring scroll start");
            return false;
        };
        if !self.driver.start(half) {
            return false;
        }
        self.phase = Phase::Running;
        self.host.translate_track(self.driver.translation());
        tracing::info!(
            half_width_px = half,
            tiles = self.track.len(),
            "marquee scroll started"
        );
        true
    }

    /// Advance all animations by `dt` seconds and push the new translations to the host.
    pub fn tick(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        if matches!(self.phase, Phase::Empty | Phase::Unmounted) {
            return;
        }

        if self.oscillators.advance(dt) {
            for (index, offset) in self.oscillators.translations() {
                self.host.translate_item(index, offset);
            }
        }

        match self.phase {
            Phase::Measuring => {
                self.rate.advance(dt);
                self.try_start();
            }
            Phase::Running => {
                // Trapezoid over the frame so mid-transition speed changes integrate smoothly.
                let before = self.rate.speed_scale();
                self.rate.advance(dt);
                let after = self.rate.speed_scale();
                if self.driver.advance(dt, 0.5 * (before + after)) {
                    self.host.translate_track(self.driver.translation());
                }
            }
            Phase::Empty | Phase::Unmounted => {}
        }
    }

    /// Pointer entered the strip.
    pub fn pointer_enter(&mut self) {
        if self.rate.pointer_enter() {
            tracing::debug!(target_scale = self.rate.target_scale(), "hover damping");
        }
    }

    /// Pointer left the strip.
    pub fn pointer_leave(&mut self) {
        if self.rate.pointer_leave() {
            tracing::debug!(target_scale = self.rate.target_scale(), "hover release");
        }
    }

    /// Hold the track in place. Tile oscillators keep running.
    pub fn pause_scroll(&mut self) {
        self.driver.pause();
    }

    /// Resume after [`MarqueeSession::pause_scroll`].
    pub fn resume_scroll(&mut self) {
        self.driver.resume();
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The doubled track.
    pub fn track(&self) -> &Track {
        &self.track
    }

    /// Number of live tile oscillators.
    pub fn oscillator_count(&self) -> usize {
        self.oscillators.len()
    }

    /// Snapshot of scroll and hover state.
    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            phase: self.phase,
            offset_px: self.driver.offset_px(),
            speed_scale: self.rate.speed_scale(),
            target_scale: self.rate.target_scale(),
            cycles: self.driver.cycles(),
            hovered: self.rate.is_hovered(),
        }
    }

    /// Tear down explicitly. Equivalent to dropping the session.
    pub fn unmount(self) {}

    fn teardown(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        let was = self.phase;
        self.phase = Phase::Unmounted;
        if was == Phase::Empty {
            return;
        }

        self.driver.cancel();
        self.host.released(Teardown::ScrollDriver);
        self.oscillators.cancel();
        self.host.released(Teardown::Oscillators);
        self.rate.detach();
        self.host.released(Teardown::HoverListeners);
        tracing::info!(cycles = self.driver.cycles(), "marquee unmounted");
    }
}

impl<H: RenderHost> Drop for MarqueeSession<'_, H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<H: RenderHost> std::fmt::Debug for MarqueeSession<'_, H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarqueeSession")
            .field("phase", &self.phase)
            .field("tiles", &self.track.len())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/session.rs"]
mod tests;
