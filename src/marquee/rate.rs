use crate::{animation::tween::Tween, marquee::config::HoverConfig};

/// Nominal (un-hovered) speed multiplier.
pub const FULL_SPEED: f64 = 1.0;

/// Pointer hover state that eases the scroll speed multiplier.
///
/// Enter and leave only set the target; the single underlying tween always restarts from the
/// value it is currently showing.
#[derive(Clone, Debug)]
pub struct RateController {
    speed: Tween<f64>,
    damped_scale: f64,
    hovered: bool,
    attached: bool,
}

impl RateController {
    /// Controller at full speed, listening for hover events.
    pub fn new(cfg: &HoverConfig) -> Self {
        Self {
            speed: Tween::settled(FULL_SPEED, cfg.transition_secs, cfg.ease),
            damped_scale: cfg.damped_scale,
            hovered: false,
            attached: true,
        }
    }

    /// Pointer entered the strip. Returns `true` if a new transition started.
    pub fn pointer_enter(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.hovered = true;
        self.speed.retarget(self.damped_scale)
    }

    /// Pointer left the strip. Returns `true` if a new transition started.
    pub fn pointer_leave(&mut self) -> bool {
        if !self.attached {
            return false;
        }
        self.hovered = false;
        self.speed.retarget(FULL_SPEED)
    }

    /// Advance the speed transition by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.speed.advance(dt);
    }

    /// Current speed multiplier.
    pub fn speed_scale(&self) -> f64 {
        self.speed.value()
    }

    /// Multiplier the controller is easing toward.
    pub fn target_scale(&self) -> f64 {
        *self.speed.target()
    }

    /// `true` while the pointer is over the strip.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// `true` while a speed transition is in flight.
    pub fn is_transitioning(&self) -> bool {
        !self.speed.is_settled()
    }

    /// Stop reacting to pointer events.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// `false` after [`RateController::detach`].
    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/rate.rs"]
mod tests;
