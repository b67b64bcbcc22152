use crate::{
    animation::ease::Ease,
    foundation::error::{FolioError, FolioResult},
};

/// Direction the track content travels across the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollDirection {
    /// Content moves right-to-left (offset goes from `0` to `-half_width`).
    #[default]
    Left,
    /// Content moves left-to-right (offset goes from `-half_width` to `0`).
    Right,
}

/// Timing constants for a marquee strip.
///
/// Every field has a default, so an empty JSON object is a valid config.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    /// Seconds to traverse one copy of the source content at speed scale `1.0`.
    pub loop_duration_secs: f64,
    /// Travel direction.
    pub direction: ScrollDirection,
    /// Pointer-hover damping.
    pub hover: HoverConfig,
    /// Per-item vertical bob.
    pub bob: BobConfig,
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            loop_duration_secs: 65.0,
            direction: ScrollDirection::Left,
            hover: HoverConfig::default(),
            bob: BobConfig::default(),
        }
    }
}

/// How the scroll speed reacts to the pointer entering the strip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    /// Speed multiplier while hovered, in `(0, 1]`.
    pub damped_scale: f64,
    /// Seconds to ease between the normal and damped speed. Must be positive.
    pub transition_secs: f64,
    /// Ease applied to the speed transition.
    pub ease: Ease,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            damped_scale: 0.3,
            transition_secs: 0.5,
            ease: Ease::OutQuad,
        }
    }
}

/// Per-item vertical oscillation.
///
/// Item `i` bobs with half period `base_half_period_secs + (i % period_variants) *
/// half_period_step_secs` after a start delay of `i * stagger_secs`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BobConfig {
    /// Peak upward displacement in pixels.
    pub amplitude_px: f64,
    /// One-way (0 to peak) duration of the fastest variant.
    pub base_half_period_secs: f64,
    /// Added per variant step.
    pub half_period_step_secs: f64,
    /// Number of distinct periods cycled through by index.
    pub period_variants: u32,
    /// Start delay added per item index.
    pub stagger_secs: f64,
    /// Ease applied to each one-way leg.
    pub ease: Ease,
}

impl Default for BobConfig {
    fn default() -> Self {
        Self {
            amplitude_px: 8.0,
            base_half_period_secs: 2.0,
            half_period_step_secs: 0.5,
            period_variants: 3,
            stagger_secs: 0.15,
            ease: Ease::InOutSine,
        }
    }
}

fn finite_positive(name: &str, v: f64) -> FolioResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(FolioError::validation(format!("{name} must be > 0, got {v}")));
    }
    Ok(())
}

fn finite_non_negative(name: &str, v: f64) -> FolioResult<()> {
    if !v.is_finite() || v < 0.0 {
        return Err(FolioError::validation(format!("{name} must be >= 0, got {v}")));
    }
    Ok(())
}

impl MarqueeConfig {
    /// Validate timing constants.
    pub fn validate(&self) -> FolioResult<()> {
        finite_positive("loop_duration_secs", self.loop_duration_secs)?;
        self.hover.validate()?;
        self.bob.validate()
    }
}

impl HoverConfig {
    fn validate(&self) -> FolioResult<()> {
        let s = self.damped_scale;
        if !s.is_finite() || s <= 0.0 || s > 1.0 {
            return Err(FolioError::validation(format!(
                "hover.damped_scale must be in (0, 1], got {s}"
            )));
        }
        finite_positive("hover.transition_secs", self.transition_secs)
    }
}

impl BobConfig {
    fn validate(&self) -> FolioResult<()> {
        finite_non_negative("bob.amplitude_px", self.amplitude_px)?;
        finite_positive("bob.base_half_period_secs", self.base_half_period_secs)?;
        finite_non_negative("bob.half_period_step_secs", self.half_period_step_secs)?;
        finite_non_negative("bob.stagger_secs", self.stagger_secs)?;
        if self.period_variants == 0 {
            return Err(FolioError::validation("bob.period_variants must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/config.rs"]
mod tests;
