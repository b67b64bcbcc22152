use crate::animation::ease::Ease;

/// Interpolation contract for animation value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// A single-segment tween that can be retargeted mid-flight.
///
/// There is only ever one segment: `retarget` replaces it with a new segment that starts from
/// the currently interpolated value, so rapid retargets never queue or stack.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    elapsed: f64,
    duration: f64,
    ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone + PartialEq,
{
    /// A tween already at rest on `value`.
    ///
    /// `duration` is the length of every future transition; non-positive or non-finite
    /// durations make retargets snap.
    pub fn settled(value: T, duration: f64, ease: Ease) -> Self {
        let duration = if duration.is_finite() {
            duration.max(0.0)
        } else {
            0.0
        };
        Self {
            from: value.clone(),
            to: value,
            elapsed: duration,
            duration,
            ease,
        }
    }

    /// Normalized progress of the current segment in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at the current time.
    pub fn value(&self) -> T {
        if self.is_settled() {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(self.progress()))
    }

    /// Value the tween is heading toward.
    pub fn target(&self) -> &T {
        &self.to
    }

    /// `true` once the current segment has completed.
    pub fn is_settled(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Head toward `to`, starting from the current value.
    ///
    /// Returns `false` (and leaves the running segment alone) when `to` is already the target.
    pub fn retarget(&mut self, to: T) -> bool {
        if self.to == to {
            return false;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
        true
    }

    /// Advance the tween clock by `dt` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
