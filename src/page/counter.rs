/// One stat shown in the About section, e.g. `10+ Projects Completed`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Stat {
    /// Final value.
    pub value: u32,
    /// Text appended to the number.
    #[serde(default)]
    pub suffix: String,
    /// Caption.
    pub label: String,
}

impl Stat {
    /// Count-up animation toward this stat's value.
    pub fn counter(&self) -> CountUp {
        CountUp::new(self.value)
    }

    /// Render `shown` with this stat's suffix, e.g. `7+`.
    pub fn format(&self, shown: u32) -> String {
        format!("{shown}{}", self.suffix)
    }
}

/// Count-up animation that ticks from zero to a target in discrete steps.
///
/// Mirrors an interval timer: the value advances by `target / steps` every
/// `duration / steps` seconds and the displayed number is the floor of the running total.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CountUp {
    target: u32,
    duration_secs: f64,
    steps: u32,
    elapsed_secs: f64,
    started: bool,
}

impl CountUp {
    /// Default run time of a counter.
    pub const DURATION_SECS: f64 = 1.5;
    /// Default number of increments.
    pub const STEPS: u32 = 60;

    /// Counter toward `target` with the default timing.
    pub fn new(target: u32) -> Self {
        Self::with_timing(target, Self::DURATION_SECS, Self::STEPS)
    }

    /// Counter with explicit timing. Zero steps or a non-positive duration jump straight to the
    /// target once started.
    pub fn with_timing(target: u32, duration_secs: f64, steps: u32) -> Self {
        Self {
            target,
            duration_secs,
            steps,
            elapsed_secs: 0.0,
            started: false,
        }
    }

    /// Begin counting. Returns `false` if already started.
    pub fn start(&mut self) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        true
    }

    /// Advance the timer by `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        if !self.started || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed_secs += dt;
    }

    fn steps_done(&self) -> u32 {
        if !self.started {
            return 0;
        }
        if self.steps == 0 || !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return self.steps;
        }
        let interval = self.duration_secs / f64::from(self.steps);
        let done = (self.elapsed_secs / interval).floor();
        if done >= f64::from(self.steps) {
            self.steps
        } else {
            done as u32
        }
    }

    /// Number currently displayed.
    pub fn value(&self) -> u32 {
        let done = self.steps_done();
        if done >= self.steps {
            return if self.started { self.target } else { 0 };
        }
        let current = f64::from(self.target) * f64::from(done) / f64::from(self.steps);
        (current.floor() as u32).min(self.target)
    }

    /// `true` once the displayed value reached the target.
    pub fn is_finished(&self) -> bool {
        self.started && self.value() == self.target
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/counter.rs"]
mod tests;
