//! Simulation parameters and the control specs that bound them.

/// Metadata for one user-adjustable control.
///
/// The input surface uses this to clamp and snap raw values; the simulator
/// itself accepts any real number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub units: Option<&'static str>,
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub default: f32,
}

pub const GAIN: ParamSpec = ParamSpec {
    key: "gain",
    label: "GAIN (Dopamine)",
    units: Some("x"),
    min: 0.1,
    max: 5.0,
    step: 0.1,
    default: 1.5,
};

pub const THRESHOLD: ParamSpec = ParamSpec {
    key: "threshold",
    label: "THRESHOLD (GABA)",
    units: Some("mV"),
    min: 0.0,
    max: 100.0,
    step: 5.0,
    default: 20.0,
};

/// Number of decimals needed to print a value on this step grid.
pub fn decimals_for_step(step: f32) -> usize {
    if step >= 1.0 {
        0
    } else if step >= 0.1 {
        1
    } else if step >= 0.01 {
        2
    } else if step >= 0.001 {
        3
    } else {
        4
    }
}

impl ParamSpec {
    /// Clamp to `[min, max]` and round to the nearest step.
    ///
    /// Rounding happens in decimal space so that e.g. `2.5` snaps to the same
    /// `f32` as the literal `2.5` and the classifier boundaries stay exact.
    pub fn snap(&self, v: f32) -> f32 {
        if !v.is_finite() {
            return self.default;
        }
        let min = self.min as f64;
        let max = self.max as f64;
        let step = self.step as f64;

        let clamped = (v as f64).clamp(min, max);
        let steps = ((clamped - min) / step).round();
        let scale = 10f64.powi(decimals_for_step(self.step) as i32);
        let snapped = ((min + steps * step) * scale).round() / scale;
        snapped.clamp(min, max) as f32
    }
}

/// The two scalars driving the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationParameters {
    /// Multiplies raw stochastic input.
    pub gain: f32,
    /// Subtracted from the gained input.
    pub threshold: f32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            gain: GAIN.default,
            threshold: THRESHOLD.default,
        }
    }
}

impl SimulationParameters {
    pub fn new(gain: f32, threshold: f32) -> Self {
        Self { gain, threshold }
    }

    /// Membrane potential for one raw input sample, before rectification.
    #[inline]
    pub fn potential(&self, raw: f32) -> f32 {
        raw * self.gain - self.threshold
    }

    /// Rectified firing intensity for one raw input sample.
    #[inline]
    pub fn activation(&self, raw: f32) -> f32 {
        self.potential(raw).max(0.0)
    }
}
