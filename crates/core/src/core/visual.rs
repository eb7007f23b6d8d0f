//! Mapping from a neuron's intensity to how it is drawn.
//!
//! Every neuron is mapped on its own; there is no normalization across the
//! grid, so one outlier never dims or brightens its neighbours.

/// Intensity at which a neuron is drawn fully opaque.
pub const FULL_INTENSITY: f32 = 100.0;

/// Divisor turning intensity into a glow radius (display length units).
pub const GLOW_DIVISOR: f32 = 3.0;

/// How the glow radius behaves above [`FULL_INTENSITY`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GlowPolicy {
    /// `v / 3` with no upper bound.
    #[default]
    Unbounded,
    /// Saturates at the same intensity as opacity.
    Saturating,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeuronStyle {
    /// In `[0, 1]`.
    pub opacity: f32,
    pub glow_radius: f32,
}

/// Linear ramp, saturating at 1 for any intensity ≥ 100.
#[inline]
pub fn opacity(v: f32) -> f32 {
    (v / FULL_INTENSITY).clamp(0.0, 1.0)
}

#[inline]
pub fn glow_radius(v: f32, policy: GlowPolicy) -> f32 {
    let v = v.max(0.0);
    match policy {
        GlowPolicy::Unbounded => v / GLOW_DIVISOR,
        GlowPolicy::Saturating => v.min(FULL_INTENSITY) / GLOW_DIVISOR,
    }
}

impl NeuronStyle {
    pub fn for_intensity(v: f32, policy: GlowPolicy) -> Self {
        Self {
            opacity: opacity(v),
            glow_radius: glow_radius(v, policy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_ramps_then_saturates() {
        assert_eq!(opacity(0.0), 0.0);
        assert_eq!(opacity(50.0), 0.5);
        assert_eq!(opacity(100.0), 1.0);
        assert_eq!(opacity(480.0), 1.0);

        let mut prev = 0.0;
        for i in 0..=2000 {
            let v = i as f32 * 0.1;
            let o = opacity(v);
            assert!((0.0..=1.0).contains(&o));
            assert!(o >= prev);
            prev = o;
        }
    }

    #[test]
    fn glow_is_unbounded_by_default() {
        let s = NeuronStyle::for_intensity(300.0, GlowPolicy::default());
        assert_eq!(s.opacity, 1.0);
        assert_eq!(s.glow_radius, 100.0);
        assert_eq!(glow_radius(30.0, GlowPolicy::Unbounded), 10.0);
    }

    #[test]
    fn saturating_glow_caps_with_opacity() {
        assert_eq!(glow_radius(300.0, GlowPolicy::Saturating), 100.0 / 3.0);
        assert_eq!(glow_radius(30.0, GlowPolicy::Saturating), 10.0);
    }
}
