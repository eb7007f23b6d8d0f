//! Rule-based status label derived from the simulation parameters.
//!
//! The label is never stored. Call [`classify`] whenever it is displayed so it
//! cannot drift from the parameters it describes.

use crate::params::SimulationParameters;

/// Gain above which a low threshold tips the circuit into hyper-activity.
pub const HYPER_GAIN: f32 = 2.5;
/// Threshold below which a high gain tips the circuit into hyper-activity.
pub const HYPER_THRESHOLD: f32 = 15.0;
/// Gain below which the circuit is considered sedated.
pub const HYPO_GAIN: f32 = 0.8;
/// Threshold above which the circuit is considered sedated.
pub const HYPO_THRESHOLD: f32 = 60.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagnosis {
    /// "MANIA"
    HyperActive,
    /// "SEDATION"
    HypoActive,
    Homeostasis,
}

/// Visual emphasis of a diagnosis in the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Glow,
    Muted,
}

/// First matching rule wins.
pub fn classify(params: &SimulationParameters) -> Diagnosis {
    if params.gain > HYPER_GAIN && params.threshold < HYPER_THRESHOLD {
        Diagnosis::HyperActive
    } else if params.gain < HYPO_GAIN || params.threshold > HYPO_THRESHOLD {
        Diagnosis::HypoActive
    } else {
        Diagnosis::Homeostasis
    }
}

impl Diagnosis {
    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::HyperActive => "HYPER-ACTIVE",
            Diagnosis::HypoActive => "HYPO-ACTIVE",
            Diagnosis::Homeostasis => "HOMEOSTASIS",
        }
    }

    pub fn clinical_name(self) -> Option<&'static str> {
        match self {
            Diagnosis::HyperActive => Some("MANIA"),
            Diagnosis::HypoActive => Some("SEDATION"),
            Diagnosis::Homeostasis => None,
        }
    }

    /// Full status line as shown under the controls.
    pub fn status_line(self) -> String {
        match self.clinical_name() {
            Some(name) => format!("STATUS: {} ({name})", self.label()),
            None => format!("STATUS: {}", self.label()),
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            Diagnosis::Homeostasis => Tone::Accent,
            Diagnosis::HyperActive => Tone::Glow,
            Diagnosis::HypoActive => Tone::Muted,
        }
    }

    pub fn all() -> &'static [Diagnosis] {
        &[
            Diagnosis::HyperActive,
            Diagnosis::HypoActive,
            Diagnosis::Homeostasis,
        ]
    }
}
