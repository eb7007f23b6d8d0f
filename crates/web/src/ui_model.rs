//! UI models and metadata that should be available on both wasm and native.
//!
//! Keeping these out of the wasm-only `web` module allows us to unit-test the
//! carousel and the widget's text/style output on the host.

use neurovis::prelude::{ActivationSimulator, Diagnosis, NeuronStyle, ParamSpec, Tone};

use crate::float_fmt::fmt_f32_fixed;

/// Id of the project whose card hosts the live neural widget.
pub const NEURAL_PROJECT_ID: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    InProgress,
    Live,
    Maintenance,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Live => "Live",
            ProjectStatus::Maintenance => "Maintenance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub status: ProjectStatus,
    pub link: &'static str,
}

impl Project {
    pub fn has_live_demo(&self) -> bool {
        self.status == ProjectStatus::Live
    }

    pub fn visual(&self) -> CardVisual {
        if self.id == NEURAL_PROJECT_ID {
            CardVisual::NeuralWidget
        } else {
            CardVisual::Placeholder {
                icon: if self.id == 2 { "🐸" } else { "📚" },
                caption: format!("{} Preview", self.title),
            }
        }
    }
}

/// What the left half of a card shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardVisual {
    NeuralWidget,
    Placeholder { icon: &'static str, caption: String },
}

const PROJECTS: &[Project] = &[
    Project {
        id: 1,
        title: "Neural Activation Visualizer",
        category: "Computational Neuroscience",
        description: "A real-time simulation of neural network activation patterns. This project models how neurological abnormalities (like those in Schizophrenia) can be represented mathematically.",
        tech: &["Rust", "Leptos", "WebAssembly"],
        status: ProjectStatus::InProgress,
        link: "https://github.com/st3phable/neural-viz",
    },
    Project {
        id: 2,
        title: "Lifemaxxing Dashboard",
        category: "UI/UX & Gamification",
        description: "Turning daily habits into an RPG. This dashboard uses the Notion API to track 'XP' for tasks, featuring a cozy, nature-inspired interface.",
        tech: &["Next.js", "Notion API", "Tailwind"],
        status: ProjectStatus::Live,
        link: "#",
    },
    Project {
        id: 3,
        title: "Academics Vault",
        category: "Knowledge Management",
        description: "A 'Second Brain' system built to manage the dual workload of a Psychology and Computer Science degree.",
        tech: &["Obsidian", "Markdown", "Automation"],
        status: ProjectStatus::Maintenance,
        link: "#",
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Cyclic index over a fixed-length list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self {
            index: if self.index == 0 {
                self.len - 1
            } else {
                self.index - 1
            },
            ..self
        }
    }
}

pub const WIDGET_TITLE: &str = "Neural Activation";
pub const WIDGET_SUBTITLE: &str = "in silico visualization";

/// What the control panel shows. Read from the simulator on demand so the
/// sliders and the status line never keep their own copy of the parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelState {
    pub gain: f32,
    pub threshold: f32,
    pub diagnosis: Diagnosis,
}

impl PanelState {
    pub fn of(sim: &ActivationSimulator) -> Self {
        let params = sim.params();
        Self {
            gain: params.gain,
            threshold: params.threshold,
            diagnosis: sim.diagnosis(),
        }
    }
}

/// Readout next to the gain slider, e.g. `1.5x`.
pub fn gain_readout(gain: f32) -> String {
    format!("{}x", fmt_f32_fixed(gain, 1))
}

/// Readout next to the threshold slider, e.g. `-20mV`.
pub fn threshold_readout(threshold: f32) -> String {
    format!("-{}mV", fmt_f32_fixed(threshold, 0))
}

/// Parse a range-input value and snap it onto the control's grid.
pub fn parse_control(spec: &ParamSpec, raw: &str) -> Option<f32> {
    raw.trim().parse::<f32>().ok().map(|v| spec.snap(v))
}

/// Inline style for one neuron dot. Sizes are relative to the cell so the
/// grid scales with whatever container the host gives it.
pub fn neuron_css(style: &NeuronStyle) -> String {
    format!(
        "opacity: {}; box-shadow: 0 0 {}px rgba(255, 255, 255, 0.8);",
        fmt_f32_fixed(style.opacity, 3),
        fmt_f32_fixed(style.glow_radius, 1)
    )
}

pub fn grid_css(columns: usize) -> String {
    format!(
        "display: grid; grid-template-columns: repeat({}, minmax(0, 1fr)); gap: 1rem; width: 100%; max-width: 20rem; margin: 0 auto; align-content: center; flex-grow: 1;",
        columns.max(1)
    )
}

pub fn status_css(diagnosis: Diagnosis) -> &'static str {
    match diagnosis.tone() {
        Tone::Accent => "color: #a477e1;",
        Tone::Glow => "color: #ffffff; text-shadow: 0 0 5px rgba(255, 255, 255, 0.8);",
        Tone::Muted => "color: #6b7280;",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neurovis::prelude::{WidgetConfig, GAIN, THRESHOLD};

    #[test]
    fn project_inventory_is_stable() {
        let all = projects();
        assert_eq!(all.len(), 3);

        let mut ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 3);

        let hosts: Vec<&Project> = all
            .iter()
            .filter(|p| p.visual() == CardVisual::NeuralWidget)
            .collect();
        assert_eq!(hosts.len(), 1);
        assert_eq!(hosts[0].id, NEURAL_PROJECT_ID);
    }

    #[test]
    fn placeholders_name_their_project() {
        let all = projects();
        assert_eq!(
            all[1].visual(),
            CardVisual::Placeholder {
                icon: "🐸",
                caption: "Lifemaxxing Dashboard Preview".to_string()
            }
        );
        assert!(matches!(
            all[2].visual(),
            CardVisual::Placeholder { icon: "📚", .. }
        ));
    }

    #[test]
    fn only_live_projects_offer_a_demo() {
        let live: Vec<u32> = projects()
            .iter()
            .filter(|p| p.has_live_demo())
            .map(|p| p.id)
            .collect();
        assert_eq!(live, vec![2]);
    }

    #[test]
    fn carousel_wraps_both_ways() {
        let c = Carousel::new(3);
        assert_eq!(c.index(), 0);
        assert_eq!(c.prev().index(), 2);
        assert_eq!(c.next().next().index(), 2);
        assert_eq!(c.next().next().next().index(), 0);
        assert_eq!(c.prev().next().index(), 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        let c = Carousel::new(0);
        assert_eq!(c.next().index(), 0);
        assert_eq!(c.prev().index(), 0);
    }

    #[test]
    fn readouts_match_control_units() {
        assert_eq!(gain_readout(1.5), "1.5x");
        assert_eq!(gain_readout(0.1), "0.1x");
        assert_eq!(threshold_readout(20.0), "-20mV");
        assert_eq!(threshold_readout(0.0), "-0mV");
    }

    #[test]
    fn controls_snap_raw_input() {
        assert_eq!(parse_control(&GAIN, "2.46"), Some(2.5));
        assert_eq!(parse_control(&GAIN, "99"), Some(5.0));
        assert_eq!(parse_control(&THRESHOLD, " 12 "), Some(10.0));
        assert_eq!(parse_control(&THRESHOLD, "abc"), None);
    }

    #[test]
    fn neuron_css_carries_opacity_and_glow() {
        let css = neuron_css(&NeuronStyle {
            opacity: 0.5,
            glow_radius: 16.666_666,
        });
        assert_eq!(
            css,
            "opacity: 0.500; box-shadow: 0 0 16.7px rgba(255, 255, 255, 0.8);"
        );
    }

    #[test]
    fn panel_reads_parameters_from_the_simulator() {
        let mut sim = ActivationSimulator::new(&WidgetConfig::default().with_seed(7));
        let panel = PanelState::of(&sim);
        assert_eq!(panel.gain, GAIN.default);
        assert_eq!(panel.threshold, THRESHOLD.default);
        assert_eq!(panel.diagnosis, Diagnosis::Homeostasis);

        sim.set_gain(3.0);
        sim.set_threshold(10.0);
        let panel = PanelState::of(&sim);
        assert_eq!((panel.gain, panel.threshold), (3.0, 10.0));
        assert_eq!(panel.diagnosis, Diagnosis::HyperActive);
        assert_eq!(
            panel.diagnosis.status_line(),
            "STATUS: HYPER-ACTIVE (MANIA)"
        );

        sim.set_threshold(70.0);
        assert_eq!(PanelState::of(&sim).diagnosis, Diagnosis::HypoActive);
    }

    #[test]
    fn every_diagnosis_has_a_status_style() {
        for d in Diagnosis::all() {
            assert!(status_css(*d).starts_with("color:"));
        }
    }
}
