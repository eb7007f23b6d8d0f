//! The activation simulator: parameters, grid, and the tick that links them.

use crate::config::{GridLayout, WidgetConfig};
use crate::diagnosis::{classify, Diagnosis};
use crate::grid::NeuronGrid;
use crate::params::SimulationParameters;
use crate::prng::clock_seed;
use crate::visual::{GlowPolicy, NeuronStyle};

/// Fixed simulation cadence in milliseconds.
pub const TICK_PERIOD_MS: u64 = 200;

#[derive(Clone, Debug)]
pub struct ActivationSimulator {
    params: SimulationParameters,
    grid: NeuronGrid,
    layout: GridLayout,
    glow: GlowPolicy,
    seed: u64,
    ticks: u64,
}

/// One neuron as handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NeuronView {
    pub index: usize,
    pub intensity: f32,
    pub style: NeuronStyle,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub params: SimulationParameters,
    pub diagnosis: Diagnosis,
    pub layout: GridLayout,
    pub neurons: Vec<NeuronView>,
    pub tick: u64,
}

impl ActivationSimulator {
    /// Default parameters and an all-zero grid.
    ///
    /// The config is trusted here; callers that accept external config should
    /// run [`WidgetConfig::validate`] first.
    pub fn new(cfg: &WidgetConfig) -> Self {
        Self {
            params: SimulationParameters::default(),
            grid: NeuronGrid::new(cfg.neuron_count),
            layout: cfg.layout(),
            glow: cfg.glow,
            seed: cfg.seed.unwrap_or_else(clock_seed),
            ticks: 0,
        }
    }

    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    pub fn grid(&self) -> &NeuronGrid {
        &self.grid
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    /// Number of ticks applied since creation.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Takes effect on the next tick; the grid is left untouched.
    pub fn set_gain(&mut self, gain: f32) {
        self.params.gain = gain;
    }

    /// Takes effect on the next tick; the grid is left untouched.
    pub fn set_threshold(&mut self, threshold: f32) {
        self.params.threshold = threshold;
    }

    /// Regenerate the whole grid from fresh noise and the current parameters.
    pub fn tick(&mut self) {
        self.grid.regenerate(&self.params, self.seed, self.ticks);
        self.ticks = self.ticks.wrapping_add(1);
        tracing::trace!(
            tick = self.ticks,
            mean = self.grid.mean_intensity(),
            "neuron grid regenerated"
        );
    }

    /// Recomputed on every call.
    pub fn diagnosis(&self) -> Diagnosis {
        classify(&self.params)
    }

    pub fn snapshot(&self) -> Snapshot {
        let neurons = self
            .grid
            .intensities()
            .iter()
            .enumerate()
            .map(|(index, &intensity)| NeuronView {
                index,
                intensity,
                style: NeuronStyle::for_intensity(intensity, self.glow),
            })
            .collect();
        Snapshot {
            params: self.params,
            diagnosis: self.diagnosis(),
            layout: self.layout,
            neurons,
            tick: self.ticks,
        }
    }
}
