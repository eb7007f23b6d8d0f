//! Fixed-length population of independent neuron intensities.

use crate::params::SimulationParameters;
use crate::prng::Prng;

/// Upper bound (exclusive) of the raw stochastic input.
pub const RAW_INPUT_MAX: f32 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct NeuronGrid {
    intensities: Box<[f32]>,
}

impl NeuronGrid {
    /// All-zero grid of `len` neurons.
    pub fn new(len: usize) -> Self {
        Self {
            intensities: vec![0.0; len].into_boxed_slice(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.intensities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intensities.is_empty()
    }

    #[inline]
    pub fn intensities(&self) -> &[f32] {
        &self.intensities
    }

    /// Replace every intensity from fresh noise.
    ///
    /// The new values are computed into a scratch buffer first and swapped in
    /// at the end, so a reader never sees a half-updated grid.
    pub fn regenerate(&mut self, params: &SimulationParameters, seed: u64, tick: u64) {
        let next: Box<[f32]> = (0..self.len())
            .map(|i| {
                let raw = Prng::for_neuron(seed, tick, i).gen_range_f32(0.0, RAW_INPUT_MAX);
                params.activation(raw)
            })
            .collect();
        self.intensities = next;
    }

    /// Fraction of neurons with a non-zero intensity.
    pub fn firing_fraction(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let firing = self.intensities.iter().filter(|&&v| v > 0.0).count();
        firing as f32 / self.len() as f32
    }

    pub fn mean_intensity(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        self.intensities.iter().sum::<f32>() / self.len() as f32
    }
}
