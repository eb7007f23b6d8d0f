//! # neurovis
//!
//! The "Neural Activation" widget model: a small population of abstract
//! neurons whose firing intensity is driven by a gain and a threshold.
//!
//! Every tick regenerates the whole grid from fresh noise:
//! `intensity = max(0, r * gain - threshold)` with `r` uniform in `[0, 100)`.
//! A rule-based [`diagnosis`] labels the current parameters.
//!
//! ## Quick Start
//!
//! ```
//! use neurovis::prelude::*;
//!
//! let cfg = WidgetConfig::with_neurons(12).with_seed(42);
//! let mut sim = ActivationSimulator::new(&cfg);
//!
//! sim.set_gain(3.0);
//! sim.set_threshold(10.0);
//! sim.tick();
//!
//! assert_eq!(sim.diagnosis(), Diagnosis::HyperActive);
//! assert!(sim.grid().intensities().iter().all(|&v| v >= 0.0));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialize/deserialize [`config::WidgetConfig`] (JSON)
//! - `runtime`: Tokio tick driver for native hosts
//!
//! ## Modules
//!
//! - [`simulator`]: Parameters + grid + tick
//! - [`diagnosis`]: Status classifier
//! - [`visual`]: Intensity to opacity/glow mapping
//! - [`mount`]: Owned tick-timer handle

#[path = "core/prng.rs"]
pub mod prng;

#[path = "core/params.rs"]
pub mod params;

#[path = "core/diagnosis.rs"]
pub mod diagnosis;

#[path = "core/grid.rs"]
pub mod grid;

#[path = "core/visual.rs"]
pub mod visual;

#[path = "core/config.rs"]
pub mod config;

#[path = "core/simulator.rs"]
pub mod simulator;

#[path = "core/mount.rs"]
pub mod mount;

#[cfg(feature = "runtime")]
#[path = "core/runtime.rs"]
pub mod runtime;

/// Prelude module for convenient imports.
///
/// ```
/// use neurovis::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{ConfigError, GridLayout, WidgetConfig};
    pub use crate::diagnosis::{classify, Diagnosis, Tone};
    pub use crate::grid::NeuronGrid;
    pub use crate::mount::{Mount, TimerHandle, TICK_PERIOD};
    pub use crate::params::{ParamSpec, SimulationParameters, GAIN, THRESHOLD};
    pub use crate::simulator::{ActivationSimulator, NeuronView, Snapshot};
    pub use crate::visual::{GlowPolicy, NeuronStyle};
    #[cfg(feature = "runtime")]
    pub use crate::runtime::{mount_tokio, SharedSimulator, TokioTicker};
}
