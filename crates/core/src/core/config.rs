//! Per-instance widget configuration supplied by the embedding context.

use thiserror::Error;

use crate::visual::GlowPolicy;

/// Largest grid a single widget instance will simulate.
pub const MAX_NEURONS: usize = 256;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("neuron grid must contain at least one neuron")]
    EmptyGrid,
    #[error("neuron grid of {count} exceeds the limit of {max}")]
    TooManyNeurons { count: usize, max: usize },
    #[error("grid layout needs at least one column")]
    ZeroColumns,
    #[cfg(feature = "serde")]
    #[error("invalid widget config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WidgetConfig {
    /// Grid length; fixed for the lifetime of a mounted widget.
    pub neuron_count: usize,
    /// Columns in the visual grid. `None` picks a near-square layout.
    pub columns: Option<usize>,
    pub glow: GlowPolicy,
    /// Noise seed. `None` seeds from the wall clock at mount.
    pub seed: Option<u64>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            neuron_count: 12,
            columns: None,
            glow: GlowPolicy::Unbounded,
            seed: None,
        }
    }
}

/// Row/column arrangement of the visual grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridLayout {
    pub columns: usize,
    pub rows: usize,
}

impl WidgetConfig {
    pub fn with_neurons(neuron_count: usize) -> Self {
        Self {
            neuron_count,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    pub fn with_glow(mut self, glow: GlowPolicy) -> Self {
        self.glow = glow;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neuron_count == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.neuron_count > MAX_NEURONS {
            return Err(ConfigError::TooManyNeurons {
                count: self.neuron_count,
                max: MAX_NEURONS,
            });
        }
        if self.columns == Some(0) {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }

    #[cfg(feature = "serde")]
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        if let Err(e) = cfg.validate() {
            tracing::warn!("Rejected widget config: {}", e);
            return Err(e);
        }
        Ok(cfg)
    }

    pub fn layout(&self) -> GridLayout {
        let n = self.neuron_count.max(1);
        let columns = self
            .columns
            .unwrap_or_else(|| (n as f64).sqrt().ceil() as usize)
            .clamp(1, n);
        GridLayout {
            columns,
            rows: n.div_ceil(columns),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_four_by_three_patch() {
        let cfg = WidgetConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.layout(), GridLayout { columns: 4, rows: 3 });
    }

    #[test]
    fn twenty_five_neurons_lay_out_square() {
        let cfg = WidgetConfig::with_neurons(25);
        assert_eq!(cfg.layout(), GridLayout { columns: 5, rows: 5 });
    }

    #[test]
    fn explicit_columns_win() {
        let cfg = WidgetConfig::with_neurons(12).with_columns(6);
        assert_eq!(cfg.layout(), GridLayout { columns: 6, rows: 2 });
    }

    #[test]
    fn rejects_degenerate_grids() {
        assert!(matches!(
            WidgetConfig::with_neurons(0).validate(),
            Err(ConfigError::EmptyGrid)
        ));
        assert!(matches!(
            WidgetConfig::with_neurons(MAX_NEURONS + 1).validate(),
            Err(ConfigError::TooManyNeurons { .. })
        ));
        assert!(matches!(
            WidgetConfig::default().with_columns(0).validate(),
            Err(ConfigError::ZeroColumns)
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn parses_partial_json() {
        let cfg = WidgetConfig::from_json(r#"{"neuron_count": 25, "glow": "saturating"}"#)
            .expect("valid config");
        assert_eq!(cfg.neuron_count, 25);
        assert_eq!(cfg.glow, GlowPolicy::Saturating);
        assert_eq!(cfg.seed, None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_is_validated() {
        assert!(matches!(
            WidgetConfig::from_json(r#"{"neuron_count": 0}"#),
            Err(ConfigError::EmptyGrid)
        ));
        assert!(matches!(
            WidgetConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
    }
}
