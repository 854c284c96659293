//! Experiment configuration for the vol-of-vol sweep.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{Result, VtError};
use super::types::{ModelParameters, OverlayConfig};
use crate::portfolio::monte_carlo::MonteCarloConfig;

/// Evenly spaced vol-of-vol grid: `start + i * step` for `i in 0..count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolOfVolSweep {
    pub start: f64,
    pub step: f64,
    pub count: usize,
}

impl VolOfVolSweep {
    /// Materialize the grid.
    pub fn values(&self) -> Vec<f64> {
        (0..self.count)
            .map(|i| self.start + self.step * i as f64)
            .collect()
    }
}

impl Default for VolOfVolSweep {
    fn default() -> Self {
        Self {
            start: 0.0,
            step: 0.05,
            count: 1,
        }
    }
}

/// Full description of one sweep run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperimentConfig {
    /// Base model; its `vov` is replaced by each sweep value.
    pub model: ModelParameters,
    pub vol_of_vol: VolOfVolSweep,
    pub overlay: OverlayConfig,
    pub monte_carlo: MonteCarloConfig,
}

impl ExperimentConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| {
            VtError::invalid_config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&raw)
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| VtError::invalid_config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section, including each swept model.
    pub fn validate(&self) -> Result<()> {
        self.overlay.validate()?;
        self.monte_carlo.validate(&self.overlay)?;
        if self.vol_of_vol.count == 0 {
            return Err(VtError::invalid_config("vol_of_vol.count must be > 0"));
        }
        for vov in self.vol_of_vol.values() {
            self.model.with_vol_of_vol(vov)?;
        }
        Ok(())
    }
}
