//! Core data types for vtsim.

use serde::{Deserialize, Serialize};

use super::error::{Result, VtError};

/// Type alias for price values.
pub type Price = f64;

/// Parameters of the stochastic-volatility process.
///
/// `v0` and `theta` are quoted as annualized volatilities; the variance state
/// is advanced on their squares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Initial volatility level.
    pub v0: f64,
    /// Long-run volatility level.
    pub theta: f64,
    /// Mean-reversion speed (annualized).
    pub k: f64,
    /// Volatility of volatility.
    pub vov: f64,
    /// Correlation between spot and variance shocks.
    pub correl: f64,
}

impl ModelParameters {
    /// Create validated model parameters.
    pub fn new(v0: f64, theta: f64, k: f64, vov: f64, correl: f64) -> Result<Self> {
        let params = Self {
            v0,
            theta,
            k,
            vov,
            correl,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every field against its admissible range.
    pub fn validate(&self) -> Result<()> {
        if !(self.v0.is_finite() && self.v0 > 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "v0 must be > 0, got {}",
                self.v0
            )));
        }
        if !(self.theta.is_finite() && self.theta > 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "theta must be > 0, got {}",
                self.theta
            )));
        }
        // k = 0 switches mean reversion off, which is still a valid process
        if !(self.k.is_finite() && self.k >= 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "k must be >= 0, got {}",
                self.k
            )));
        }
        if !(self.vov.is_finite() && self.vov >= 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "vov must be >= 0, got {}",
                self.vov
            )));
        }
        if !(-1.0..=1.0).contains(&self.correl) {
            return Err(VtError::invalid_parameter(format!(
                "correl must be in [-1, 1], got {}",
                self.correl
            )));
        }
        Ok(())
    }

    /// Copy of these parameters with a different vol-of-vol.
    pub fn with_vol_of_vol(&self, vov: f64) -> Result<Self> {
        Self::new(self.v0, self.theta, self.k, vov, self.correl)
    }
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            v0: 0.15,
            theta: 0.15,
            k: 20.0,
            vov: 0.0,
            correl: -0.8,
        }
    }
}

/// Configuration of the volatility-target overlay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Initial equity level of the managed strategy.
    pub s0: f64,
    /// Annualized volatility target.
    pub vt: f64,
    /// Lookback window in trading days.
    pub lookback: usize,
}

impl OverlayConfig {
    /// Create a validated overlay configuration.
    pub fn new(s0: f64, vt: f64, lookback: usize) -> Result<Self> {
        let config = Self { s0, vt, lookback };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.s0.is_finite() && self.s0 > 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "s0 must be > 0, got {}",
                self.s0
            )));
        }
        if !(self.vt.is_finite() && self.vt > 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "vt must be > 0, got {}",
                self.vt
            )));
        }
        if self.lookback < 1 {
            return Err(VtError::invalid_parameter("lookback must be at least 1"));
        }
        Ok(())
    }

    /// Minimum risky path length the overlay accepts.
    #[inline]
    pub fn min_path_len(&self) -> usize {
        self.lookback + 2
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            s0: 100.0,
            vt: 0.05,
            lookback: 10,
        }
    }
}

/// Spot and variance paths generated together from the same draws.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedPaths {
    /// Spot prices, index = trading day, day 0 included.
    pub spot: Vec<Price>,
    /// Variance state, index-aligned with `spot`.
    pub variance: Vec<f64>,
}

impl SimulatedPaths {
    /// Number of points in each path (steps + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.spot.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spot.is_empty()
    }
}

/// Output of the volatility-target overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagedPath {
    /// Equity curve of the managed strategy, starting at `s0`.
    pub equity_curve: Vec<f64>,
    /// Exposure to the risky asset, parallel to `equity_curve`.
    pub weights: Vec<f64>,
}

impl ManagedPath {
    #[inline]
    pub fn len(&self) -> usize {
        self.equity_curve.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equity_curve.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_parameters_validation() {
        assert!(ModelParameters::new(0.15, 0.15, 20.0, 0.5, -0.8).is_ok());
        assert!(ModelParameters::new(0.15, 0.15, 0.0, 0.0, 0.0).is_ok());

        assert!(ModelParameters::new(0.0, 0.15, 20.0, 0.5, -0.8).is_err());
        assert!(ModelParameters::new(0.15, -0.15, 20.0, 0.5, -0.8).is_err());
        assert!(ModelParameters::new(0.15, 0.15, -1.0, 0.5, -0.8).is_err());
        assert!(ModelParameters::new(0.15, 0.15, 20.0, -0.1, -0.8).is_err());
        assert!(ModelParameters::new(0.15, 0.15, 20.0, 0.5, 1.5).is_err());
        assert!(ModelParameters::new(0.15, 0.15, 20.0, 0.5, f64::NAN).is_err());
    }

    #[test]
    fn test_with_vol_of_vol() {
        let base = ModelParameters::default();
        let swept = base.with_vol_of_vol(0.3).unwrap();
        assert_eq!(swept.vov, 0.3);
        assert_eq!(swept.v0, base.v0);
        assert_eq!(swept.correl, base.correl);
        assert!(base.with_vol_of_vol(-0.3).is_err());
    }

    #[test]
    fn test_overlay_config_validation() {
        assert!(OverlayConfig::new(100.0, 0.3, 10).is_ok());
        assert!(OverlayConfig::new(100.0, 0.0, 10).is_err());
        assert!(OverlayConfig::new(100.0, -0.1, 10).is_err());
        assert!(OverlayConfig::new(100.0, 0.3, 0).is_err());
        assert!(OverlayConfig::new(0.0, 0.3, 10).is_err());
        assert_eq!(OverlayConfig::default().min_path_len(), 12);
    }
}
