//! Volatility-target overlay.
//!
//! Scales exposure to a risky asset by `vt / rv`, where `rv` is the realized
//! volatility over the trailing lookback window, rebalancing daily. The
//! remainder of the equity earns nothing.

use crate::core::error::VtError;
use crate::core::types::{ManagedPath, OverlayConfig};
use crate::core::Result;
use crate::indicators::realized_volatility;

/// Daily-rebalanced volatility-target overlay.
#[derive(Debug, Clone, Copy)]
pub struct VolTargetOverlay {
    config: OverlayConfig,
}

impl VolTargetOverlay {
    /// Create an overlay from a validated configuration.
    pub fn new(config: OverlayConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// Run the overlay over a risky price path.
    ///
    /// The first `lookback + 1` prices seed the initial weight. Each later day
    /// moves the equity by the weight set the day before, then the weight is
    /// re-estimated from the `lookback + 1` prices ending on that day.
    ///
    /// # Arguments
    /// * `risky` - Risky asset prices, at least `lookback + 2` of them
    ///
    /// # Returns
    /// Equity curve and weights, each of length `risky.len() - lookback`
    pub fn calculate(&self, risky: &[f64]) -> Result<ManagedPath> {
        let required = self.config.min_path_len();
        if risky.len() < required {
            return Err(VtError::insufficient_data(required, risky.len()));
        }

        let start = self.config.lookback + 1;
        let initial_vol = realized_volatility(&risky[..start])?;
        let mut weight = self.target_weight(initial_vol, "initial lookback window")?;

        let mut risky0 = risky[start - 1];
        let mut equity = self.config.s0;

        let n_out = risky.len() - start + 1;
        let mut equity_curve = Vec::with_capacity(n_out);
        let mut weights = Vec::with_capacity(n_out);
        equity_curve.push(equity);
        weights.push(weight);

        for (i, &risky1) in risky[start..].iter().enumerate() {
            equity *= 1.0 + weight * (risky1 / risky0 - 1.0);
            equity_curve.push(equity);

            let rv = realized_volatility(&risky[i + 1..i + 1 + start])?;
            weight = self.target_weight(rv, "rolling lookback window")?;
            weights.push(weight);

            risky0 = risky1;
        }

        Ok(ManagedPath {
            equity_curve,
            weights,
        })
    }

    fn target_weight(&self, rv: f64, context: &str) -> Result<f64> {
        if rv == 0.0 {
            return Err(VtError::zero_volatility(context));
        }
        Ok(self.config.vt / rv)
    }
}
