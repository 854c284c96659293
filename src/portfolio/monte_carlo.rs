//! Monte Carlo estimate of the realized volatility of a VT-managed strategy.
//!
//! Each trial simulates a risky path, runs the overlay over it and measures
//! the realized volatility of the resulting equity curve. Trials own their
//! random streams (seeded from the base seed and the trial index), so they run
//! in parallel via Rayon and still reproduce exactly under a fixed seed.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::vol_target::VolTargetOverlay;
use crate::core::error::VtError;
use crate::core::types::{ModelParameters, OverlayConfig};
use crate::core::Result;
use crate::indicators::realized_volatility;
use crate::metrics::confidence::{student_t_interval, ConfidenceInterval};
use crate::simulation::{HestonPathSimulator, PathSimulator};

/// Configuration for Monte Carlo simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    pub n_trials: usize,
    pub horizon_days: usize,
    /// Confidence level of the reported interval.
    pub confidence: f64,
    /// Starting spot of every simulated risky path.
    pub initial_spot: f64,
    /// Base seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_trials: 100,
            horizon_days: 252,
            confidence: 0.95,
            initial_spot: 100.0,
            seed: None,
        }
    }
}

impl MonteCarloConfig {
    /// Validate against the overlay the trials will run.
    pub fn validate(&self, overlay: &OverlayConfig) -> Result<()> {
        if self.n_trials < 2 {
            return Err(VtError::invalid_parameter(format!(
                "n_trials must be at least 2, got {}",
                self.n_trials
            )));
        }
        if !(self.confidence > 0.0 && self.confidence < 1.0) {
            return Err(VtError::invalid_parameter(format!(
                "confidence must be in (0, 1), got {}",
                self.confidence
            )));
        }
        if !(self.initial_spot.is_finite() && self.initial_spot > 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "initial_spot must be > 0, got {}",
                self.initial_spot
            )));
        }
        let path_len = self.horizon_days.checked_add(1).ok_or_else(|| {
            VtError::invalid_parameter(format!(
                "horizon_days too large: {}",
                self.horizon_days
            ))
        })?;
        if path_len < overlay.min_path_len() {
            return Err(VtError::insufficient_data(overlay.min_path_len(), path_len));
        }
        Ok(())
    }
}

/// Result of a Monte Carlo run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonteCarloResult {
    /// Realized volatility of the managed equity curve, one per trial, in trial order.
    pub samples: Vec<f64>,
    pub interval: ConfidenceInterval,
    /// Base seed actually used.
    pub seed: u64,
}

/// One point of a vol-of-vol sweep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub vol_of_vol: f64,
    pub result: MonteCarloResult,
}

impl fmt::Display for SweepPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ci = &self.result.interval;
        writeln!(f, "vol of vol = {}", self.vol_of_vol)?;
        write!(
            f,
            "vol of VT = {} with {}% CI +- {}",
            ci.mean,
            ci.confidence * 100.0,
            ci.half_width
        )
    }
}

/// Seed of trial `trial`, derived from the base seed with a SplitMix64 step.
pub fn trial_seed(base_seed: u64, trial: usize) -> u64 {
    let mut z =
        base_seed.wrapping_add((trial as u64).wrapping_add(1).wrapping_mul(0x9e3779b97f4a7c15));
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}

/// Single trial: simulate, overlay, measure.
///
/// # Arguments
/// * `simulator` - Risky path generator
/// * `overlay` - Volatility-target overlay
/// * `horizon_days` - Number of simulated days
/// * `rng` - Random stream owned by this trial
pub fn run_trial<S, R>(
    simulator: &S,
    overlay: &VolTargetOverlay,
    horizon_days: usize,
    rng: &mut R,
) -> Result<f64>
where
    S: PathSimulator,
    R: Rng + ?Sized,
{
    let paths = simulator.simulate(horizon_days, rng)?;
    let managed = overlay.calculate(&paths.spot)?;
    realized_volatility(&managed.equity_curve)
}

/// Run `config.n_trials` trials with an arbitrary path simulator.
pub fn run_monte_carlo<S: PathSimulator>(
    simulator: &S,
    overlay: &VolTargetOverlay,
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult> {
    config.validate(overlay.config())?;

    let seed = config.seed.unwrap_or_else(rand::random);

    let samples: Vec<f64> = (0..config.n_trials)
        .into_par_iter()
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(trial_seed(seed, trial));
            run_trial(simulator, overlay, config.horizon_days, &mut rng)
        })
        .collect::<Result<Vec<f64>>>()?;

    let interval = student_t_interval(&samples, config.confidence)?;

    debug!(
        seed,
        n_trials = config.n_trials,
        mean = interval.mean,
        half_width = interval.half_width,
        "monte carlo run complete"
    );

    Ok(MonteCarloResult {
        samples,
        interval,
        seed,
    })
}

/// Estimate the realized volatility of the VT strategy under `params`.
///
/// # Arguments
/// * `params` - Stochastic volatility model
/// * `overlay` - Overlay configuration
/// * `config` - Trial count, horizon, confidence and seed
pub fn simulate_vt_volatility(
    params: &ModelParameters,
    overlay: &OverlayConfig,
    config: &MonteCarloConfig,
) -> Result<MonteCarloResult> {
    let simulator = HestonPathSimulator::new(config.initial_spot, *params)?;
    let overlay = VolTargetOverlay::new(*overlay)?;
    debug!(
        initial_spot = simulator.s0(),
        vov = simulator.params().vov,
        lookback = overlay.config().lookback,
        "simulating vt volatility"
    );
    run_monte_carlo(&simulator, &overlay, config)
}

/// Independent aggregation for each vol-of-vol value.
///
/// Point `p` runs from its own seed, `trial_seed(base, p)`, so no two points
/// share random draws. The base seed is drawn once when `config.seed` is `None`.
pub fn sweep_vol_of_vol(
    base: &ModelParameters,
    vols_of_vol: &[f64],
    overlay: &OverlayConfig,
    config: &MonteCarloConfig,
) -> Result<Vec<SweepPoint>> {
    let base_seed = config.seed.unwrap_or_else(rand::random);
    info!(
        base_seed,
        points = vols_of_vol.len(),
        n_trials = config.n_trials,
        "starting vol-of-vol sweep"
    );

    vols_of_vol
        .iter()
        .enumerate()
        .map(|(point, &vov)| {
            let params = base.with_vol_of_vol(vov)?;
            let point_config = MonteCarloConfig {
                seed: Some(trial_seed(base_seed, point)),
                ..*config
            };
            let result = simulate_vt_volatility(&params, overlay, &point_config)?;
            info!(
                vov,
                seed = result.seed,
                mean = result.interval.mean,
                half_width = result.interval.half_width,
                "sweep point done"
            );
            Ok(SweepPoint {
                vol_of_vol: vov,
                result,
            })
        })
        .collect()
}
