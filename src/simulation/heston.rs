//! Heston-style stochastic volatility path simulation.
//!
//! Euler scheme on daily steps. The spot diffuses with the current volatility
//! state `v` as its coefficient, and the state is advanced as
//!
//! ```text
//! v' = sqrt(| v * vov * zv / sqrt(252) + v^2 + k / 252 * (theta^2 - v^2) |)
//! ```
//!
//! which keeps `v` non-negative by construction. This is not the textbook
//! Heston discretization and must not be replaced by one.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::core::error::VtError;
use crate::core::types::{ModelParameters, SimulatedPaths};
use crate::core::Result;
use crate::indicators::TRADING_DAYS_PER_YEAR;

/// Source of risky-asset paths for the Monte Carlo aggregator.
pub trait PathSimulator: Sync {
    /// Simulate `steps` daily steps, drawing from `rng`.
    fn simulate<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Result<SimulatedPaths>;
}

/// Simulate correlated spot and variance paths.
///
/// Consumes exactly two standard normals per step, `z1` then `z2`.
///
/// # Arguments
/// * `s0` - Initial spot (> 0)
/// * `params` - Model parameters
/// * `steps` - Number of daily steps (>= 1)
/// * `rng` - Random stream
///
/// # Returns
/// Paths of length `steps + 1`, day 0 included
pub fn simulate_path<R: Rng + ?Sized>(
    s0: f64,
    params: &ModelParameters,
    steps: usize,
    rng: &mut R,
) -> Result<SimulatedPaths> {
    if !(s0.is_finite() && s0 > 0.0) {
        return Err(VtError::invalid_parameter(format!(
            "initial spot must be > 0, got {}",
            s0
        )));
    }
    if steps == 0 {
        return Err(VtError::invalid_parameter("steps must be at least 1"));
    }
    params.validate()?;

    let sqrt_days = TRADING_DAYS_PER_YEAR.sqrt();
    let k_daily = params.k / TRADING_DAYS_PER_YEAR;
    let theta_sq = params.theta * params.theta;
    let correl_perp = (1.0 - params.correl * params.correl).sqrt();

    let mut spot = Vec::with_capacity(steps + 1);
    let mut variance = Vec::with_capacity(steps + 1);

    let mut s = s0;
    let mut v = params.v0;
    spot.push(s);
    variance.push(v);

    for _ in 0..steps {
        let z1: f64 = StandardNormal.sample(rng);
        let z2: f64 = StandardNormal.sample(rng);
        let zv = params.correl * z1 + correl_perp * z2;

        // Both updates read the pre-step v
        s += s * v * z1 / sqrt_days;
        let v_sq = v * v;
        v = (v * params.vov * zv / sqrt_days + v_sq + k_daily * (theta_sq - v_sq))
            .abs()
            .sqrt();

        spot.push(s);
        variance.push(v);
    }

    Ok(SimulatedPaths { spot, variance })
}

/// Path simulator bound to a spot level and model parameters.
#[derive(Debug, Clone, Copy)]
pub struct HestonPathSimulator {
    s0: f64,
    params: ModelParameters,
}

impl HestonPathSimulator {
    /// Create a simulator; parameters are validated up front.
    pub fn new(s0: f64, params: ModelParameters) -> Result<Self> {
        if !(s0.is_finite() && s0 > 0.0) {
            return Err(VtError::invalid_parameter(format!(
                "initial spot must be > 0, got {}",
                s0
            )));
        }
        params.validate()?;
        Ok(Self { s0, params })
    }

    #[inline]
    pub fn s0(&self) -> f64 {
        self.s0
    }

    #[inline]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }
}

impl PathSimulator for HestonPathSimulator {
    fn simulate<R: Rng + ?Sized>(&self, steps: usize, rng: &mut R) -> Result<SimulatedPaths> {
        simulate_path(self.s0, &self.params, steps, rng)
    }
}
