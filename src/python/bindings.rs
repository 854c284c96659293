//! PyO3 function bindings for vtsim.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::types::{ModelParameters, OverlayConfig};
use crate::indicators;
use crate::portfolio::monte_carlo::{self, MonteCarloConfig, MonteCarloResult};
use crate::portfolio::VolTargetOverlay;
use crate::simulation;

use super::numpy_bridge::*;

// ============================================================================
// Result Classes
// ============================================================================

/// Python-exposed Monte Carlo result.
#[pyclass]
#[derive(Debug, Clone)]
pub struct PyMonteCarloResult {
    #[pyo3(get)]
    pub mean: f64,
    #[pyo3(get)]
    pub std_dev: f64,
    #[pyo3(get)]
    pub half_width: f64,
    #[pyo3(get)]
    pub lower: f64,
    #[pyo3(get)]
    pub upper: f64,
    #[pyo3(get)]
    pub confidence: f64,
    #[pyo3(get)]
    pub seed: u64,
    samples: Vec<f64>,
}

#[pymethods]
impl PyMonteCarloResult {
    /// Get per-trial realized volatilities as numpy array.
    fn samples<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        vec_to_numpy_f64(py, self.samples.clone())
    }

    fn __repr__(&self) -> String {
        format!(
            "MonteCarloResult(mean={:.6}, ci={:.0}% +- {:.6}, n={})",
            self.mean,
            self.confidence * 100.0,
            self.half_width,
            self.samples.len()
        )
    }
}

impl From<MonteCarloResult> for PyMonteCarloResult {
    fn from(result: MonteCarloResult) -> Self {
        let ci = result.interval;
        Self {
            mean: ci.mean,
            std_dev: ci.std_dev,
            half_width: ci.half_width,
            lower: ci.lower,
            upper: ci.upper,
            confidence: ci.confidence,
            seed: result.seed,
            samples: result.samples,
        }
    }
}

// ============================================================================
// Estimator Functions
// ============================================================================

/// Annualized realized volatility of a price series.
#[pyfunction]
pub fn realized_volatility(prices: PyReadonlyArray1<f64>) -> PyResult<f64> {
    let vec = numpy_to_vec_f64(prices);
    Ok(indicators::realized_volatility(&vec)?)
}

/// Rolling realized volatility (NaN during warmup).
#[pyfunction]
pub fn rolling_realized_volatility<'py>(
    py: Python<'py>,
    prices: PyReadonlyArray1<f64>,
    window: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let vec = numpy_to_vec_f64(prices);
    let result = indicators::rolling_realized_volatility(&vec, window)?;
    Ok(vec_to_numpy_f64(py, result))
}

// ============================================================================
// Simulation Functions
// ============================================================================

/// Simulate one spot/variance path pair.
#[pyfunction]
#[pyo3(signature = (s0=100.0, v0=0.15, theta=0.15, correl=-0.8, k=20.0, vov=0.0, steps=252, seed=None))]
#[allow(clippy::too_many_arguments)]
pub fn simulate_heston_path<'py>(
    py: Python<'py>,
    s0: f64,
    v0: f64,
    theta: f64,
    correl: f64,
    k: f64,
    vov: f64,
    steps: usize,
    seed: Option<u64>,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let params = ModelParameters::new(v0, theta, k, vov, correl)?;
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let paths = simulation::simulate_path(s0, &params, steps, &mut rng)?;
    Ok((
        vec_to_numpy_f64(py, paths.spot),
        vec_to_numpy_f64(py, paths.variance),
    ))
}

/// Apply the volatility-target overlay to a price path.
///
/// Returns `(equity_curve, weights)`.
#[pyfunction]
#[pyo3(signature = (prices, s0=100.0, vt=0.05, lookback=10))]
pub fn vol_target_overlay<'py>(
    py: Python<'py>,
    prices: PyReadonlyArray1<f64>,
    s0: f64,
    vt: f64,
    lookback: usize,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let vec = numpy_to_vec_f64(prices);
    let overlay = VolTargetOverlay::new(OverlayConfig::new(s0, vt, lookback)?)?;
    let managed = overlay.calculate(&vec)?;
    Ok((
        vec_to_numpy_f64(py, managed.equity_curve),
        vec_to_numpy_f64(py, managed.weights),
    ))
}

// ============================================================================
// Monte Carlo
// ============================================================================

/// Monte Carlo estimate of the VT strategy's realized volatility.
#[pyfunction]
#[pyo3(signature = (v0=0.15, theta=0.15, correl=-0.8, k=20.0, vov=0.0, s0=100.0, vt=0.05, lookback=10, n_trials=100, horizon_days=252, confidence=0.95, initial_spot=100.0, seed=None))]
#[allow(clippy::too_many_arguments)]
pub fn simulate_vt_volatility(
    py: Python<'_>,
    v0: f64,
    theta: f64,
    correl: f64,
    k: f64,
    vov: f64,
    s0: f64,
    vt: f64,
    lookback: usize,
    n_trials: usize,
    horizon_days: usize,
    confidence: f64,
    initial_spot: f64,
    seed: Option<u64>,
) -> PyResult<PyMonteCarloResult> {
    let params = ModelParameters::new(v0, theta, k, vov, correl)?;
    let overlay = OverlayConfig::new(s0, vt, lookback)?;
    let config = MonteCarloConfig {
        n_trials,
        horizon_days,
        confidence,
        initial_spot,
        seed,
    };

    // Trials run on the Rayon pool; release the GIL meanwhile
    let result =
        py.allow_threads(|| monte_carlo::simulate_vt_volatility(&params, &overlay, &config))?;
    Ok(result.into())
}
