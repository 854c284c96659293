// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! vtsim - Monte Carlo study of volatility-targeting overlays.
//!
//! This crate provides:
//! - Heston-style stochastic volatility path simulation
//! - A daily-rebalanced volatility-target (VT) overlay
//! - Realized volatility estimation
//! - Monte Carlo aggregation with Student-t confidence intervals
//! - Optional Python bindings (`python` feature)

pub mod core;
pub mod indicators;
pub mod metrics;
pub mod portfolio;
#[cfg(feature = "python")]
pub mod python;
pub mod simulation;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn _vtsim(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    // Register estimator functions
    m.add_function(wrap_pyfunction!(python::bindings::realized_volatility, m)?)?;
    m.add_function(wrap_pyfunction!(
        python::bindings::rolling_realized_volatility,
        m
    )?)?;

    // Register simulation and overlay functions
    m.add_function(wrap_pyfunction!(python::bindings::simulate_heston_path, m)?)?;
    m.add_function(wrap_pyfunction!(python::bindings::vol_target_overlay, m)?)?;

    // Register Monte Carlo aggregation
    m.add_function(wrap_pyfunction!(python::bindings::simulate_vt_volatility, m)?)?;

    Ok(())
}
