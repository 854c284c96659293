//! Volatility-target overlay and Monte Carlo aggregation for vtsim.

pub mod monte_carlo;
pub mod vol_target;

pub use monte_carlo::{
    run_monte_carlo, run_trial, simulate_vt_volatility, sweep_vol_of_vol, trial_seed,
    MonteCarloConfig, MonteCarloResult, SweepPoint,
};
pub use vol_target::VolTargetOverlay;
