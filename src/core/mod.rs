//! Core types and utilities for vtsim.

pub mod config;
pub mod error;
pub mod types;

pub use config::{ExperimentConfig, VolOfVolSweep};
pub use error::{Result, VtError};
pub use types::*;
