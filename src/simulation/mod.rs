//! Stochastic path generation for vtsim.

pub mod heston;

pub use heston::{simulate_path, HestonPathSimulator, PathSimulator};
