//! Vol-of-vol sweep of the volatility-target overlay.
//!
//! Prints, for each vol-of-vol value, the Monte Carlo mean realized volatility
//! of the VT strategy and its Student-t confidence half-width.
//!
//! Usage:
//!   cargo run --release --bin vt_sweep -- --vov-count 11 --trials 1000
//!   cargo run --release --bin vt_sweep -- --config experiment.json --seed 7

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vtsim::core::ExperimentConfig;
use vtsim::portfolio::sweep_vol_of_vol;

#[derive(Parser, Debug)]
#[command(name = "vt_sweep")]
#[command(about = "Monte Carlo realized volatility of a VT overlay under stochastic volatility")]
struct Args {
    /// JSON experiment configuration; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial volatility level
    #[arg(long)]
    v0: Option<f64>,

    /// Long-run volatility level
    #[arg(long)]
    theta: Option<f64>,

    /// Spot/variance shock correlation
    #[arg(long, allow_hyphen_values = true)]
    correl: Option<f64>,

    /// Mean-reversion speed
    #[arg(long)]
    k: Option<f64>,

    /// First vol-of-vol value of the sweep
    #[arg(long)]
    vov_start: Option<f64>,

    /// Vol-of-vol increment between sweep points
    #[arg(long)]
    vov_step: Option<f64>,

    /// Number of sweep points
    #[arg(long)]
    vov_count: Option<usize>,

    /// Annualized volatility target
    #[arg(long)]
    vt: Option<f64>,

    /// Overlay lookback window in trading days
    #[arg(long)]
    lookback: Option<usize>,

    /// Initial equity of the managed strategy
    #[arg(long)]
    s0: Option<f64>,

    /// Initial spot of the simulated risky asset
    #[arg(long)]
    initial_spot: Option<f64>,

    /// Monte Carlo trials per sweep point
    #[arg(long)]
    trials: Option<usize>,

    /// Simulation horizon in trading days
    #[arg(long)]
    horizon: Option<usize>,

    /// Confidence level of the interval
    #[arg(long)]
    confidence: Option<f64>,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Emit one JSON object per sweep point instead of the text report
    #[arg(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut ExperimentConfig) {
        let model = &mut config.model;
        if let Some(v) = self.v0 {
            model.v0 = v;
        }
        if let Some(v) = self.theta {
            model.theta = v;
        }
        if let Some(v) = self.correl {
            model.correl = v;
        }
        if let Some(v) = self.k {
            model.k = v;
        }

        let sweep = &mut config.vol_of_vol;
        if let Some(v) = self.vov_start {
            sweep.start = v;
        }
        if let Some(v) = self.vov_step {
            sweep.step = v;
        }
        if let Some(v) = self.vov_count {
            sweep.count = v;
        }

        let overlay = &mut config.overlay;
        if let Some(v) = self.vt {
            overlay.vt = v;
        }
        if let Some(v) = self.lookback {
            overlay.lookback = v;
        }
        if let Some(v) = self.s0 {
            overlay.s0 = v;
        }

        let mc = &mut config.monte_carlo;
        if let Some(v) = self.initial_spot {
            mc.initial_spot = v;
        }
        if let Some(v) = self.trials {
            mc.n_trials = v;
        }
        if let Some(v) = self.horizon {
            mc.horizon_days = v;
        }
        if let Some(v) = self.confidence {
            mc.confidence = v;
        }
        if self.seed.is_some() {
            mc.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    // stdout carries the report only
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_json_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ExperimentConfig::default(),
    };
    args.apply(&mut config);
    config.validate().context("invalid experiment configuration")?;

    info!(?config, "running sweep");

    let points = sweep_vol_of_vol(
        &config.model,
        &config.vol_of_vol.values(),
        &config.overlay,
        &config.monte_carlo,
    )?;

    for point in &points {
        if args.json {
            println!("{}", serde_json::to_string(point)?);
        } else {
            println!("{}", point);
        }
    }

    Ok(())
}
