//! Integration tests for vtsim volatility estimation and path simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use vtsim::core::types::ModelParameters;
use vtsim::core::VtError;
use vtsim::indicators::volatility::{
    log_returns, realized_volatility, rolling_realized_volatility,
};
use vtsim::simulation::{simulate_path, HestonPathSimulator, PathSimulator};

fn sample_prices() -> Vec<f64> {
    // 50 bars of oscillating prices with a slight uptrend
    let mut prices = vec![100.0];
    for i in 1..50 {
        let change = (i as f64 * 0.2).sin() * 2.0 + 0.5;
        prices.push(prices[i - 1] + change);
    }
    prices
}

#[test]
fn test_flat_series_has_zero_volatility() {
    for len in [2, 3, 11, 253] {
        assert_eq!(realized_volatility(&vec![57.5; len]).unwrap(), 0.0);
    }
}

#[test]
fn test_scale_invariance() {
    let prices = sample_prices();
    let base = realized_volatility(&prices).unwrap();

    for c in [0.01, 3.0, 1e4] {
        let scaled: Vec<f64> = prices.iter().map(|p| p * c).collect();
        let rv = realized_volatility(&scaled).unwrap();
        assert!((rv - base).abs() < 1e-10, "scale {} gave {} vs {}", c, rv, base);
    }
}

#[test]
fn test_matches_log_return_definition() {
    let prices = sample_prices();
    let returns = log_returns(&prices).unwrap();
    let expected =
        (returns.iter().map(|r| r * r).sum::<f64>() / returns.len() as f64 * 252.0).sqrt();
    assert!((realized_volatility(&prices).unwrap() - expected).abs() < 1e-12);
}

#[test]
fn test_constant_log_return() {
    let r = -0.004;
    let prices: Vec<f64> = (0..30).map(|i| 50.0 * (r * i as f64).exp()).collect();
    let expected = r.abs() * 252.0f64.sqrt();

    assert!((realized_volatility(&prices).unwrap() - expected).abs() < 1e-10);

    let rolling = rolling_realized_volatility(&prices, 11).unwrap();
    for value in &rolling[10..] {
        assert!((value - expected).abs() < 1e-10);
    }
}

#[test]
fn test_error_cases() {
    assert_eq!(
        realized_volatility(&[1.0]),
        Err(VtError::insufficient_data(2, 1))
    );
    assert!(matches!(
        realized_volatility(&[1.0, -2.0]),
        Err(VtError::LogDomain { index: 1, .. })
    ));
}

#[test]
fn test_simulated_variance_non_negative() {
    let mut rng = StdRng::seed_from_u64(2024);
    for vov in [0.0, 0.5, 2.0, 5.0] {
        for correl in [-1.0, -0.8, 0.0, 1.0] {
            let params = ModelParameters::new(0.15, 0.15, 20.0, vov, correl).unwrap();
            let paths = simulate_path(100.0, &params, 252, &mut rng).unwrap();
            assert_eq!(paths.spot.len(), paths.variance.len());
            assert!(paths.variance.iter().all(|&v| v >= 0.0));
        }
    }
}

#[test]
fn test_degenerate_model_constant_variance() {
    let params = ModelParameters::new(0.2, 0.15, 0.0, 0.0, -0.8).unwrap();
    let sim = HestonPathSimulator::new(100.0, params).unwrap();
    let paths = sim.simulate(252, &mut StdRng::seed_from_u64(8)).unwrap();

    assert!(paths.variance.iter().all(|&v| (v - 0.2).abs() < 1e-15));

    // Per-step returns have standard deviation v0 / sqrt(252)
    let rets: Vec<f64> = paths.spot.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
    let n = rets.len() as f64;
    let m = rets.iter().sum::<f64>() / n;
    let sd = (rets.iter().map(|r| (r - m).powi(2)).sum::<f64>() / (n - 1.0)).sqrt();
    let per_step = 0.2 / 252.0f64.sqrt();
    assert!((sd / per_step - 1.0).abs() < 0.25);
}
