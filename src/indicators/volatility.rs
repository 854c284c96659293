//! Realized volatility from log returns.

use crate::core::error::VtError;
use crate::core::Result;

/// Trading days per year used for annualization.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Log returns `ln(p[i+1] / p[i])` of a price sequence.
///
/// # Arguments
/// * `prices` - Price sequence, at least two strictly positive values
///
/// # Returns
/// Vector of `prices.len() - 1` log returns
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>> {
    validate_prices(prices)?;
    Ok(prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect())
}

/// Annualized realized volatility.
///
/// Uncentred: `sqrt(sum(r_i^2) / L * 252)` over the `L` log returns of
/// `prices`. A flat series gives exactly zero.
///
/// # Arguments
/// * `prices` - Price sequence, at least two strictly positive values
pub fn realized_volatility(prices: &[f64]) -> Result<f64> {
    validate_prices(prices)?;

    let n_returns = (prices.len() - 1) as f64;
    let sum_sq: f64 = prices
        .windows(2)
        .map(|w| {
            let r = (w[1] / w[0]).ln();
            r * r
        })
        .sum();

    Ok((sum_sq / n_returns * TRADING_DAYS_PER_YEAR).sqrt())
}

/// Rolling realized volatility over `window` prices.
///
/// # Arguments
/// * `prices` - Price sequence
/// * `window` - Number of prices per estimate (at least 2)
///
/// # Returns
/// Vector aligned with `prices` (NaN for warmup period)
pub fn rolling_realized_volatility(prices: &[f64], window: usize) -> Result<Vec<f64>> {
    if window < 2 {
        return Err(VtError::invalid_parameter(
            "realized volatility window must hold at least 2 prices",
        ));
    }

    let n = prices.len();
    let mut result = vec![f64::NAN; n];

    if window > n {
        return Ok(result);
    }
    validate_prices(prices)?;

    for i in (window - 1)..n {
        let start = i + 1 - window;
        result[i] = realized_volatility(&prices[start..=i])?;
    }

    Ok(result)
}

fn validate_prices(prices: &[f64]) -> Result<()> {
    if prices.len() < 2 {
        return Err(VtError::insufficient_data(2, prices.len()));
    }
    if let Some((index, &price)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !(p.is_finite() && **p > 0.0))
    {
        return Err(VtError::log_domain(index, price));
    }
    Ok(())
}
