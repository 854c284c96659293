//! Sample statistics and Student-t confidence intervals.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::core::error::VtError;
use crate::core::Result;

/// Two-sided confidence interval for a sample mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Sample mean.
    pub mean: f64,
    /// Unbiased sample standard deviation.
    pub std_dev: f64,
    /// Half-width of the interval.
    pub half_width: f64,
    /// `mean - half_width`.
    pub lower: f64,
    /// `mean + half_width`.
    pub upper: f64,
    /// Confidence level, e.g. 0.95.
    pub confidence: f64,
    /// Sample size.
    pub n: usize,
}

impl ConfidenceInterval {
    /// Check whether `value` lies inside the interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> Result<f64> {
    if samples.is_empty() {
        return Err(VtError::insufficient_data(1, 0));
    }
    Ok(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Sample standard deviation with the `n - 1` divisor.
pub fn sample_std_dev(samples: &[f64]) -> Result<f64> {
    if samples.len() < 2 {
        return Err(VtError::insufficient_data(2, samples.len()));
    }
    let m = mean(samples)?;
    let ss: f64 = samples.iter().map(|x| (x - m).powi(2)).sum();
    Ok((ss / (samples.len() - 1) as f64).sqrt())
}

/// Half-width `sd * t((1 + c) / 2, n - 1) / sqrt(n)`.
pub fn t_half_width(std_dev: f64, n: usize, confidence: f64) -> Result<f64> {
    if n < 2 {
        return Err(VtError::insufficient_data(2, n));
    }
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(VtError::invalid_parameter(format!(
            "confidence must be in (0, 1), got {}",
            confidence
        )));
    }
    let dist = StudentsT::new(0.0, 1.0, (n - 1) as f64)
        .map_err(|e| VtError::invalid_parameter(e.to_string()))?;
    let quantile = dist.inverse_cdf((1.0 + confidence) / 2.0);
    Ok(std_dev * quantile / (n as f64).sqrt())
}

/// Student-t confidence interval for the mean of `samples`.
///
/// # Arguments
/// * `samples` - At least two observations
/// * `confidence` - Confidence level in (0, 1)
pub fn student_t_interval(samples: &[f64], confidence: f64) -> Result<ConfidenceInterval> {
    let n = samples.len();
    let m = mean(samples)?;
    let sd = sample_std_dev(samples)?;
    let h = t_half_width(sd, n, confidence)?;

    Ok(ConfidenceInterval {
        mean: m,
        std_dev: sd,
        half_width: h,
        lower: m - h,
        upper: m + h,
        confidence,
        n,
    })
}
