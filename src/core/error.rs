//! Error types for vtsim.

use thiserror::Error;

/// Result type alias for vtsim operations.
pub type Result<T> = std::result::Result<T, VtError>;

/// Error types for the simulator, overlay and aggregator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VtError {
    /// Logarithm of a non-positive (or non-finite) price.
    #[error("Non-positive price {price} at index {index}: log-return undefined")]
    LogDomain { index: usize, price: f64 },

    /// Realized volatility of a window is exactly zero, so the target weight is undefined.
    #[error("Zero realized volatility in {context}")]
    ZeroVolatility { context: String },

    /// Insufficient data for calculation.
    #[error("Insufficient data: need at least {required} elements, got {available}")]
    InsufficientData { required: usize, available: usize },

    /// Invalid parameter value.
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl VtError {
    /// Create a logarithm domain error.
    pub fn log_domain(index: usize, price: f64) -> Self {
        Self::LogDomain { index, price }
    }

    /// Create a zero volatility error.
    pub fn zero_volatility(context: impl Into<String>) -> Self {
        Self::ZeroVolatility {
            context: context.into(),
        }
    }

    /// Create an insufficient data error.
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(feature = "python")]
impl From<VtError> for pyo3::PyErr {
    fn from(err: VtError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = VtError::insufficient_data(12, 5);
        assert_eq!(
            err.to_string(),
            "Insufficient data: need at least 12 elements, got 5"
        );

        let err = VtError::zero_volatility("initial lookback window");
        assert_eq!(
            err.to_string(),
            "Zero realized volatility in initial lookback window"
        );

        let err = VtError::log_domain(3, -1.0);
        assert!(err.to_string().contains("index 3"));
    }
}
