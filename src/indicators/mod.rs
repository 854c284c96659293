//! Volatility estimators for vtsim.
//!
//! Implemented as pure functions that take slice inputs. Rolling variants
//! return Vec outputs with NaN values for the warmup period.

pub mod volatility;

pub use volatility::{
    log_returns, realized_volatility, rolling_realized_volatility, TRADING_DAYS_PER_YEAR,
};
