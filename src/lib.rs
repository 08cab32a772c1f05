//! # holtwinters
//!
//! Holt-Winters triple exponential smoothing for seasonal time series.
//!
//! Given a historical series that starts at the beginning of a season, the
//! crate returns the smoothed reconstruction of that series followed by any
//! number of forecasts, under additive or multiplicative seasonality.
//!
//! ## Modules
//!
//! - [`smoothing`] — Validation, initial estimates and the recurrence
//! - [`accuracy`] — In-sample error metrics (SSE, MSE, RMSE, MAE)
//! - [`error`] — Invalid-parameter errors
//!
//! ## Example
//!
//! ```rust
//! let series = [1.0, 2.0, 3.0, 2.0, 1.0, 1.1, 1.9, 3.1, 2.1, 1.1];
//! let values = holtwinters::predict_additive(&series, 5, 0.9, 0.9, 0.9, 5).unwrap();
//! assert_eq!(values.len(), series.len() + 5);
//! assert_eq!(values[0], series[0]);
//!
//! let err = holtwinters::predict(&series, 1, 0.9, 0.9, 0.9, 5).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Invalid parameter for prediction; season length must be at least 2, is 1"
//! );
//! ```
//!
//! ## Design Philosophy
//!
//! - **Pure**: every call owns its state; nothing outlives it
//! - **Reproducible**: sums run in index order, so outputs match to the bit
//! - **Unguarded arithmetic**: multiplicative runs propagate inf/NaN from
//!   zero divisors instead of masking them
//!
//! Runs emit `tracing` events at `debug` level; install a subscriber to
//! see them.

pub mod accuracy;
pub mod error;
pub mod smoothing;

pub use error::{PredictionError, Result};
pub use smoothing::{
    predict, predict_additive, predict_multiplicative, Forecast, HoltWinters, Seasonality,
};
