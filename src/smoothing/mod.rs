//! Holt-Winters smoothing and forecasting.
//!
//! A run is three pure stages over one input series:
//!
//! 1. parameter validation, first failure wins
//! 2. initial trend and seasonal offsets estimated from the series
//! 3. the level/trend/seasonal recurrence, emitting one value per step
//!
//! # Methods
//!
//! - [`predict_additive`] / [`predict`] — additive seasonality
//! - [`predict_multiplicative`] — multiplicative seasonality
//! - [`HoltWinters`] — the same pipeline as a reusable, validated
//!   configuration returning a [`Forecast`]
//!
//! # References
//!
//! - Holt, C.C. (1957). "Forecasting Seasonals and Trends by
//!   Exponentially Weighted Moving Averages", ONR Memo 52.
//! - Winters, P.R. (1960). "Forecasting Sales by Exponentially Weighted
//!   Moving Averages", *Management Science* 6(3), pp. 324-342.

mod holt_winters;
mod initial;
mod validation;

pub use holt_winters::{
    predict, predict_additive, predict_multiplicative, Forecast, HoltWinters, Seasonality,
};
