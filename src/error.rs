//! Prediction error types.
//!
//! Every failure is an invalid-parameter rejection detected before any
//! numeric work starts. Each variant carries the offending values so the
//! message can name them.

use thiserror::Error;

/// Result type alias for prediction operations.
pub type Result<T> = std::result::Result<T, PredictionError>;

/// Invalid-parameter errors, one variant per validation check.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Season length below 2.
    #[error("Invalid parameter for prediction; season length must be at least 2, is {season_length}")]
    SeasonLength { season_length: isize },

    /// Negative prediction length.
    #[error("Invalid parameter for prediction; prediction length must be at least 0, cannot be negative, is {prediction_length}")]
    PredictionLength { prediction_length: isize },

    /// Level coefficient outside [0, 1].
    #[error("Invalid parameter for prediction; alpha must be between 0 and 1, is {alpha:.6}")]
    Alpha { alpha: f64 },

    /// Trend coefficient outside [0, 1].
    #[error("Invalid parameter for prediction; beta must be between 0 and 1, is {beta:.6}")]
    Beta { beta: f64 },

    /// Seasonal coefficient outside [0, 1].
    #[error("Invalid parameter for prediction; gamma must be between 0 and 1, is {gamma:.6}")]
    Gamma { gamma: f64 },

    /// Fewer observations than one full season.
    #[error("Invalid parameter for prediction; must have at least 1 season of data to predict, season length: {season_length}, series length: {series_length}")]
    InsufficientData {
        season_length: isize,
        series_length: usize,
    },
}
