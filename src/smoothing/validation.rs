//! Parameter validation for Holt-Winters runs.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. season length ≥ 2
//! 2. prediction length ≥ 0
//! 3. α ∈ [0, 1]
//! 4. β ∈ [0, 1]
//! 5. γ ∈ [0, 1]
//! 6. series length ≥ season length

use crate::error::{PredictionError, Result};

/// Lengths that passed validation, converted to indexable sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Lengths {
    pub season: usize,
    pub horizon: usize,
}

/// Runs all six checks in order.
pub(crate) fn validate_params(
    series: &[f64],
    season_length: isize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    prediction_length: isize,
) -> Result<Lengths> {
    let season = check_season_length(season_length)?;
    if prediction_length < 0 {
        return Err(PredictionError::PredictionLength { prediction_length });
    }
    check_coefficients(alpha, beta, gamma)?;
    if series.len() < season {
        return Err(PredictionError::InsufficientData {
            season_length,
            series_length: series.len(),
        });
    }

    Ok(Lengths {
        season,
        horizon: prediction_length.unsigned_abs(),
    })
}

pub(crate) fn check_season_length(season_length: isize) -> Result<usize> {
    if season_length < 2 {
        return Err(PredictionError::SeasonLength { season_length });
    }
    Ok(season_length.unsigned_abs())
}

/// Checks α, β and γ in that order. NaN is rejected.
pub(crate) fn check_coefficients(alpha: f64, beta: f64, gamma: f64) -> Result<()> {
    if !in_unit_interval(alpha) {
        return Err(PredictionError::Alpha { alpha });
    }
    if !in_unit_interval(beta) {
        return Err(PredictionError::Beta { beta });
    }
    if !in_unit_interval(gamma) {
        return Err(PredictionError::Gamma { gamma });
    }
    Ok(())
}

fn in_unit_interval(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SERIES: [f64; 5] = [1.0, 2.0, 3.0, 2.0, 1.0];

    #[test]
    fn test_valid_params() {
        let lengths = validate_params(&SERIES, 5, 0.9, 0.9, 0.9, 3).unwrap();
        assert_eq!(
            lengths,
            Lengths {
                season: 5,
                horizon: 3
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(validate_params(&SERIES, 5, 0.0, 1.0, 0.0, 0).is_ok());
        assert!(validate_params(&SERIES, 5, 1.0, 0.0, 1.0, 0).is_ok());
        assert!(validate_params(&SERIES, 2, 0.5, 0.5, 0.5, 0).is_ok());
    }

    #[test]
    fn test_season_length_checked_first() {
        // Every other parameter is also invalid.
        let err = validate_params(&[1.0], 1, 7.0, -7.0, 7.0, -1).unwrap_err();
        assert_eq!(err, PredictionError::SeasonLength { season_length: 1 });

        let err = validate_params(&SERIES, -4, 0.5, 0.5, 0.5, 0).unwrap_err();
        assert_eq!(err, PredictionError::SeasonLength { season_length: -4 });
    }

    #[test]
    fn test_prediction_length_before_coefficients() {
        let err = validate_params(&SERIES, 5, 1.5, 0.9, 0.9, -3).unwrap_err();
        assert_eq!(
            err,
            PredictionError::PredictionLength {
                prediction_length: -3
            }
        );
    }

    #[test]
    fn test_coefficient_order() {
        let err = validate_params(&SERIES, 5, 1.5, 2.3, 30.0, 3).unwrap_err();
        assert_eq!(err, PredictionError::Alpha { alpha: 1.5 });

        let err = validate_params(&SERIES, 5, 0.9, 2.3, 30.0, 3).unwrap_err();
        assert_eq!(err, PredictionError::Beta { beta: 2.3 });

        let err = validate_params(&SERIES, 5, 0.9, 0.9, -20.0, 3).unwrap_err();
        assert_eq!(err, PredictionError::Gamma { gamma: -20.0 });
    }

    #[test]
    fn test_series_length_checked_last() {
        let err = validate_params(&[1.0, 2.0, 3.0], 5, 0.9, 0.9, 0.9, 5).unwrap_err();
        assert_eq!(
            err,
            PredictionError::InsufficientData {
                season_length: 5,
                series_length: 3
            }
        );

        // Short series with a bad coefficient reports the coefficient.
        let err = validate_params(&[1.0, 2.0, 3.0], 5, 0.9, 1.1, 0.9, 5).unwrap_err();
        assert_eq!(err, PredictionError::Beta { beta: 1.1 });
    }

    #[test]
    fn test_nan_coefficient_rejected() {
        let err = validate_params(&SERIES, 5, f64::NAN, 0.5, 0.5, 0).unwrap_err();
        assert!(matches!(err, PredictionError::Alpha { alpha } if alpha.is_nan()));
        assert_eq!(
            err.to_string(),
            "Invalid parameter for prediction; alpha must be between 0 and 1, is NaN"
        );
    }

    #[test]
    fn test_empty_series() {
        let err = validate_params(&[], 2, 0.5, 0.5, 0.5, 0).unwrap_err();
        assert_eq!(
            err,
            PredictionError::InsufficientData {
                season_length: 2,
                series_length: 0
            }
        );
    }
}
