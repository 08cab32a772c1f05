//! Holt-Winters Triple Exponential Smoothing.
//!
//! Smooths a seasonal series and extends it with forecasts, supporting both
//! additive and multiplicative seasonality. State starts at `L_0 = x_0`; the
//! trend and seasonal offsets are estimated from the series itself.
//!
//! # Algorithm (Additive)
//!
//! ```text
//! Level:    L_t = α (x_t - S_p) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:   S_p = γ (x_t - L_t) + (1 - γ) S_p
//! Smoothed: L_t + T_t + S_p
//! Forecast: F_{n-1+h} = L + h T + S_{(n-1+h) mod m}
//! ```
//!
//! # Algorithm (Multiplicative)
//!
//! ```text
//! Level:    L_t = α (x_t / S_p) + (1 - α)(L_{t-1} + T_{t-1})
//! Trend:    T_t = β (L_t - L_{t-1}) + (1 - β) T_{t-1}
//! Season:   S_p = γ (x_t / L_t) + (1 - γ) S_p
//! Smoothed: (L_t + T_t) S_p
//! Forecast: F_{n-1+h} = (L + h T) S_{(n-1+h) mod m}
//! ```
//!
//! where `p = t mod m`. Level, trend and seasonal offsets are frozen once
//! the observations run out; only `h` advances during forecasting.
//!
//! Multiplicative runs divide by the seasonal offset and the level. A zero
//! in either yields infinities or NaN in the output, which are returned
//! as-is.
//!
//! # Parameters
//!
//! - α ∈ [0, 1]: level smoothing
//! - β ∈ [0, 1]: trend smoothing
//! - γ ∈ [0, 1]: seasonal smoothing
//! - m ≥ 2: seasonal period
//!
//! # Reference
//!
//! Winters, P.R. (1960). "Forecasting Sales by Exponentially Weighted
//! Moving Averages", *Management Science* 6(3), pp. 324-342.

use tracing::{debug, warn};

use super::initial::{initial_seasonal_components, initial_trend};
use super::validation::{check_coefficients, check_season_length, validate_params, Lengths};
use crate::accuracy;
use crate::error::Result;

/// Seasonality type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Seasonality {
    /// Additive: seasonal effect is added to the trend.
    #[default]
    Additive,
    /// Multiplicative: seasonal effect multiplies the trend.
    Multiplicative,
}

/// Smoothed series, forecasts and the final model state of one run.
///
/// Deserialization rejects payloads with more observations than values or
/// with no seasonal offsets.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "ForecastParts"))]
pub struct Forecast {
    values: Vec<f64>,
    observed: usize,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
}

impl Forecast {
    /// All values: the smoothed history followed by the forecasts.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Smoothed reconstruction of the input series.
    ///
    /// The first value is the first observation, unchanged.
    pub fn smoothed(&self) -> &[f64] {
        &self.values[..self.observed]
    }

    /// Forecasts beyond the end of the input series.
    pub fn predictions(&self) -> &[f64] {
        &self.values[self.observed..]
    }

    /// Number of forecast steps.
    pub fn horizon(&self) -> usize {
        self.values.len() - self.observed
    }

    /// Level after the last observation.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Trend after the last observation.
    pub fn trend(&self) -> f64 {
        self.trend
    }

    /// Seasonal offsets after the last observation, indexed by position
    /// within the cycle.
    pub fn seasonals(&self) -> &[f64] {
        &self.seasonals
    }

    /// Mean squared error of the smoothed values against `series`.
    ///
    /// Returns `None` if `series` is not the series this forecast was
    /// built from (length mismatch).
    pub fn mse(&self, series: &[f64]) -> Option<f64> {
        accuracy::mse(series, self.smoothed())
    }

    /// Consumes the forecast, returning all values.
    pub fn into_values(self) -> Vec<f64> {
        self.values
    }
}

/// Unchecked wire form of [`Forecast`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ForecastParts {
    values: Vec<f64>,
    observed: usize,
    level: f64,
    trend: f64,
    seasonals: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<ForecastParts> for Forecast {
    type Error = String;

    fn try_from(parts: ForecastParts) -> std::result::Result<Self, Self::Error> {
        if parts.observed > parts.values.len() {
            return Err(format!(
                "observed count {} exceeds {} values",
                parts.observed,
                parts.values.len()
            ));
        }
        if parts.seasonals.is_empty() {
            return Err("seasonal offsets must not be empty".to_string());
        }
        Ok(Self {
            values: parts.values,
            observed: parts.observed,
            level: parts.level,
            trend: parts.trend,
            seasonals: parts.seasonals,
        })
    }
}

/// Holt-Winters Triple Exponential Smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoltWinters {
    alpha: f64,
    beta: f64,
    gamma: f64,
    period: usize,
    seasonality: Seasonality,
}

impl HoltWinters {
    /// Creates a new Holt-Winters smoother.
    ///
    /// # Parameters
    /// - `alpha`: level smoothing constant ∈ [0, 1]
    /// - `beta`: trend smoothing constant ∈ [0, 1]
    /// - `gamma`: seasonal smoothing constant ∈ [0, 1]
    /// - `period`: seasonal period (must be ≥ 2)
    /// - `seasonality`: additive or multiplicative
    ///
    /// Returns an error naming the first invalid parameter, period first.
    pub fn new(
        alpha: f64,
        beta: f64,
        gamma: f64,
        period: usize,
        seasonality: Seasonality,
    ) -> Result<Self> {
        check_season_length(signed(period))?;
        check_coefficients(alpha, beta, gamma)?;
        Ok(Self {
            alpha,
            beta,
            gamma,
            period,
            seasonality,
        })
    }

    /// Returns the same smoother with a different seasonality.
    pub fn with_seasonality(self, seasonality: Seasonality) -> Self {
        Self {
            seasonality,
            ..self
        }
    }

    /// Returns α.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns β.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Returns γ.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns the seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Returns the seasonality type.
    pub fn seasonality(&self) -> Seasonality {
        self.seasonality
    }

    /// Smooths `series` and forecasts `horizon` steps past its end.
    ///
    /// `series` must hold at least one full season and start at the
    /// beginning of a season; two or more seasons give a better initial
    /// trend. Parameters are re-checked on every call, so a smoother
    /// obtained by deserialization is validated here too.
    ///
    /// # Panics
    ///
    /// Panics if the output buffer cannot be allocated.
    pub fn forecast(&self, series: &[f64], horizon: usize) -> Result<Forecast> {
        forecast_series(
            series,
            signed(self.period),
            self.alpha,
            self.beta,
            self.gamma,
            signed(horizon),
            self.seasonality,
        )
    }
}

/// Predicts with additive seasonality.
///
/// Same as [`predict_additive`]; kept under the shorter name for existing
/// callers.
pub fn predict(
    series: &[f64],
    season_length: isize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    prediction_length: isize,
) -> Result<Vec<f64>> {
    predict_additive(series, season_length, alpha, beta, gamma, prediction_length)
}

/// Smooths `series` with additive seasonality and appends
/// `prediction_length` forecasts.
///
/// # Parameters
/// - `series`: historical seasonal data, at least one full season, first
///   value at the start of a season
/// - `season_length`: observations per season, at least 2
/// - `alpha`, `beta`, `gamma`: smoothing coefficients for level, trend and
///   seasonality, each in [0, 1]
/// - `prediction_length`: forecasts to append, 0 to only smooth
///
/// Returns `series.len() + prediction_length` values.
///
/// # Panics
///
/// Panics if the output buffer cannot be allocated, e.g. for a
/// `prediction_length` near `isize::MAX`.
pub fn predict_additive(
    series: &[f64],
    season_length: isize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    prediction_length: isize,
) -> Result<Vec<f64>> {
    forecast_series(
        series,
        season_length,
        alpha,
        beta,
        gamma,
        prediction_length,
        Seasonality::Additive,
    )
    .map(Forecast::into_values)
}

/// Multiplicative counterpart of [`predict_additive`].
pub fn predict_multiplicative(
    series: &[f64],
    season_length: isize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    prediction_length: isize,
) -> Result<Vec<f64>> {
    forecast_series(
        series,
        season_length,
        alpha,
        beta,
        gamma,
        prediction_length,
        Seasonality::Multiplicative,
    )
    .map(Forecast::into_values)
}

fn forecast_series(
    series: &[f64],
    season_length: isize,
    alpha: f64,
    beta: f64,
    gamma: f64,
    prediction_length: isize,
    seasonality: Seasonality,
) -> Result<Forecast> {
    let lengths = validate_params(series, season_length, alpha, beta, gamma, prediction_length)
        .inspect_err(|err| debug!(%err, "rejected holt-winters parameters"))?;
    Ok(run(series, lengths, alpha, beta, gamma, seasonality))
}

/// Recurrence over validated inputs. Never fails.
fn run(
    series: &[f64],
    lengths: Lengths,
    alpha: f64,
    beta: f64,
    gamma: f64,
    seasonality: Seasonality,
) -> Forecast {
    let Lengths { season: m, horizon } = lengths;
    let n = series.len();
    debug!(
        series_len = n,
        season_length = m,
        horizon,
        ?seasonality,
        "running holt-winters"
    );

    let mut level = series[0];
    let mut trend = initial_trend(series, m);
    let mut seasonals = initial_seasonal_components(series, m);

    let mut values = Vec::with_capacity(n.saturating_add(horizon));
    values.push(series[0]);

    for (i, &x) in series.iter().enumerate().skip(1) {
        let p = i % m;
        let prior = level;
        let smoothed = match seasonality {
            Seasonality::Additive => {
                level = alpha * (x - seasonals[p]) + (1.0 - alpha) * (prior + trend);
                trend = beta * (level - prior) + (1.0 - beta) * trend;
                seasonals[p] = gamma * (x - level) + (1.0 - gamma) * seasonals[p];
                level + trend + seasonals[p]
            }
            Seasonality::Multiplicative => {
                level = alpha * (x / seasonals[p]) + (1.0 - alpha) * (prior + trend);
                trend = beta * (level - prior) + (1.0 - beta) * trend;
                seasonals[p] = gamma * (x / level) + (1.0 - gamma) * seasonals[p];
                (level + trend) * seasonals[p]
            }
        };
        values.push(smoothed);
    }

    for i in n..n + horizon {
        let h = (i - n + 1) as f64;
        let f = match seasonality {
            Seasonality::Additive => level + h * trend + seasonals[i % m],
            Seasonality::Multiplicative => (level + h * trend) * seasonals[i % m],
        };
        values.push(f);
    }

    if seasonality == Seasonality::Multiplicative && values.iter().any(|v| !v.is_finite()) {
        warn!(
            level,
            trend, "multiplicative holt-winters produced non-finite values"
        );
    }

    Forecast {
        values,
        observed: n,
        level,
        trend,
        seasonals,
    }
}

/// Saturates at `isize::MAX`.
fn signed(len: usize) -> isize {
    isize::try_from(len).unwrap_or(isize::MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_length_and_head(
            series in proptest::collection::vec(-1e3_f64..1e3, 2..=60),
            period in 2usize..=6,
            horizon in 0usize..=20,
            alpha in 0.0_f64..=1.0,
            beta in 0.0_f64..=1.0,
            gamma in 0.0_f64..=1.0,
        ) {
            prop_assume!(series.len() >= period);
            let out = predict(&series, period as isize, alpha, beta, gamma, horizon as isize).unwrap();
            prop_assert_eq!(out.len(), series.len() + horizon);
            prop_assert_eq!(out[0], series[0]);
        }

        #[test]
        fn additive_outputs_finite(
            series in proptest::collection::vec(-1e3_f64..1e3, 4..=48),
            alpha in 0.0_f64..=1.0,
            beta in 0.0_f64..=1.0,
            gamma in 0.0_f64..=1.0,
            horizon in 0usize..=12,
        ) {
            let out = predict_additive(&series, 4, alpha, beta, gamma, horizon as isize).unwrap();
            prop_assert!(out.iter().all(|v| v.is_finite()));
        }

        #[test]
        fn horizon_does_not_change_smoothing(
            series in proptest::collection::vec(0.5_f64..1e3, 6..=36),
            horizon in 1usize..=12,
        ) {
            let smooth_only = predict_multiplicative(&series, 3, 0.4, 0.2, 0.6, 0).unwrap();
            let with_forecast = predict_multiplicative(&series, 3, 0.4, 0.2, 0.6, horizon as isize).unwrap();
            let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
            prop_assert_eq!(bits(&smooth_only), bits(&with_forecast[..series.len()]));
        }

        #[test]
        fn out_of_range_alpha_rejected(
            alpha in prop_oneof![-1e3_f64..-1e-9, 1.0 + 1e-9..1e3],
        ) {
            let err = predict(&[1.0, 2.0, 3.0], 2, alpha, 0.5, 0.5, 1).unwrap_err();
            prop_assert_eq!(err, crate::error::PredictionError::Alpha { alpha });
        }
    }
}
