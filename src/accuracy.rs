//! In-sample accuracy of a smoothed series.
//!
//! Compares observed values against their smoothed reconstruction. All
//! functions return `None` when the slices are empty or differ in length.
//!
//! # Metrics
//!
//! ```text
//! SSE  = Σ (y_i - ŷ_i)²
//! MSE  = SSE / n
//! RMSE = √MSE
//! MAE  = Σ |y_i - ŷ_i| / n
//! ```

use statrs::statistics::Statistics;

fn residuals<'a>(
    observed: &'a [f64],
    fitted: &'a [f64],
) -> Option<impl Iterator<Item = f64> + 'a> {
    if observed.is_empty() || observed.len() != fitted.len() {
        return None;
    }
    Some(observed.iter().zip(fitted).map(|(y, f)| y - f))
}

/// Sum of squared errors.
pub fn sse(observed: &[f64], fitted: &[f64]) -> Option<f64> {
    residuals(observed, fitted).map(|r| r.map(|e| e * e).sum())
}

/// Mean squared error.
pub fn mse(observed: &[f64], fitted: &[f64]) -> Option<f64> {
    let squared: Vec<f64> = residuals(observed, fitted)?.map(|e| e * e).collect();
    Some(squared.mean())
}

/// Root mean squared error.
pub fn rmse(observed: &[f64], fitted: &[f64]) -> Option<f64> {
    mse(observed, fitted).map(f64::sqrt)
}

/// Mean absolute error.
pub fn mae(observed: &[f64], fitted: &[f64]) -> Option<f64> {
    let abs: Vec<f64> = residuals(observed, fitted)?.map(f64::abs).collect();
    Some(abs.mean())
}
