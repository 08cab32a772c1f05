//! Initial trend and seasonal estimates.
//!
//! # Trend
//!
//! With at least two full seasons the trend is the mean season-over-season
//! difference, each term already scaled by `1/m`:
//!
//! ```text
//! T_0 = (Σ_{i<m} (x_{i+m} - x_i) / m) / m
//! ```
//!
//! With fewer, it falls back to `x_1 - x_0`.
//!
//! # Seasonal offsets
//!
//! For each of the `k = ⌊n/m⌋` complete seasons compute its mean `A_j`; the
//! offset of position `p` is the mean deviation from those season means:
//!
//! ```text
//! S_p = Σ_{j<k} (x_{jm+p} - A_j) / k
//! ```
//!
//! The trailing partial season is ignored.
//!
//! Both estimates sum in index order so results stay reproducible to the
//! last bit. Callers must have validated `m ≥ 2` and `n ≥ m`.

/// Initial trend estimate.
pub(crate) fn initial_trend(series: &[f64], season_length: usize) -> f64 {
    let m = season_length;
    if series.len() < 2 * m {
        return series[1] - series[0];
    }

    let mut sum = 0.0;
    for i in 0..m {
        sum += (series[i + m] - series[i]) / m as f64;
    }
    sum / m as f64
}

/// Initial seasonal offsets, one per position in the cycle.
pub(crate) fn initial_seasonal_components(series: &[f64], season_length: usize) -> Vec<f64> {
    let m = season_length;
    let n_seasons = series.len() / m;

    let season_averages: Vec<f64> = series
        .chunks_exact(m)
        .map(|season| season.iter().fold(0.0, |acc, &x| acc + x) / m as f64)
        .collect();

    (0..m)
        .map(|p| {
            let mut deviation = 0.0;
            for (j, avg) in season_averages.iter().enumerate() {
                deviation += series[m * j + p] - avg;
            }
            deviation / n_seasons as f64
        })
        .collect()
}
