//! Rolling-window return distributions.
//!
//! For a holding period of N years over a monthly series, every overlapping
//! N-year window contributes one annualized return; the distribution is
//! summarized as min/max/average/median. A series shorter than the window
//! has no distribution at all (`None`), never a defaulted one.

use crate::domain::series::Series;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingReturnStats {
    pub average: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
}

/// Distribution of annualized returns over all overlapping `years`-long
/// windows, assuming monthly spacing (window length = years × 12 points).
pub fn rolling_returns(series: &Series, years: u32) -> Option<RollingReturnStats> {
    let window = years as usize * 12;
    let points = series.points();
    if window == 0 || points.len() < window {
        return None;
    }

    let mut annualized: Vec<f64> = (window..points.len())
        .map(|i| {
            let start = points[i - window].value;
            let end = points[i].value;
            (end / start).powf(1.0 / years as f64) - 1.0
        })
        .collect();

    if annualized.is_empty() {
        return None;
    }

    annualized.sort_by(|a, b| a.total_cmp(b));
    let n = annualized.len();
    let average = annualized.iter().sum::<f64>() / n as f64;
    let mid = n / 2;
    let median = if n % 2 == 0 {
        (annualized[mid - 1] + annualized[mid]) / 2.0
    } else {
        annualized[mid]
    };

    Some(RollingReturnStats {
        average,
        min: annualized[0],
        max: annualized[n - 1],
        median,
    })
}

/// Chart/table label for a window length, e.g. `3` → `"3yr"`.
pub fn window_label(years: u32) -> String {
    format!("{years}yr")
}
