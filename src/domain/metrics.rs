//! Risk/return metrics for a price series.
//!
//! All fields are `Option<f64>`: `None` is the "not computable" sentinel.
//! NaN and infinity never appear in a `Metrics` value — degenerate
//! denominators (zero volatility, zero drawdown, no negative periods)
//! collapse to `None` instead.

use crate::domain::series::Series;

const DAYS_PER_YEAR: f64 = 365.25;
const PERIODS_PER_YEAR: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    pub cagr: Option<f64>,
    pub volatility: Option<f64>,
    pub sharpe_ratio: Option<f64>,
    pub sortino_ratio: Option<f64>,
    pub max_drawdown: Option<f64>,
    pub calmar_ratio: Option<f64>,
}

impl Metrics {
    /// Compute all metrics for a series of (assumed monthly) observations.
    /// Fewer than two points yields the all-`None` value.
    pub fn compute(series: &Series, risk_free_rate: f64) -> Self {
        let points = series.points();
        if points.len() < 2 {
            return Metrics::default();
        }

        let first = points[0];
        let last = points[points.len() - 1];
        let years = (last.date - first.date).num_days() as f64 / DAYS_PER_YEAR;

        let cagr = if years > 0.0 {
            finite((last.value / first.value).powf(1.0 / years) - 1.0)
        } else {
            None
        };

        let returns = period_returns(series);
        let volatility = finite(annualized_volatility(&returns));

        let sharpe_ratio = match (cagr, volatility) {
            (Some(c), Some(v)) if v > 0.0 => finite((c - risk_free_rate) / v),
            _ => None,
        };

        let downside = downside_deviation(&returns);
        let sortino_ratio = match (cagr, downside) {
            (Some(c), Some(d)) if d > 0.0 => finite((c - risk_free_rate) / d),
            _ => None,
        };

        let max_drawdown = finite(compute_max_drawdown(series));
        let calmar_ratio = match (cagr, max_drawdown) {
            (Some(c), Some(dd)) if dd != 0.0 => finite(c / dd.abs()),
            _ => None,
        };

        Metrics {
            cagr,
            volatility,
            sharpe_ratio,
            sortino_ratio,
            max_drawdown,
            calmar_ratio,
        }
    }
}

/// Simple relative return between each consecutive pair of points.
pub fn period_returns(series: &Series) -> Vec<f64> {
    series
        .points()
        .windows(2)
        .map(|w| w[1].value / w[0].value - 1.0)
        .collect()
}

/// Population standard deviation of period returns, annualized by √12.
fn annualized_volatility(returns: &[f64]) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt() * PERIODS_PER_YEAR.sqrt()
}

/// Population-style deviation over only the negative period returns,
/// annualized by √12. `None` when there are no negative periods.
fn downside_deviation(returns: &[f64]) -> Option<f64> {
    let downside: Vec<f64> = returns.iter().copied().filter(|r| *r < 0.0).collect();
    if downside.is_empty() {
        return None;
    }
    let sum_sq = downside.iter().map(|r| r * r).sum::<f64>();
    Some((sum_sq / downside.len() as f64).sqrt() * PERIODS_PER_YEAR.sqrt())
}

/// Most negative drawdown from a running peak, as a non-positive fraction.
fn compute_max_drawdown(series: &Series) -> f64 {
    let mut peak = 0.0_f64;
    let mut max_dd = 0.0_f64;
    for point in series {
        if point.value > peak {
            peak = point.value;
        }
        let drawdown = (point.value - peak) / peak;
        if drawdown < max_dd {
            max_dd = drawdown;
        }
    }
    max_dd
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
