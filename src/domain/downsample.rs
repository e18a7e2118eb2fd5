//! Point-count reduction for charting. No semantic value — the full series
//! is what metrics are computed from; this only feeds chart components.

use crate::domain::series::Series;

/// Keep roughly every `len / max_points`-th point, always ending on the true
/// last point. Series at or under the cap are returned unchanged.
pub fn downsample(series: &Series, max_points: usize) -> Series {
    let points = series.points();
    if max_points == 0 || points.len() <= max_points {
        return series.clone();
    }

    let step = points.len() / max_points;
    let mut sampled: Vec<_> = points.iter().step_by(step.max(1)).copied().collect();
    if let (Some(last_sampled), Some(last)) = (sampled.last(), points.last()) {
        if last_sampled.date != last.date {
            sampled.push(*last);
        }
    }
    Series::from_points(sampled)
}
