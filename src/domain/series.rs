//! Price series value types.
//!
//! A [`Series`] is a strictly date-ordered sequence of positive observations.
//! It is immutable after construction; every transformation (resampling,
//! alignment, simulation) produces a new `Series`.

use chrono::{Datelike, NaiveDate};

/// One observation of an instrument's level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Ordered sequence of [`PricePoint`], strictly increasing by date, no
/// duplicate dates, all values finite and positive.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<PricePoint>,
}

impl Series {
    /// Build a series from arbitrary points: non-finite or non-positive
    /// values are dropped, points are sorted by date, and the last-seen
    /// observation wins on duplicate dates.
    pub fn from_points(points: Vec<PricePoint>) -> Self {
        let mut points: Vec<PricePoint> = points
            .into_iter()
            .filter(|p| p.value.is_finite() && p.value > 0.0)
            .collect();
        points.sort_by_key(|p| p.date);

        let mut deduped: Vec<PricePoint> = Vec::with_capacity(points.len());
        for point in points {
            match deduped.last_mut() {
                Some(last) if last.date == point.date => *last = point,
                _ => deduped.push(point),
            }
        }
        Series { points: deduped }
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    /// Collapse to one observation per calendar month: the latest-dated
    /// point within each (year, month) survives, and its date is normalized
    /// to that month's last calendar day. Idempotent on monthly data.
    pub fn resample_monthly(&self) -> Series {
        let mut monthly: Vec<PricePoint> = Vec::new();
        for point in &self.points {
            let key = (point.date.year(), point.date.month());
            match monthly.last_mut() {
                // Input is date-sorted, so the current month is always last.
                Some(last) if (last.date.year(), last.date.month()) == key => {
                    last.value = point.value;
                }
                _ => monthly.push(PricePoint {
                    date: month_end(point.date),
                    value: point.value,
                }),
            }
        }
        Series { points: monthly }
    }

    /// Whether consecutive points fall in consecutive calendar months.
    /// Annualization in the metrics and rolling modules assumes this.
    pub fn is_monthly(&self) -> bool {
        self.points.windows(2).all(|w| {
            let a = w[0].date.year() * 12 + w[0].date.month0() as i32;
            let b = w[1].date.year() * 12 + w[1].date.month0() as i32;
            b - a == 1
        })
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(date)
}
