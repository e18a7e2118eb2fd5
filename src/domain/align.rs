//! Series alignment onto a shared timeline.
//!
//! The timeline is the exact union of every input date — no resampling.
//! Each instrument is forward-filled (last observation carried forward);
//! rows where any instrument still has no value are excluded entirely, which
//! is what pins the effective start date of every strategy simulation.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::domain::series::Series;

/// One timeline date with a value per instrument, parallel to
/// [`CombinedTable::instruments`].
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedRow {
    pub date: NaiveDate,
    pub values: Vec<f64>,
}

/// Multi-instrument per-date table consumed by the strategy simulator.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedTable {
    instruments: Vec<String>,
    rows: Vec<CombinedRow>,
}

impl CombinedTable {
    /// Align named series onto their union timeline with forward-fill.
    pub fn align(inputs: &[(&str, &Series)]) -> CombinedTable {
        let timeline: BTreeSet<NaiveDate> = inputs
            .iter()
            .flat_map(|(_, series)| series.iter().map(|p| p.date))
            .collect();

        // One cursor per instrument; advanced monotonically as the
        // timeline does, so alignment is linear in total points.
        let mut cursors = vec![0usize; inputs.len()];
        let mut filled: Vec<Option<f64>> = vec![None; inputs.len()];
        let mut rows = Vec::new();

        for date in timeline {
            for (i, (_, series)) in inputs.iter().enumerate() {
                let points = series.points();
                while cursors[i] < points.len() && points[cursors[i]].date <= date {
                    filled[i] = Some(points[cursors[i]].value);
                    cursors[i] += 1;
                }
            }
            if let Some(values) = filled.iter().copied().collect::<Option<Vec<f64>>>() {
                rows.push(CombinedRow { date, values });
            }
        }

        CombinedTable {
            instruments: inputs.iter().map(|(name, _)| name.to_string()).collect(),
            rows,
        }
    }

    pub fn instruments(&self) -> &[String] {
        &self.instruments
    }

    pub fn rows(&self) -> &[CombinedRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn instrument_index(&self, name: &str) -> Option<usize> {
        self.instruments.iter().position(|n| n == name)
    }
}
