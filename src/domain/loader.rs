//! Series loader: delimited text → [`Series`].
//!
//! The engine does no I/O; callers hand in the raw table text (see
//! `ports::data_port`). Individual bad rows are dropped with a debug log —
//! the loader never fails, the worst outcome is an empty series.

use tracing::debug;

use crate::domain::series::{PricePoint, Series};
use chrono::NaiveDate;

/// Fallbacks tried after the primary "29 Apr 2005" layout.
const DATE_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y"];

/// Parse a delimited price table into a monthly-usable series.
///
/// The header row is required. The date column is the first header
/// containing "date" (case-insensitive); the price column is the header
/// equal to "close" (case-insensitive). Rows whose date or price fail to
/// parse, or whose price is non-finite or non-positive, are dropped.
pub fn parse_price_table(text: &str) -> Series {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            debug!(error = %e, "price table has no readable header row");
            return Series::default();
        }
    };

    let date_col = headers
        .iter()
        .position(|h| h.to_lowercase().contains("date"));
    let close_col = headers.iter().position(|h| h.eq_ignore_ascii_case("close"));

    let (date_col, close_col) = match (date_col, close_col) {
        (Some(d), Some(c)) => (d, c),
        _ => {
            debug!("price table missing date or close column");
            return Series::default();
        }
    };

    let mut points = Vec::new();
    for (row, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                debug!(row, error = %e, "dropping malformed record");
                continue;
            }
        };

        let date = record.get(date_col).and_then(parse_date);
        let value = record
            .get(close_col)
            .and_then(|v| v.parse::<f64>().ok())
            .filter(|v| v.is_finite() && *v > 0.0);

        match (date, value) {
            (Some(date), Some(value)) => points.push(PricePoint { date, value }),
            _ => debug!(row, "dropping row with unparseable date or price"),
        }
    }

    Series::from_points(points)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
