//! Strategy simulator: compounds a blended monthly return into a
//! growth-of-100 series.
//!
//! The blend is a pure linear combination of component returns using the
//! strategy's raw weights. The output series is a valid [`Series`] starting
//! at 100 and flows through the metrics and rolling modules exactly like a
//! loaded one.

use crate::domain::align::CombinedTable;
use crate::domain::error::FoliobenchError;
use crate::domain::series::{PricePoint, Series};
use crate::domain::strategy::{ComponentSource, StrategyDefinition};

const STARTING_VALUE: f64 = 100.0;
const MONTHS_PER_YEAR: f64 = 12.0;

/// Simulate a fixed-weight strategy over the combined table.
///
/// Deterministic: identical inputs produce a bit-identical series. An empty
/// table produces an empty series, which downstream consumers report as
/// "unavailable" rather than an error.
pub fn simulate(
    table: &CombinedTable,
    definition: &StrategyDefinition,
) -> Result<Series, FoliobenchError> {
    definition.validate(table)?;

    let rows = table.rows();
    let Some(first) = rows.first() else {
        return Ok(Series::default());
    };

    // Column index per component: Some(i) for direct sources, None for
    // synthetic ones (resolved against siblings below).
    let columns: Vec<Option<usize>> = definition
        .components
        .iter()
        .map(|c| match &c.source {
            ComponentSource::Direct { instrument } => table.instrument_index(instrument),
            _ => None,
        })
        .collect();

    let mut points = Vec::with_capacity(rows.len());
    let mut value = STARTING_VALUE;
    points.push(PricePoint {
        date: first.date,
        value,
    });

    for pair in rows.windows(2) {
        let (prev, curr) = (&pair[0], &pair[1]);

        let direct_return = |component: &str| -> f64 {
            definition
                .components
                .iter()
                .zip(&columns)
                .find(|(c, _)| c.name == component)
                .and_then(|(_, col)| *col)
                .map(|i| curr.values[i] / prev.values[i] - 1.0)
                .unwrap_or(0.0)
        };

        let mut monthly_return = 0.0;
        for (component, column) in definition.components.iter().zip(&columns) {
            let component_return = match &component.source {
                ComponentSource::Direct { .. } => match column {
                    Some(i) => curr.values[*i] / prev.values[*i] - 1.0,
                    None => 0.0,
                },
                ComponentSource::Scaled { of, factor } => factor * direct_return(of),
                ComponentSource::ConstantRate { annual_rate } => annual_rate / MONTHS_PER_YEAR,
            };
            monthly_return += component.weight * component_return;
        }

        value *= 1.0 + monthly_return;
        points.push(PricePoint {
            date: curr.date,
            value,
        });
    }

    Ok(Series::from_points(points))
}
