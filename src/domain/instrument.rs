//! Analyzed output bundles handed to the presentation layer.

use std::collections::BTreeMap;

use crate::domain::downsample::downsample;
use crate::domain::metrics::Metrics;
use crate::domain::rolling::{RollingReturnStats, rolling_returns, window_label};
use crate::domain::series::Series;
use crate::domain::store::EngineConfig;
use crate::domain::strategy::StrategyDefinition;

/// A named series with everything the presentation layer needs: the full
/// series, a chart-sized sample, metrics, and the per-window rolling return
/// distributions (keyed by window length in years).
#[derive(Debug, Clone, PartialEq)]
pub struct Instrument {
    pub name: String,
    pub series: Series,
    pub sampled: Series,
    pub metrics: Metrics,
    pub rolling: BTreeMap<u32, Option<RollingReturnStats>>,
}

impl Instrument {
    /// Run the full per-series pipeline: metrics, rolling distributions for
    /// every configured window, and the downsampled chart series.
    pub fn analyze(name: &str, series: Series, config: &EngineConfig) -> Instrument {
        let metrics = Metrics::compute(&series, config.risk_free_rate);
        let rolling = config
            .window_years
            .iter()
            .map(|&years| (years, rolling_returns(&series, years)))
            .collect();
        let sampled = downsample(&series, config.max_chart_points);

        Instrument {
            name: name.to_string(),
            series,
            sampled,
            metrics,
            rolling,
        }
    }

    /// Rolling distributions keyed by display label ("3yr", "5yr", ...).
    pub fn rolling_by_label(&self) -> BTreeMap<String, Option<RollingReturnStats>> {
        self.rolling
            .iter()
            .map(|(&years, stats)| (window_label(years), *stats))
            .collect()
    }
}

/// An [`Instrument`] whose series came from the simulator, together with the
/// definition that produced it (the display color rides on the definition).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulatedStrategy {
    pub instrument: Instrument,
    pub definition: StrategyDefinition,
}
