//! Engine configuration and the per-load analysis store.
//!
//! The store is built once per data-load cycle from raw tables and the
//! strategy roster, then passed by reference to consumers. There is no
//! process-wide registry; rebuilding from the same inputs yields an equal
//! store.

use tracing::warn;

use crate::domain::align::CombinedTable;
use crate::domain::error::FoliobenchError;
use crate::domain::instrument::{Instrument, SimulatedStrategy};
use crate::domain::loader::parse_price_table;
use crate::domain::series::Series;
use crate::domain::simulate::simulate;
use crate::domain::strategy::StrategyDefinition;

/// Engine-wide knobs. All of these come from configuration in a deployed
/// setup (see `adapters::strategy_config`); the defaults match the shipped
/// dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Annual risk-free rate used by Sharpe and Sortino.
    pub risk_free_rate: f64,
    /// Rolling-window lengths, in years.
    pub window_years: Vec<u32>,
    /// Point cap for downsampled chart series.
    pub max_chart_points: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            risk_free_rate: 0.06505,
            window_years: vec![3, 5, 10],
            max_chart_points: 200,
        }
    }
}

/// All computed outputs for one data-load cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisStore {
    pub instruments: Vec<Instrument>,
    pub strategies: Vec<SimulatedStrategy>,
}

impl AnalysisStore {
    /// Run the full pipeline: parse each raw table, resample to month-end,
    /// analyze each instrument, align them, and simulate every strategy.
    ///
    /// `raw_tables` maps instrument name to the raw delimited text the UI
    /// plumbing fetched. A strategy referencing an unknown instrument is a
    /// configuration error; everything else degrades to "unavailable".
    pub fn build(
        raw_tables: &[(&str, &str)],
        config: &EngineConfig,
        definitions: &[StrategyDefinition],
    ) -> Result<AnalysisStore, FoliobenchError> {
        let instruments: Vec<Instrument> = raw_tables
            .iter()
            .map(|(name, text)| {
                let series = parse_price_table(text).resample_monthly();
                if !series.is_monthly() {
                    // Annualization assumes 12 periods/year; a gap skews it.
                    warn!(instrument = *name, "series has missing months");
                }
                Instrument::analyze(name, series, config)
            })
            .collect();

        let named: Vec<(&str, &Series)> = instruments
            .iter()
            .map(|i| (i.name.as_str(), &i.series))
            .collect();
        let table = CombinedTable::align(&named);

        let strategies = definitions
            .iter()
            .map(|definition| {
                let series = simulate(&table, definition)?;
                Ok(SimulatedStrategy {
                    instrument: Instrument::analyze(&definition.name, series, config),
                    definition: definition.clone(),
                })
            })
            .collect::<Result<Vec<SimulatedStrategy>, FoliobenchError>>()?;

        Ok(AnalysisStore {
            instruments,
            strategies,
        })
    }

    pub fn instrument(&self, name: &str) -> Option<&Instrument> {
        self.instruments.iter().find(|i| i.name == name)
    }

    pub fn strategy(&self, name: &str) -> Option<&SimulatedStrategy> {
        self.strategies.iter().find(|s| s.definition.name == name)
    }
}
