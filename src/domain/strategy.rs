//! Fixed-weight strategy definitions.
//!
//! A strategy is a named set of weighted components. Weights are used
//! exactly as given — they are not normalized, so a sum above 1 acts as
//! leverage and a sum below 1 as a cash drag. Each component declares where
//! its monthly return comes from via [`ComponentSource`].

use crate::domain::align::CombinedTable;
use crate::domain::error::FoliobenchError;

/// Where a component's monthly return comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentSource {
    /// Pass-through of a real instrument's return from the combined table.
    Direct { instrument: String },
    /// Scalar multiple of another component's return. The referenced
    /// component must be a `Direct` one in the same strategy.
    Scaled { of: String, factor: f64 },
    /// Constant monthly return of `annual_rate / 12`.
    ConstantRate { annual_rate: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyComponent {
    pub name: String,
    pub weight: f64,
    pub source: ComponentSource,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrategyDefinition {
    pub name: String,
    pub color: String,
    pub components: Vec<StrategyComponent>,
}

impl StrategyDefinition {
    pub fn component(&self, name: &str) -> Option<&StrategyComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Sum of raw weights. Informational only — the simulator never
    /// normalizes by it.
    pub fn total_weight(&self) -> f64 {
        self.components.iter().map(|c| c.weight).sum()
    }

    /// Check every component reference before simulation: `Direct` sources
    /// must name an instrument in the combined table, and `Scaled` sources
    /// must name a sibling `Direct` component.
    pub fn validate(&self, table: &CombinedTable) -> Result<(), FoliobenchError> {
        for component in &self.components {
            match &component.source {
                ComponentSource::Direct { instrument } => {
                    if table.instrument_index(instrument).is_none() {
                        return Err(FoliobenchError::UnknownInstrument {
                            strategy: self.name.clone(),
                            component: component.name.clone(),
                            instrument: instrument.clone(),
                        });
                    }
                }
                ComponentSource::Scaled { of, .. } => {
                    let target = self.component(of);
                    let is_direct = matches!(
                        target.map(|c| &c.source),
                        Some(ComponentSource::Direct { .. })
                    );
                    if !is_direct {
                        return Err(FoliobenchError::UnknownComponent {
                            strategy: self.name.clone(),
                            component: component.name.clone(),
                            reference: of.clone(),
                        });
                    }
                }
                ComponentSource::ConstantRate { .. } => {}
            }
        }
        Ok(())
    }
}
