//! Strategy and engine configuration from a [`ConfigPort`].
//!
//! Layout:
//!
//! ```ini
//! [engine]
//! risk_free_rate = 0.06505
//! window_years = 3,5,10
//! max_chart_points = 200
//!
//! [strategy:Conservative]
//! color = #3b82f6
//! weight.Nifty = 0.5
//! weight.Quality = 0.25
//! weight.Momentum = 0.25
//!
//! [strategy:Multi-Asset]
//! color = #8b5cf6
//! weight.Nifty = 0.25
//! weight.MidSmall = 0.15
//! source.MidSmall = scaled:Nifty:1.2
//! weight.Arbitrage = 0.2
//! source.Arbitrage = constant:0.065
//! ```
//!
//! A component without a `source.*` key is a direct pass-through of the
//! instrument with the same name.

use crate::domain::error::FoliobenchError;
use crate::domain::store::EngineConfig;
use crate::domain::strategy::{ComponentSource, StrategyComponent, StrategyDefinition};
use crate::ports::config_port::ConfigPort;

const STRATEGY_SECTION_PREFIX: &str = "strategy:";
const DEFAULT_COLOR: &str = "#6b7280";

/// Read `[engine]` values, falling back to the shipped defaults for any
/// missing key.
pub fn load_engine_config(config: &dyn ConfigPort) -> Result<EngineConfig, FoliobenchError> {
    let defaults = EngineConfig::default();

    let risk_free_rate = config.get_double("engine", "risk_free_rate", defaults.risk_free_rate);
    if !(0.0..1.0).contains(&risk_free_rate) {
        return Err(FoliobenchError::ConfigInvalid {
            section: "engine".to_string(),
            key: "risk_free_rate".to_string(),
            reason: "risk_free_rate must be between 0 and 1".to_string(),
        });
    }

    let window_years = match config.get_string("engine", "window_years") {
        None => defaults.window_years,
        Some(raw) => parse_window_years(&raw)?,
    };

    let max_chart_points =
        config.get_int("engine", "max_chart_points", defaults.max_chart_points as i64);
    if max_chart_points <= 0 {
        return Err(FoliobenchError::ConfigInvalid {
            section: "engine".to_string(),
            key: "max_chart_points".to_string(),
            reason: "max_chart_points must be positive".to_string(),
        });
    }

    Ok(EngineConfig {
        risk_free_rate,
        window_years,
        max_chart_points: max_chart_points as usize,
    })
}

fn parse_window_years(raw: &str) -> Result<Vec<u32>, FoliobenchError> {
    let invalid = |reason: String| FoliobenchError::ConfigInvalid {
        section: "engine".to_string(),
        key: "window_years".to_string(),
        reason,
    };

    let mut years = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        let value: u32 = token
            .parse()
            .map_err(|_| invalid(format!("invalid window length: {token}")))?;
        if value == 0 {
            return Err(invalid("window length must be positive".to_string()));
        }
        years.push(value);
    }
    if years.is_empty() {
        return Err(invalid("window_years must not be empty".to_string()));
    }
    Ok(years)
}

/// Build every `[strategy:<Name>]` section into a [`StrategyDefinition`].
pub fn load_strategies(config: &dyn ConfigPort) -> Result<Vec<StrategyDefinition>, FoliobenchError> {
    let mut strategies = Vec::new();
    for section in config.sections() {
        let Some(name) = section.strip_prefix(STRATEGY_SECTION_PREFIX) else {
            continue;
        };
        strategies.push(load_strategy(config, &section, name)?);
    }
    Ok(strategies)
}

fn load_strategy(
    config: &dyn ConfigPort,
    section: &str,
    name: &str,
) -> Result<StrategyDefinition, FoliobenchError> {
    let color = config
        .get_string(section, "color")
        .unwrap_or_else(|| DEFAULT_COLOR.to_string());

    let mut components = Vec::new();
    for key in config.keys(section) {
        let Some(component) = key.strip_prefix("weight.") else {
            continue;
        };
        let raw = config.get_string(section, &key).unwrap_or_default();
        let weight: f64 = raw
            .trim()
            .parse()
            .map_err(|_| FoliobenchError::ConfigInvalid {
                section: section.to_string(),
                key: key.clone(),
                reason: format!("invalid weight: {raw}"),
            })?;

        let source = match config.get_string(section, &format!("source.{component}")) {
            None => ComponentSource::Direct {
                instrument: component.to_string(),
            },
            Some(spec) => parse_source(section, component, &spec)?,
        };

        components.push(StrategyComponent {
            name: component.to_string(),
            weight,
            source,
        });
    }

    if components.is_empty() {
        return Err(FoliobenchError::ConfigMissing {
            section: section.to_string(),
            key: "weight.*".to_string(),
        });
    }

    // A source.* key without a matching weight.* key is a typo worth
    // surfacing rather than silently ignoring.
    for key in config.keys(section) {
        if let Some(component) = key.strip_prefix("source.") {
            if !components.iter().any(|c| c.name == component) {
                return Err(FoliobenchError::ConfigInvalid {
                    section: section.to_string(),
                    key: key.clone(),
                    reason: format!("source for unknown component {component}"),
                });
            }
        }
    }

    Ok(StrategyDefinition {
        name: name.to_string(),
        color,
        components,
    })
}

fn parse_source(
    section: &str,
    component: &str,
    spec: &str,
) -> Result<ComponentSource, FoliobenchError> {
    let invalid = |reason: String| FoliobenchError::ConfigInvalid {
        section: section.to_string(),
        key: format!("source.{component}"),
        reason,
    };

    let parts: Vec<&str> = spec.split(':').map(str::trim).collect();
    match parts.as_slice() {
        ["instrument", instrument] => Ok(ComponentSource::Direct {
            instrument: instrument.to_string(),
        }),
        ["scaled", of, factor] => {
            let factor: f64 = factor
                .parse()
                .map_err(|_| invalid(format!("invalid scale factor: {factor}")))?;
            Ok(ComponentSource::Scaled {
                of: of.to_string(),
                factor,
            })
        }
        ["constant", rate] => {
            let annual_rate: f64 = rate
                .parse()
                .map_err(|_| invalid(format!("invalid annual rate: {rate}")))?;
            Ok(ComponentSource::ConstantRate { annual_rate })
        }
        _ => Err(invalid(format!("unrecognized source spec: {spec}"))),
    }
}

/// The roster the original dashboard ships with, for consumers running
/// without a config file. Component names reference instruments named
/// "Nifty", "Quality" and "Momentum".
pub fn default_strategies() -> Vec<StrategyDefinition> {
    let direct = |name: &str, weight: f64| StrategyComponent {
        name: name.to_string(),
        weight,
        source: ComponentSource::Direct {
            instrument: name.to_string(),
        },
    };
    let mid_small = |weight: f64| StrategyComponent {
        name: "MidSmall".to_string(),
        weight,
        source: ComponentSource::Scaled {
            of: "Nifty".to_string(),
            factor: 1.2,
        },
    };

    vec![
        StrategyDefinition {
            name: "Conservative".to_string(),
            color: "#3b82f6".to_string(),
            components: vec![
                direct("Nifty", 0.5),
                direct("Quality", 0.25),
                direct("Momentum", 0.25),
            ],
        },
        StrategyDefinition {
            name: "Equal Weight".to_string(),
            color: "#10b981".to_string(),
            components: vec![
                direct("Nifty", 0.333),
                direct("Quality", 0.333),
                direct("Momentum", 0.333),
            ],
        },
        StrategyDefinition {
            name: "Aggressive".to_string(),
            color: "#f97316".to_string(),
            components: vec![
                direct("Nifty", 0.2),
                direct("Quality", 0.4),
                direct("Momentum", 0.4),
            ],
        },
        StrategyDefinition {
            name: "Hyper-Aggressive".to_string(),
            color: "#ef4444".to_string(),
            components: vec![
                direct("Nifty", 0.0),
                direct("Quality", 0.5),
                direct("Momentum", 0.5),
            ],
        },
        StrategyDefinition {
            name: "Multi-Asset".to_string(),
            color: "#8b5cf6".to_string(),
            components: vec![
                direct("Nifty", 0.25),
                direct("Quality", 0.2),
                direct("Momentum", 0.2),
                mid_small(0.15),
                StrategyComponent {
                    name: "Arbitrage".to_string(),
                    weight: 0.2,
                    source: ComponentSource::ConstantRate { annual_rate: 0.065 },
                },
            ],
        },
        StrategyDefinition {
            name: "Multi-Asset (No Arbitrage)".to_string(),
            color: "#d946ef".to_string(),
            components: vec![
                direct("Nifty", 0.3125),
                direct("Quality", 0.25),
                direct("Momentum", 0.25),
                mid_small(0.1875),
            ],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    const SAMPLE: &str = r#"
[engine]
risk_free_rate = 0.05
window_years = 3, 7
max_chart_points = 150

[strategy:Conservative]
color = #3b82f6
weight.Nifty = 0.5
weight.Quality = 0.25
weight.Momentum = 0.25

[strategy:Multi-Asset]
color = #8b5cf6
weight.Nifty = 0.25
weight.Quality = 0.2
weight.Momentum = 0.2
weight.MidSmall = 0.15
source.MidSmall = scaled:Nifty:1.2
weight.Arbitrage = 0.2
source.Arbitrage = constant:0.065
"#;

    fn adapter(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn engine_config_from_ini() {
        let config = load_engine_config(&adapter(SAMPLE)).unwrap();
        assert_eq!(config.risk_free_rate, 0.05);
        assert_eq!(config.window_years, vec![3, 7]);
        assert_eq!(config.max_chart_points, 150);
    }

    #[test]
    fn engine_config_defaults_when_absent() {
        let config = load_engine_config(&adapter("[engine]\n")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn engine_config_rejects_out_of_range_rate() {
        let result = load_engine_config(&adapter("[engine]\nrisk_free_rate = 1.5\n"));
        assert!(matches!(
            result,
            Err(FoliobenchError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn engine_config_rejects_bad_window_list() {
        let result = load_engine_config(&adapter("[engine]\nwindow_years = 3,zero\n"));
        assert!(matches!(
            result,
            Err(FoliobenchError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn strategies_from_ini() {
        let strategies = load_strategies(&adapter(SAMPLE)).unwrap();
        assert_eq!(strategies.len(), 2);

        let conservative = strategies
            .iter()
            .find(|s| s.name == "Conservative")
            .unwrap();
        assert_eq!(conservative.color, "#3b82f6");
        assert_eq!(conservative.components.len(), 3);
        assert!((conservative.total_weight() - 1.0).abs() < 1e-12);

        let multi = strategies.iter().find(|s| s.name == "Multi-Asset").unwrap();
        let mid_small = multi.component("MidSmall").unwrap();
        assert_eq!(
            mid_small.source,
            ComponentSource::Scaled {
                of: "Nifty".to_string(),
                factor: 1.2
            }
        );
        let arbitrage = multi.component("Arbitrage").unwrap();
        assert_eq!(
            arbitrage.source,
            ComponentSource::ConstantRate { annual_rate: 0.065 }
        );
    }

    #[test]
    fn component_without_source_defaults_to_direct() {
        let strategies = load_strategies(&adapter(SAMPLE)).unwrap();
        let conservative = strategies
            .iter()
            .find(|s| s.name == "Conservative")
            .unwrap();
        assert_eq!(
            conservative.component("Nifty").unwrap().source,
            ComponentSource::Direct {
                instrument: "Nifty".to_string()
            }
        );
    }

    #[test]
    fn strategy_without_weights_is_missing_config() {
        let result = load_strategies(&adapter("[strategy:Empty]\ncolor = #fff\n"));
        assert!(matches!(
            result,
            Err(FoliobenchError::ConfigMissing { .. })
        ));
    }

    #[test]
    fn orphan_source_key_is_invalid() {
        let content = "[strategy:Typo]\nweight.Nifty = 1.0\nsource.Nifti = constant:0.05\n";
        let result = load_strategies(&adapter(content));
        assert!(matches!(
            result,
            Err(FoliobenchError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn unrecognized_source_spec_is_invalid() {
        let content = "[strategy:Bad]\nweight.Nifty = 1.0\nsource.Nifty = wave:hello\n";
        let result = load_strategies(&adapter(content));
        assert!(matches!(
            result,
            Err(FoliobenchError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn default_roster_matches_shipped_dashboard() {
        let strategies = default_strategies();
        assert_eq!(strategies.len(), 6);

        let multi = strategies.iter().find(|s| s.name == "Multi-Asset").unwrap();
        assert_eq!(multi.components.len(), 5);
        assert!((multi.total_weight() - 1.0).abs() < 1e-12);

        let equal = strategies.iter().find(|s| s.name == "Equal Weight").unwrap();
        // Shipped weights carry slight float drift; they are used as-is.
        assert!((equal.total_weight() - 0.999).abs() < 1e-12);
    }
}
