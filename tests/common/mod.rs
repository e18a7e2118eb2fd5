#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use foliobench::domain::error::FoliobenchError;
use foliobench::domain::series::month_end;
use foliobench::domain::strategy::{ComponentSource, StrategyComponent, StrategyDefinition};
use foliobench::ports::data_port::DataPort;

pub struct MockDataPort {
    pub tables: HashMap<String, String>,
    pub errors: HashMap<String, String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_table(mut self, name: &str, text: &str) -> Self {
        self.tables.insert(name.to_string(), text.to_string());
        self
    }

    pub fn with_error(mut self, name: &str, reason: &str) -> Self {
        self.errors.insert(name.to_string(), reason.to_string());
        self
    }
}

impl DataPort for MockDataPort {
    fn fetch_price_table(&self, name: &str) -> Result<String, FoliobenchError> {
        if let Some(reason) = self.errors.get(name) {
            return Err(FoliobenchError::Data {
                reason: reason.clone(),
            });
        }
        self.tables
            .get(name)
            .cloned()
            .ok_or_else(|| FoliobenchError::Data {
                reason: format!("no table for {name}"),
            })
    }

    fn list_instruments(&self) -> Result<Vec<String>, FoliobenchError> {
        let mut names: Vec<String> = self.tables.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Render month-end observations as a raw "date,close" table starting in
/// the given month.
pub fn monthly_csv(start_year: i32, start_month: u32, values: &[f64]) -> String {
    let mut text = String::from("date,close\n");
    for (i, value) in values.iter().enumerate() {
        let offset = start_month as usize - 1 + i;
        let year = start_year + (offset / 12) as i32;
        let month = (offset % 12) as u32 + 1;
        let day = month_end(date(year, month, 1));
        text.push_str(&format!("{},{}\n", day.format("%d %b %Y"), value));
    }
    text
}

/// `months` of steady compounding at `monthly_return`, starting at 100.
pub fn steady_growth(months: usize, monthly_return: f64) -> Vec<f64> {
    (0..months)
        .map(|i| 100.0 * (1.0 + monthly_return).powi(i as i32))
        .collect()
}

pub fn direct_component(name: &str, weight: f64) -> StrategyComponent {
    StrategyComponent {
        name: name.to_string(),
        weight,
        source: ComponentSource::Direct {
            instrument: name.to_string(),
        },
    }
}

pub fn simple_strategy(name: &str, components: Vec<StrategyComponent>) -> StrategyDefinition {
    StrategyDefinition {
        name: name.to_string(),
        color: "#3b82f6".to_string(),
        components,
    }
}
