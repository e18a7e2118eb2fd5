//! Concrete port implementations: CSV files on disk and INI configuration.

pub mod csv_adapter;
pub mod file_config_adapter;
pub mod strategy_config;
