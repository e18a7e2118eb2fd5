//! Core domain types and logic.

pub mod align;
pub mod downsample;
pub mod error;
pub mod format;
pub mod instrument;
pub mod loader;
pub mod metrics;
pub mod rolling;
pub mod series;
pub mod simulate;
pub mod store;
pub mod strategy;
