//! foliobench — index price-series analytics and fixed-weight strategy
//! simulation.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`]. The engine itself
//! does no I/O — raw tables and configuration are handed in through the
//! ports, and an [`domain::store::AnalysisStore`] comes back out.

pub mod domain;
pub mod ports;
pub mod adapters;
