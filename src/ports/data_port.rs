//! Raw price-table access port.
//!
//! The engine does no I/O; whatever supplies the raw delimited text (files,
//! an HTTP layer, embedded fixtures) implements this trait.

use crate::domain::error::FoliobenchError;

pub trait DataPort {
    /// Raw delimited text for one instrument, as handed to
    /// `domain::loader::parse_price_table`.
    fn fetch_price_table(&self, name: &str) -> Result<String, FoliobenchError>;

    fn list_instruments(&self) -> Result<Vec<String>, FoliobenchError>;
}
