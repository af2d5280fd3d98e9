//! Barcode table loading
//!
//! Reads `sequence<TAB>label` records into a [`BarcodeTrie`](crate::BarcodeTrie).

mod table;

pub use table::{load_table, parse_table, TableRecord};
