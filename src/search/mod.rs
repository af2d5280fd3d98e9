//! Fuzzy lookup: divergence probing and bounded repair search

mod fuzzy;
mod probe;

pub use fuzzy::{edit_count, FuzzyMatch, NO_MATCH_EDITS};
pub use probe::{Divergence, Probe};
