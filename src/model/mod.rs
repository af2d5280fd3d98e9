//! Core data model types for clust

mod sequence;
mod symbol;

pub use sequence::Sequence;
pub use symbol::{Symbol, ALPHABET_SIZE};
