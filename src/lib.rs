//! # clust
//!
//! A prefix tree over the nucleotide alphabet with exact and bounded-edit
//! fuzzy lookup, built for matching short barcodes and k-mers.
//!
//! ## Core Concepts
//!
//! - **Sequences**: keys over the fixed alphabet `A`, `T`, `G`, `C`
//! - **Trie**: 4-ary tree mapping keys (up to `max_key_length` symbols) to labels
//! - **Probe**: finds where a query first leaves the trie and which
//!   substitution, insertion or deletion would bring it back
//! - **Search**: breadth-first repair of the query, one edit per step, up
//!   to an edit budget
//!
//! ## Example
//!
//! ```
//! use clust::{BarcodeTrie, Sequence};
//!
//! let mut trie = BarcodeTrie::new();
//! let key: Sequence = "ATGC".parse()?;
//! trie.insert(&key, "cell_1")?;
//!
//! let query: Sequence = "ATCC".parse()?;
//! let hit = trie.search(&query, 1).expect("one substitution away");
//! assert_eq!(*hit.label, "cell_1");
//! assert_eq!(hit.edits, 1);
//! # Ok::<(), clust::Error>(())
//! ```

pub mod config;
pub mod model;
pub mod search;
pub mod store;
pub mod trie;

mod error;

pub use config::TrieConfig;
pub use error::{Error, Result};
pub use model::{Sequence, Symbol};
pub use search::{edit_count, Divergence, FuzzyMatch, Probe, NO_MATCH_EDITS};
pub use store::load_table;
pub use trie::{BarcodeTrie, TrieNode};
