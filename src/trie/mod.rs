//! Prefix tree over the nucleotide alphabet
//!
//! - Each node has exactly four child slots, one per symbol
//! - A key's end is marked by a label on its final node
//! - Nodes are created lazily on insert and never freed

mod node;
mod tree;

pub use node::TrieNode;
pub use tree::BarcodeTrie;
