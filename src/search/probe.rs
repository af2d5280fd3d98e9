//! Divergence probe: classify repairs at the first mismatch

use crate::model::Symbol;
use crate::trie::{BarcodeTrie, TrieNode};

/// Outcome of probing a query against the trie
#[derive(Debug, PartialEq, Eq)]
pub enum Probe<'a, L> {
    /// The whole query is a stored key
    Terminal(&'a L),
    /// The whole query was consumed but no key ends there
    DeadEnd,
    /// The query left the trie at some position
    Divergence(Divergence),
}

/// Repair candidates at the first position the query leaves the trie
///
/// All three lists draw from the symbols present at the divergence node and
/// are validated independently, so a symbol may appear in several of them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Divergence {
    /// Index of the first query symbol with no matching child
    pub position: usize,
    /// Symbols that can replace the mismatched one
    pub substitutions: Vec<Symbol>,
    /// Siblings present while the query minus the mismatched symbol still aligns
    pub insertions: Vec<Symbol>,
    /// Symbols that can be restored before the mismatched one
    pub deletions: Vec<Symbol>,
}

impl Divergence {
    /// Check whether no repair of any kind is possible
    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty() && self.insertions.is_empty() && self.deletions.is_empty()
    }
}

impl<L> BarcodeTrie<L> {
    /// Walk `query` until it first leaves the trie and classify the repairs there
    pub fn probe(&self, query: &[Symbol]) -> Probe<'_, L> {
        let mut node = self.root();
        for (pos, sym) in query.iter().enumerate() {
            match node.child(*sym) {
                Some(child) => node = child,
                None => {
                    let lookahead = self.config().lookahead_depth;
                    return Probe::Divergence(classify(node, query, pos, lookahead));
                }
            }
        }

        match node.terminal() {
            Some(label) => Probe::Terminal(label),
            None => Probe::DeadEnd,
        }
    }
}

/// Check every child of `node` as a repair for `query[pos]`.
///
/// A repair is accepted when the query keeps aligning for `depth` symbols
/// after it, where `depth` is the lookahead capped by what is left of the query.
fn classify<L>(node: &TrieNode<L>, query: &[Symbol], pos: usize, lookahead: usize) -> Divergence {
    let remaining = query.len() - pos - 1;
    let depth = remaining.min(lookahead);

    // Dropping query[pos] leaves depth - 1 symbols to check from this node,
    // independent of which sibling is considered.
    let skip_aligns = depth >= 1 && node.walk(&query[pos + 1..pos + depth]).is_some();

    let mut divergence = Divergence {
        position: pos,
        ..Divergence::default()
    };
    for (sym, branch) in node.children() {
        if branch.walk(&query[pos..pos + depth]).is_some() {
            divergence.deletions.push(sym);
        }
        if skip_aligns {
            divergence.insertions.push(sym);
        }
        if branch.walk(&query[pos + 1..pos + 1 + depth]).is_some() {
            divergence.substitutions.push(sym);
        }
    }
    divergence
}
