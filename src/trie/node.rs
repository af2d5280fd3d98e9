//! Trie node types

use crate::model::{Symbol, ALPHABET_SIZE};

/// A node in the barcode trie
///
/// Each node owns one optional child per alphabet symbol, indexed by
/// [`Symbol::index`], and an optional label marking the end of a key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrieNode<L> {
    children: [Option<Box<TrieNode<L>>>; ALPHABET_SIZE],
    terminal: Option<L>,
}

impl<L> TrieNode<L> {
    /// Create an empty, non-terminal node
    pub fn new() -> Self {
        TrieNode {
            children: [None, None, None, None],
            terminal: None,
        }
    }

    /// Child reached by `symbol`, if any key continues through it
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<&TrieNode<L>> {
        self.children[symbol.index()].as_deref()
    }

    #[inline]
    pub fn child_mut(&mut self, symbol: Symbol) -> Option<&mut TrieNode<L>> {
        self.children[symbol.index()].as_deref_mut()
    }

    /// Child reached by `symbol`, created if missing
    pub fn child_or_insert(&mut self, symbol: Symbol) -> &mut TrieNode<L> {
        self.children[symbol.index()].get_or_insert_with(|| Box::new(TrieNode::new()))
    }

    /// Present children in alphabet order
    pub fn children(&self) -> impl Iterator<Item = (Symbol, &TrieNode<L>)> {
        Symbol::ALL
            .into_iter()
            .zip(self.children.iter())
            .filter_map(|(sym, child)| child.as_deref().map(|c| (sym, c)))
    }

    /// Follow `path` from this node; `None` at the first missing child
    pub fn walk(&self, path: &[Symbol]) -> Option<&TrieNode<L>> {
        path.iter().try_fold(self, |node, sym| node.child(*sym))
    }

    pub fn walk_mut(&mut self, path: &[Symbol]) -> Option<&mut TrieNode<L>> {
        let mut node = self;
        for sym in path {
            node = node.child_mut(*sym)?;
        }
        Some(node)
    }

    /// Label stored at this node, if a key ends here
    pub fn terminal(&self) -> Option<&L> {
        self.terminal.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal.is_some()
    }

    /// Mark this node terminal, returning the label it replaces
    pub fn set_terminal(&mut self, label: L) -> Option<L> {
        self.terminal.replace(label)
    }

    /// Clear the terminal marker, returning the removed label
    pub fn take_terminal(&mut self) -> Option<L> {
        self.terminal.take()
    }
}

impl<L> Default for TrieNode<L> {
    fn default() -> Self {
        TrieNode::new()
    }
}
