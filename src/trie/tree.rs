//! Barcode trie implementation

use super::TrieNode;
use crate::config::TrieConfig;
use crate::model::{Sequence, Symbol};
use crate::{Error, Result};

/// A 4-ary trie mapping nucleotide keys to labels
///
/// Keys are limited to `config.max_key_length` symbols. Deletion only clears
/// the terminal marker; intermediate nodes stay allocated.
#[derive(Clone, Debug)]
pub struct BarcodeTrie<L> {
    root: TrieNode<L>,
    config: TrieConfig,
    /// Number of terminal nodes
    len: usize,
}

impl<L> BarcodeTrie<L> {
    /// Create a new empty trie with default configuration
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Create a new empty trie with the given configuration
    pub fn with_config(config: TrieConfig) -> Self {
        BarcodeTrie {
            root: TrieNode::new(),
            config,
            len: 0,
        }
    }

    /// Build a trie from `(key, label)` pairs; later duplicates overwrite earlier ones
    pub fn try_from_entries<I, K>(config: TrieConfig, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, L)>,
        K: AsRef<[Symbol]>,
    {
        let mut trie = Self::with_config(config);
        for (key, label) in entries {
            trie.insert(key.as_ref(), label)?;
        }
        Ok(trie)
    }

    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    pub(crate) fn root(&self) -> &TrieNode<L> {
        &self.root
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert a key, returning the label it replaced
    ///
    /// Fails with [`Error::KeyTooLong`] if the key exceeds `max_key_length`.
    pub fn insert(&mut self, key: &[Symbol], label: L) -> Result<Option<L>> {
        if key.len() > self.config.max_key_length {
            return Err(Error::KeyTooLong {
                len: key.len(),
                max: self.config.max_key_length,
            });
        }

        let node = key
            .iter()
            .fold(&mut self.root, |node, sym| node.child_or_insert(*sym));
        let previous = node.set_terminal(label);
        if previous.is_none() {
            self.len += 1;
        }
        Ok(previous)
    }

    /// Remove a key, returning its label
    ///
    /// A key whose path does not exist is a no-op; no nodes are created or freed.
    pub fn delete(&mut self, key: &[Symbol]) -> Option<L> {
        let removed = self.root.walk_mut(key)?.take_terminal();
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Exact lookup
    ///
    /// Returns `None` when the path is absent or ends on a non-terminal node.
    pub fn get(&self, key: &[Symbol]) -> Option<&L> {
        self.root.walk(key)?.terminal()
    }

    pub fn contains(&self, key: &[Symbol]) -> bool {
        self.get(key).is_some()
    }

    /// List all keys starting with `prefix`, in alphabet order
    pub fn list_prefix(&self, prefix: &[Symbol]) -> Vec<(Sequence, &L)> {
        let mut results = Vec::new();
        if let Some(node) = self.root.walk(prefix) {
            collect_entries(node, &mut Sequence::from(prefix), &mut results);
        }
        results
    }

    /// All stored entries in alphabet order
    pub fn iter(&self) -> impl Iterator<Item = (Sequence, &L)> {
        self.list_prefix(&[]).into_iter()
    }
}

impl<L> Default for BarcodeTrie<L> {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_entries<'a, L>(
    node: &'a TrieNode<L>,
    current: &mut Sequence,
    results: &mut Vec<(Sequence, &'a L)>,
) {
    if let Some(label) = node.terminal() {
        results.push((current.clone(), label));
    }
    for (sym, child) in node.children() {
        current.push(sym);
        collect_entries(child, current, results);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    #[test]
    fn test_trie_insert_get() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("ATGC"), "bc1").unwrap();

        assert_eq!(trie.get(&seq("ATGC")), Some(&"bc1"));
        assert_eq!(trie.get(&seq("ATGG")), None);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_trie_multiple_keys() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("ATGC"), 1).unwrap();
        trie.insert(&seq("ATGCAA"), 2).unwrap();
        trie.insert(&seq("GGCC"), 3).unwrap();

        assert_eq!(trie.get(&seq("ATGC")), Some(&1));
        assert_eq!(trie.get(&seq("ATGCAA")), Some(&2));
        assert_eq!(trie.get(&seq("GGCC")), Some(&3));
        // Internal path only
        assert_eq!(trie.get(&seq("ATG")), None);
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_insert_overwrites_label() {
        let mut trie = BarcodeTrie::new();
        assert_eq!(trie.insert(&seq("ACGT"), 1).unwrap(), None);
        assert_eq!(trie.insert(&seq("ACGT"), 2).unwrap(), Some(1));
        assert_eq!(trie.get(&seq("ACGT")), Some(&2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_falsy_label_is_terminal() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("AAAA"), false).unwrap();
        trie.insert(&seq("CCCC"), true).unwrap();

        assert_eq!(trie.get(&seq("AAAA")), Some(&false));
        assert!(trie.contains(&seq("CCCC")));
    }

    #[test]
    fn test_insert_rejects_long_key() {
        let mut trie = BarcodeTrie::new();
        let key = seq("ACGTACGTACGTACGTA");
        let err = trie.insert(&key, ()).unwrap_err();
        assert!(matches!(err, Error::KeyTooLong { len: 17, max: 16 }));
        assert!(trie.is_empty());
    }

    #[test]
    fn test_trie_delete() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("ATGC"), 1).unwrap();
        trie.insert(&seq("ATGA"), 2).unwrap();

        assert_eq!(trie.delete(&seq("ATGC")), Some(1));
        assert_eq!(trie.get(&seq("ATGC")), None);
        assert_eq!(trie.get(&seq("ATGA")), Some(&2));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_delete_missing_path_is_noop() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("ATGC"), 1).unwrap();

        assert_eq!(trie.delete(&seq("CCCC")), None);
        assert_eq!(trie.delete(&seq("ATG")), None);
        // No nodes were created for the missing path
        assert!(trie.root().child(Symbol::C).is_none());
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_delete_keeps_nodes() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("ATGC"), 1).unwrap();
        trie.delete(&seq("ATGC"));

        assert!(trie.root().walk(&seq("ATGC")).is_some());
        assert!(trie.is_empty());
    }

    #[test]
    fn test_trie_list_prefix() {
        let mut trie = BarcodeTrie::new();
        trie.insert(&seq("ATGC"), "a").unwrap();
        trie.insert(&seq("ATAA"), "b").unwrap();
        trie.insert(&seq("GCGC"), "c").unwrap();

        let under_at: Vec<_> = trie
            .list_prefix(&seq("AT"))
            .into_iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect();
        // Alphabet order is A, T, G, C
        assert_eq!(
            under_at,
            vec![("ATAA".to_string(), "b"), ("ATGC".to_string(), "a")]
        );

        assert!(trie.list_prefix(&seq("TT")).is_empty());
        assert_eq!(trie.iter().count(), 3);
    }

    #[test]
    fn test_try_from_entries() {
        let entries = vec![(seq("AAAA"), 1), (seq("TTTT"), 2), (seq("AAAA"), 3)];
        let trie = BarcodeTrie::try_from_entries(TrieConfig::default(), entries).unwrap();

        assert_eq!(trie.len(), 2);
        assert_eq!(trie.get(&seq("AAAA")), Some(&3));
    }
}
