//! Bounded fuzzy search over a barcode trie

use super::probe::{Divergence, Probe};
use crate::model::Symbol;
use crate::trie::BarcodeTrie;
use std::collections::VecDeque;

/// Edit count reported for a search that found nothing
pub const NO_MATCH_EDITS: usize = 1000;

/// A fuzzy search hit
#[derive(Debug, PartialEq, Eq)]
pub struct FuzzyMatch<'a, L> {
    pub label: &'a L,
    /// Number of repairs applied to reach the stored key
    pub edits: usize,
}

impl<L> Clone for FuzzyMatch<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L> Copy for FuzzyMatch<'_, L> {}

/// Edit count of a search result, [`NO_MATCH_EDITS`] when there is none
pub fn edit_count<L>(result: Option<&FuzzyMatch<'_, L>>) -> usize {
    result.map_or(NO_MATCH_EDITS, |m| m.edits)
}

impl<L> BarcodeTrie<L> {
    /// Find the stored key reachable from `query` with the fewest repairs
    ///
    /// Candidates are probed breadth-first by edit count. Each divergence
    /// spawns one candidate per viable substitution, deletion and (at most
    /// one) insertion repair, each costing one edit. The search stops when
    /// an exact match is found, when the next candidate would exceed
    /// `max_edits`, or when a candidate runs into a dead end.
    ///
    /// The repairs are only validated a few symbols ahead, so the result is
    /// the best match this search discovers, not a true edit distance.
    pub fn search(&self, query: &[Symbol], max_edits: usize) -> Option<FuzzyMatch<'_, L>> {
        let mut worklist: VecDeque<(Vec<Symbol>, usize)> = VecDeque::new();
        worklist.push_back((query.to_vec(), 0));

        let mut best: Option<FuzzyMatch<'_, L>> = None;
        let mut probes = 0usize;
        let mut peak = worklist.len();

        while let Some((candidate, edits)) = worklist.pop_front() {
            if edits > max_edits {
                break;
            }
            probes += 1;

            match self.probe(&candidate) {
                Probe::Terminal(label) => {
                    if best.map_or(true, |b| edits < b.edits) {
                        best = Some(FuzzyMatch { label, edits });
                    }
                    if edits == 0 {
                        break;
                    }
                }
                Probe::DeadEnd => {
                    log::debug!("dead end at candidate of length {}", candidate.len());
                    break;
                }
                Probe::Divergence(divergence) => {
                    for repaired in self.repairs(&candidate, &divergence) {
                        worklist.push_back((repaired, edits + 1));
                    }
                    peak = peak.max(worklist.len());
                }
            }
        }

        log::debug!(
            "fuzzy search: {} probes, peak worklist {}, best {:?}",
            probes,
            peak,
            best.map(|b| b.edits)
        );
        best
    }

    /// Candidate sequences repairing `candidate` at the divergence point
    fn repairs(&self, candidate: &[Symbol], divergence: &Divergence) -> Vec<Vec<Symbol>> {
        let pos = divergence.position;
        let head = &candidate[..pos];
        let tail = &candidate[pos + 1..];
        let mut repaired = Vec::new();

        for sym in &divergence.substitutions {
            let mut seq = Vec::with_capacity(candidate.len());
            seq.extend_from_slice(head);
            seq.push(*sym);
            seq.extend_from_slice(tail);
            repaired.push(seq);
        }

        // Insertion and deletion repairs need symbols after the mismatch
        if tail.is_empty() {
            return repaired;
        }

        // Every insertion candidate yields the same sequence
        if !divergence.insertions.is_empty() {
            let mut seq = Vec::with_capacity(candidate.len());
            seq.extend_from_slice(head);
            seq.extend_from_slice(tail);
            seq.push(self.config().filler);
            repaired.push(seq);
        }

        let max_len = self.config().max_key_length;
        for sym in &divergence.deletions {
            let mut seq = Vec::with_capacity(candidate.len() + 1);
            seq.extend_from_slice(head);
            seq.push(*sym);
            seq.extend_from_slice(&candidate[pos..]);
            seq.truncate(max_len);
            repaired.push(seq);
        }

        repaired
    }
}
