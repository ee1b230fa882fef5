//! Letter-coincidence tables, computed once per generation.
//!
//! For every ordered entry pair `(i, j)` the matrix lists the positions at
//! which the two words share a letter; the per-entry totals feed the seed
//! and candidate-ordering heuristics in the placer.

use std::collections::HashMap;

use crate::entry::Entry;

/// Derived, immutable cross-reference over one entry list.
#[derive(Debug)]
pub(crate) struct OverlapMatrix {
    /// `(i, j)` → every `(i_pos, j_pos)` with
    /// `entries[i].word[i_pos] == entries[j].word[j_pos]`.
    pairs: HashMap<(usize, usize), Vec<(usize, usize)>>,
    /// Per entry, the number of coincidences against all other entries.
    totals: Vec<usize>,
}

impl OverlapMatrix {
    pub(crate) fn build(entries: &[Entry]) -> Self {
        let mut pairs = HashMap::new();
        let mut totals = vec![0usize; entries.len()];

        for (i, a) in entries.iter().enumerate() {
            for (j, b) in entries.iter().enumerate() {
                if i == j {
                    continue;
                }
                let mut hits = Vec::new();
                for (i_pos, ac) in a.word.bytes().enumerate() {
                    for (j_pos, bc) in b.word.bytes().enumerate() {
                        if ac == bc {
                            hits.push((i_pos, j_pos));
                        }
                    }
                }
                if !hits.is_empty() {
                    totals[i] += hits.len();
                    pairs.insert((i, j), hits);
                }
            }
        }

        Self { pairs, totals }
    }

    /// Coincidence list for the ordered pair `(i, j)`; empty when the two
    /// words share no letter.
    pub(crate) fn coincidences(&self, i: usize, j: usize) -> &[(usize, usize)] {
        self.pairs.get(&(i, j)).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn total(&self, i: usize) -> usize {
        self.totals[i]
    }
}
