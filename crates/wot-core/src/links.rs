// crates/wot-core/src/links.rs
//
// Link probability matrix: L(parent, child) edge weights of the Web of Trust.
//
// Each entry L(parent, child) is the strength of `parent`'s direct trust
// assertion about `child`. Entries are written during graph construction
// only and read by the trust algorithm.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A sparse link probability matrix keyed by parent, then child.
///
/// Unlike a plain trust lookup, an absent entry is not "zero": callers go
/// through [`crate::TrustGraph::link_probability`], which reports a missing
/// entry as an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkMatrix {
    /// Sparse entries: parent -> (child -> probability).
    pub entries: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LinkMatrix {
    /// Create a new empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the probability of the link from `parent` to `child`,
    /// replacing any previous value.
    pub fn set(&mut self, parent: &str, child: &str, probability: f64) {
        self.entries
            .entry(parent.to_string())
            .or_default()
            .insert(child.to_string(), probability);
    }

    /// Probability of the link from `parent` to `child`, if recorded.
    pub fn get(&self, parent: &str, child: &str) -> Option<f64> {
        self.entries.get(parent).and_then(|row| row.get(child)).copied()
    }

    /// Outgoing links of `parent`, ordered by child name.
    pub fn outgoing(&self, parent: &str) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries
            .get(parent)
            .into_iter()
            .flat_map(|row| row.iter().map(|(child, &p)| (child.as_str(), p)))
    }

    /// Every recorded link as (parent, child, probability), ordered by
    /// parent then child.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.entries.iter().flat_map(|(parent, row)| {
            row.iter()
                .map(move |(child, &p)| (parent.as_str(), child.as_str(), p))
        })
    }

    /// Number of recorded links.
    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
