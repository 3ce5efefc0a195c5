// crates/wot-core/src/view.rs
//
// Trust view: one source node's current trust estimate toward every other
// node of the Web of Trust.
//
// A view is created per query and mutated by the trust algorithm while it
// recurses. Entries can be removed to hide a node from parent filtering and
// the whole view can be copied so a recursive branch does not see the
// mutations of its siblings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Trust estimates of `owner` toward other nodes, ordered by node name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    owner: String,
    trust: BTreeMap<String, f64>,
}

impl View {
    /// Create an empty view owned by `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            trust: BTreeMap::new(),
        }
    }

    /// Seed a view for a query from `source`: the source trusts itself fully
    /// and every other known node not at all.
    pub fn initialize<'a, I>(source: &str, names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut view = Self::new(source);
        for name in names {
            let value = if name == source { 1.0 } else { 0.0 };
            view.set(name, value);
        }
        view.set(source, 1.0);
        view
    }

    /// Name of the node whose perspective this view represents.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Current estimate for `name`, or `None` if it was removed or never set.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.trust.get(name).copied()
    }

    /// Overwrite the estimate for `name`.
    pub fn set(&mut self, name: &str, value: f64) {
        match self.trust.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.trust.insert(name.to_string(), value);
            }
        }
    }

    /// Delete the entry for `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.trust.remove(name)
    }

    /// Independent snapshot of this view.
    pub fn copy(&self) -> View {
        self.clone()
    }

    /// Whether `name` is currently tracked by this view.
    pub fn contains(&self, name: &str) -> bool {
        self.trust.contains_key(name)
    }

    /// Names currently present in the view, in lexicographic order.
    pub fn known_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.trust.keys().map(String::as_str)
    }

    /// (name, trust) pairs in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.trust.iter().map(|(name, &value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.trust.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trust.is_empty()
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "View of {}:", self.owner)?;
        for (name, value) in self.iter() {
            writeln!(f, "\tTrust in {}: {}", name, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_seeds_source_with_full_trust() {
        let view = View::initialize("B", ["A", "B", "C"]);
        assert_eq!(view.owner(), "B");
        assert_eq!(view.get("A"), Some(0.0));
        assert_eq!(view.get("B"), Some(1.0));
        assert_eq!(view.get("C"), Some(0.0));
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn unknown_name_is_absent() {
        let view = View::initialize("A", ["A"]);
        assert_eq!(view.get("Z"), None);
        assert!(!view.contains("Z"));
    }

    #[test]
    fn remove_returns_previous_value() {
        let mut view = View::initialize("A", ["A", "B"]);
        view.set("B", 0.25);
        assert_eq!(view.remove("B"), Some(0.25));
        assert_eq!(view.get("B"), None);
        assert_eq!(view.remove("B"), None);
        let names: Vec<&str> = view.known_names().collect();
        assert_eq!(names, vec!["A"]);
    }

    #[test]
    fn copy_is_independent() {
        let mut original = View::initialize("A", ["A", "B", "C"]);
        let mut copy = original.copy();
        copy.remove("C");
        copy.set("B", 0.7);
        original.set("C", 0.3);

        assert_eq!(original.get("B"), Some(0.0));
        assert_eq!(original.get("C"), Some(0.3));
        assert_eq!(copy.get("B"), Some(0.7));
        assert_eq!(copy.get("C"), None);
    }

    #[test]
    fn known_names_are_sorted() {
        let mut view = View::new("A");
        view.set("C", 0.0);
        view.set("A", 1.0);
        view.set("B", 0.0);
        let names: Vec<&str> = view.known_names().collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn display_lists_every_entry() {
        let mut view = View::initialize("A", ["A", "B"]);
        view.set("B", 0.5);
        assert_eq!(
            view.to_string(),
            "View of A:\n\tTrust in A: 1\n\tTrust in B: 0.5\n"
        );
    }
}
