// crates/wot-core/src/graph.rs
//
// Graph model of the Web of Trust: named nodes, their parents, and the
// link probability matrix.
//
// The graph is built once (by the loader or by hand) and is read-only for
// the duration of every trust computation.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::WotError;
use crate::links::LinkMatrix;

/// A named entity of the Web of Trust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    name: String,
    /// Names of the nodes with a trust link into this node, ordered by name.
    parents: BTreeSet<String>,
}

impl Node {
    /// Create a node without parents.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: BTreeSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of this node's parents in lexicographic order.
    pub fn parents(&self) -> impl Iterator<Item = &str> + '_ {
        self.parents.iter().map(String::as_str)
    }

    pub fn has_parent(&self, name: &str) -> bool {
        self.parents.contains(name)
    }

    fn add_parent(&mut self, parent: &str) {
        if !self.parents.contains(parent) {
            self.parents.insert(parent.to_string());
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node {}", self.name)
    }
}

/// Directed Web-of-Trust graph.
///
/// Nodes are kept in lexicographic order of their names; every iteration
/// over the graph follows that order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrustGraph {
    nodes: BTreeMap<String, Node>,
    links: LinkMatrix,
}

impl TrustGraph {
    /// Build a graph containing the given nodes and no edges.
    ///
    /// Fails with [`WotError::MalformedGraph`] on an empty or duplicate name.
    pub fn build<I, S>(names: I) -> Result<Self, WotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut nodes = BTreeMap::new();
        for name in names {
            let name: String = name.into();
            if name.is_empty() {
                return Err(WotError::MalformedGraph("empty node name".to_string()));
            }
            if nodes.contains_key(&name) {
                return Err(WotError::MalformedGraph(format!(
                    "duplicate node name '{}'",
                    name
                )));
            }
            nodes.insert(name.clone(), Node::new(name));
        }
        Ok(Self {
            nodes,
            links: LinkMatrix::new(),
        })
    }

    /// Register `parent` as a parent of `child` with the given link
    /// probability.
    ///
    /// Adding an edge that already exists replaces its probability.
    /// Self-links are rejected: a node's trust in itself is fixed at 1.0.
    pub fn add_edge(&mut self, parent: &str, child: &str, probability: f64) -> Result<(), WotError> {
        self.require_node(parent, "add_edge")?;
        self.require_node(child, "add_edge")?;
        if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
            return Err(WotError::MalformedGraph(format!(
                "link probability {} from '{}' to '{}' is outside [0, 1]",
                probability, parent, child
            )));
        }
        if parent == child {
            return Err(WotError::MalformedGraph(format!(
                "self-link on '{}'",
                parent
            )));
        }

        if let Some(node) = self.nodes.get_mut(child) {
            node.add_parent(parent);
        }
        self.links.set(parent, child, probability);
        Ok(())
    }

    /// Look up a node by name.
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Look up a node by name, failing with [`WotError::UnknownNode`]
    /// tagged with `operation` when it is absent.
    pub fn require_node(&self, name: &str, operation: &str) -> Result<&Node, WotError> {
        self.nodes
            .get(name)
            .ok_or_else(|| WotError::unknown_node(name, operation))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Parents of `name`, ordered by name.
    pub fn parents_of(&self, name: &str) -> Result<Vec<&Node>, WotError> {
        let node = self.require_node(name, "parents_of")?;
        node.parents()
            .map(|parent| self.require_node(parent, "parents_of"))
            .collect()
    }

    /// Probability of the link from `parent` to `child`.
    ///
    /// Fails with [`WotError::MissingLink`] if `parent` is not a recorded
    /// parent of `child`.
    pub fn link_probability(&self, parent: &Node, child: &Node) -> Result<f64, WotError> {
        self.links
            .get(parent.name(), child.name())
            .ok_or_else(|| WotError::MissingLink {
                parent: parent.name().to_string(),
                child: child.name().to_string(),
            })
    }

    /// All nodes in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    /// All node names in lexicographic order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.keys().map(String::as_str)
    }

    pub fn links(&self) -> &LinkMatrix {
        &self.links
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed links.
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }
}

impl fmt::Display for TrustGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.node_names().collect();
        writeln!(f, "Web of Trust: [{}]", names.join(", "))?;
        for node in self.nodes() {
            let links: Vec<String> = self
                .links
                .outgoing(node.name())
                .map(|(child, p)| format!("{}: {}", child, p))
                .collect();
            if !links.is_empty() {
                writeln!(f, "{} -> {}", node.name(), links.join(", "))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> TrustGraph {
        let mut g = TrustGraph::build(["A", "B", "C"]).unwrap();
        g.add_edge("A", "B", 0.5).unwrap();
        g.add_edge("B", "C", 0.8).unwrap();
        g
    }

    #[test]
    fn build_orders_nodes_by_name() {
        let g = TrustGraph::build(["C", "A", "B"]).unwrap();
        let names: Vec<&str> = g.node_names().collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn build_rejects_duplicate_names() {
        let err = TrustGraph::build(["A", "B", "A"]).unwrap_err();
        assert!(matches!(err, WotError::MalformedGraph(_)));
    }

    #[test]
    fn build_rejects_empty_name() {
        let err = TrustGraph::build(["A", ""]).unwrap_err();
        assert!(matches!(err, WotError::MalformedGraph(_)));
    }

    #[test]
    fn add_edge_records_parent_and_probability() {
        let g = abc();
        let parents: Vec<&str> = g.parents_of("C").unwrap().iter().map(|n| n.name()).collect();
        assert_eq!(parents, vec!["B"]);
        let b = g.node("B").unwrap();
        let c = g.node("C").unwrap();
        assert!((g.link_probability(b, c).unwrap() - 0.8).abs() < 1e-10);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn parents_are_ordered_by_name() {
        let mut g = TrustGraph::build(["A", "B", "C", "D"]).unwrap();
        g.add_edge("C", "D", 0.1).unwrap();
        g.add_edge("A", "D", 0.2).unwrap();
        g.add_edge("B", "D", 0.3).unwrap();
        let parents: Vec<&str> = g.node("D").unwrap().parents().collect();
        assert_eq!(parents, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicate_edge_replaces_probability() {
        let mut g = abc();
        g.add_edge("A", "B", 0.9).unwrap();
        assert_eq!(g.node("B").unwrap().parents().count(), 1);
        let a = g.node("A").unwrap();
        let b = g.node("B").unwrap();
        assert!((g.link_probability(a, b).unwrap() - 0.9).abs() < 1e-10);
    }

    #[test]
    fn add_edge_rejects_out_of_range_probability() {
        let mut g = abc();
        for p in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = g.add_edge("A", "C", p).unwrap_err();
            assert!(matches!(err, WotError::MalformedGraph(_)), "p = {}", p);
        }
        assert!(!g.node("C").unwrap().has_parent("A"));
    }

    #[test]
    fn add_edge_accepts_bounds() {
        let mut g = abc();
        g.add_edge("A", "C", 0.0).unwrap();
        g.add_edge("C", "A", 1.0).unwrap();
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn add_edge_rejects_unknown_nodes() {
        let mut g = abc();
        let err = g.add_edge("A", "Z", 0.5).unwrap_err();
        match err {
            WotError::UnknownNode { name, operation } => {
                assert_eq!(name, "Z");
                assert_eq!(operation, "add_edge");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn add_edge_rejects_self_link() {
        let mut g = abc();
        let err = g.add_edge("B", "B", 0.5).unwrap_err();
        assert!(matches!(err, WotError::MalformedGraph(_)));
    }

    #[test]
    fn missing_link_is_an_error() {
        let g = abc();
        let a = g.node("A").unwrap();
        let c = g.node("C").unwrap();
        let err = g.link_probability(a, c).unwrap_err();
        assert!(matches!(err, WotError::MissingLink { .. }));
    }

    #[test]
    fn display_lists_nodes_and_links() {
        let g = abc();
        let text = g.to_string();
        assert_eq!(text, "Web of Trust: [A, B, C]\nA -> B: 0.5\nB -> C: 0.8\n");
    }
}
