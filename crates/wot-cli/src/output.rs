// crates/wot-cli/src/output.rs
//
// Output formatting utilities for the wot CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use wot_core::{TrustGraph, View};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// A row of a rendered view.
#[derive(Debug, Tabled)]
pub struct TrustRow {
    #[tabled(rename = "Node")]
    pub node: String,
    #[tabled(rename = "Trust")]
    pub trust: f64,
}

/// A row of a rendered graph.
#[derive(Debug, Tabled)]
pub struct LinkRow {
    #[tabled(rename = "Parent")]
    pub parent: String,
    #[tabled(rename = "Child")]
    pub child: String,
    #[tabled(rename = "Probability")]
    pub probability: f64,
}

/// One row per entry of the view, ordered by node name.
pub fn view_rows(view: &View) -> Vec<TrustRow> {
    view.iter()
        .map(|(node, trust)| TrustRow {
            node: node.to_string(),
            trust,
        })
        .collect()
}

/// One row per link of the graph, ordered by parent then child.
pub fn link_rows(graph: &TrustGraph) -> Vec<LinkRow> {
    graph
        .links()
        .iter()
        .map(|(parent, child, probability)| LinkRow {
            parent: parent.to_string(),
            child: child.to_string(),
            probability,
        })
        .collect()
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}
