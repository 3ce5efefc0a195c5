// crates/wot-core/src/loader.rs
//
// Graph definition loader.
//
// Format:
//   line 1:       comma-separated list of every node name
//   then pairs:   a parent node name on its own line, followed by a
//                 comma-separated list of `child:probability` links
//
//   A,B,C
//   A
//   B:0.5
//   B
//   C:0.8
//
// Loading fails fast: the first malformed line aborts with its line number.

use std::fs;
use std::path::Path;

use crate::error::WotError;
use crate::graph::TrustGraph;

/// Read and parse a graph definition file.
pub fn load_graph(path: impl AsRef<Path>) -> Result<TrustGraph, WotError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| WotError::GraphLoad {
        line: 0,
        message: format!("cannot read '{}': {}", path.display(), e),
    })?;
    let graph = parse_graph(&contents)?;
    tracing::info!(
        "Loaded Web of Trust from {}: {} nodes, {} links",
        path.display(),
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Parse a graph definition from text.
pub fn parse_graph(text: &str) -> Result<TrustGraph, WotError> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim()));

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| load_error(1, "missing node list"))?;
    if header.is_empty() {
        return Err(load_error(header_line, "missing node list"));
    }
    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let mut graph =
        TrustGraph::build(names).map_err(|e| load_error(header_line, &e.to_string()))?;

    let mut pending_parent: Option<(usize, String)> = None;
    for (line_no, line) in lines {
        match pending_parent.take() {
            None => {
                // Blank separator lines between blocks are tolerated.
                if line.is_empty() {
                    continue;
                }
                if !graph.contains(line) {
                    return Err(load_error(line_no, &format!("unknown parent node '{}'", line)));
                }
                pending_parent = Some((line_no, line.to_string()));
            }
            Some((_, parent)) => {
                tracing::debug!("Reading links of {}", parent);
                parse_links(&mut graph, &parent, line, line_no)?;
            }
        }
    }

    if let Some((line_no, parent)) = pending_parent {
        return Err(load_error(
            line_no,
            &format!("parent node '{}' has no link line", parent),
        ));
    }

    Ok(graph)
}

/// Parse one `child:probability,...` line; an empty line means no links.
fn parse_links(
    graph: &mut TrustGraph,
    parent: &str,
    line: &str,
    line_no: usize,
) -> Result<(), WotError> {
    if line.is_empty() {
        return Ok(());
    }
    for link in line.split(',') {
        let (child, probability) = link
            .split_once(':')
            .ok_or_else(|| load_error(line_no, &format!("expected child:probability, got '{}'", link)))?;
        let child = child.trim();
        let probability: f64 = probability.trim().parse().map_err(|_| {
            load_error(
                line_no,
                &format!("invalid probability '{}' for link to '{}'", probability.trim(), child),
            )
        })?;
        graph
            .add_edge(parent, child, probability)
            .map_err(|e| load_error(line_no, &e.to_string()))?;
    }
    Ok(())
}

fn load_error(line: usize, message: &str) -> WotError {
    WotError::GraphLoad {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_of(err: WotError) -> usize {
        match err {
            WotError::GraphLoad { line, .. } => line,
            other => panic!("expected GraphLoad, got {other}"),
        }
    }

    #[test]
    fn parses_simple_graph() {
        let g = parse_graph("A,B,C\nA\nB:0.5\nB\nC:0.8\n").unwrap();
        assert_eq!(g.len(), 3);
        assert_eq!(g.edge_count(), 2);
        let b = g.node("B").unwrap();
        let c = g.node("C").unwrap();
        assert!((g.link_probability(b, c).unwrap() - 0.8).abs() < 1e-10);
    }

    #[test]
    fn parses_multiple_links_and_whitespace() {
        let g = parse_graph("A, B ,C,D\r\nA\r\nC:0.5, B:0.6\r\nB\r\nC:0.5\r\n\r\n").unwrap();
        assert_eq!(g.edge_count(), 3);
        let parents: Vec<&str> = g.node("C").unwrap().parents().collect();
        assert_eq!(parents, vec!["A", "B"]);
        assert!(g.node("D").unwrap().parents().next().is_none());
    }

    #[test]
    fn empty_link_line_means_no_links() {
        let g = parse_graph("A,B\nA\n\nB\nA:1.0\n").unwrap();
        assert_eq!(g.edge_count(), 1);
        assert!(g.node("A").unwrap().has_parent("B"));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(line_of(parse_graph("").unwrap_err()), 1);
    }

    #[test]
    fn duplicate_node_name_reports_header_line() {
        assert_eq!(line_of(parse_graph("A,B,A\n").unwrap_err()), 1);
    }

    #[test]
    fn unknown_parent_reports_line() {
        assert_eq!(line_of(parse_graph("A,B\nA\nB:0.5\nZ\nA:0.1\n").unwrap_err()), 4);
    }

    #[test]
    fn unknown_child_reports_line() {
        assert_eq!(line_of(parse_graph("A,B\nA\nX:0.5\n").unwrap_err()), 3);
    }

    #[test]
    fn malformed_probability_reports_line() {
        assert_eq!(line_of(parse_graph("A,B\nA\nB:high\n").unwrap_err()), 3);
        assert_eq!(line_of(parse_graph("A,B\nA\nB\n").unwrap_err()), 3);
    }

    #[test]
    fn out_of_range_probability_reports_line() {
        assert_eq!(line_of(parse_graph("A,B\nB\nA:1.2\n").unwrap_err()), 3);
    }

    #[test]
    fn dangling_parent_line_is_rejected() {
        assert_eq!(line_of(parse_graph("A,B\nA\nB:0.5\nB\n").unwrap_err()), 4);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let path = std::env::temp_dir().join("wot_loader_test_missing_file.txt");
        assert_eq!(line_of(load_graph(&path).unwrap_err()), 0);
    }

    #[test]
    fn loads_graph_from_file() {
        let path = std::env::temp_dir().join(format!("wot_loader_test_{}.txt", std::process::id()));
        fs::write(&path, "A,B\nA\nB:0.25\n").unwrap();
        let g = load_graph(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(g.edge_count(), 1);
    }
}
