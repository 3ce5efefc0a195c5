// crates/wot-cli/src/commands/graph.rs
//
// `wot graph` — display the loaded Web of Trust.

use wot_core::TrustGraph;

use crate::output::{format_json, format_table, link_rows, OutputFormat};

/// Run the graph command.
pub fn run(graph: &TrustGraph, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Table => {
            let names: Vec<&str> = graph.node_names().collect();
            println!("Web of Trust: [{}]", names.join(", "));
            println!("Nodes: {}  |  Links: {}", graph.len(), graph.edge_count());
            println!();
            println!("{}", format_table(&link_rows(graph)));
        }
        OutputFormat::Json => println!("{}", format_json(graph)),
    }

    Ok(())
}
