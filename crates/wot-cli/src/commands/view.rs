// crates/wot-cli/src/commands/view.rs
//
// `wot view <source>` — trust of one node in every node of the graph.

use std::time::Instant;

use clap::Args;
use wot_reputation::WebOfTrust;

use crate::output::{format_json, format_table, view_rows, OutputFormat};

/// Full view command.
#[derive(Debug, Args)]
pub struct ViewCmd {
    /// Node whose view on the graph is computed.
    #[arg()]
    pub source: String,
}

/// Run the view command.
pub fn run(
    cmd: &ViewCmd,
    wot: &WebOfTrust,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    let view = wot.compute_all_trust_from(&cmd.source)?;
    let elapsed = start.elapsed();

    match format {
        OutputFormat::Table => {
            println!("View of {}:", view.owner());
            println!("{}", format_table(&view_rows(&view)));
            println!("Algorithm done in: {}ms", elapsed.as_millis());
        }
        OutputFormat::Json => {
            println!("{}", format_json(&view));
            // Keep stdout valid JSON.
            eprintln!("Algorithm done in: {}ms", elapsed.as_millis());
        }
    }

    Ok(())
}
