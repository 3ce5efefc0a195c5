// crates/wot-cli/src/commands/trust.rs
//
// `wot trust <source> <target>` — trust of one node in another.

use clap::Args;
use serde::Serialize;
use wot_reputation::WebOfTrust;

use crate::output::{format_json, OutputFormat};

/// Single trust query command.
#[derive(Debug, Args)]
pub struct TrustCmd {
    /// Node that extends trust.
    #[arg()]
    pub source: String,

    /// Node that receives trust.
    #[arg()]
    pub target: String,
}

#[derive(Serialize)]
struct TrustAnswer<'a> {
    source: &'a str,
    target: &'a str,
    trust: f64,
}

/// Run the trust command.
pub fn run(
    cmd: &TrustCmd,
    wot: &WebOfTrust,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let trust = wot.compute_trust(&cmd.source, &cmd.target)?;

    match format {
        OutputFormat::Table => println!("Trust of {} in {}: {}", cmd.source, cmd.target, trust),
        OutputFormat::Json => println!(
            "{}",
            format_json(&TrustAnswer {
                source: &cmd.source,
                target: &cmd.target,
                trust,
            })
        ),
    }

    Ok(())
}
