// crates/wot-cli/src/commands/mod.rs
//
// Command module declarations for the wot CLI.

pub mod graph;
pub mod trust;
pub mod view;
