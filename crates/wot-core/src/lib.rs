// crates/wot-core/src/lib.rs
//
// wot-core: Graph model, trust views, algorithm trait, and graph loader for
// the Web of Trust.
//
// This is the leaf crate of the workspace. It holds the data the trust
// algorithm operates on; it performs no trust computation itself.

pub mod error;
pub mod graph;
pub mod links;
pub mod loader;
pub mod traits;
pub mod view;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use wot_core::TrustGraph;`

pub use error::WotError;
pub use graph::{Node, TrustGraph};
pub use links::LinkMatrix;
pub use loader::{load_graph, parse_graph};
pub use traits::TrustAlgorithm;
pub use view::View;
