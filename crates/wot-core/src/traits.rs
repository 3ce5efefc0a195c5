// crates/wot-core/src/traits.rs

use crate::error::WotError;
use crate::graph::{Node, TrustGraph};
use crate::view::View;

/// Trait for trust propagation rules over a [`TrustGraph`].
///
/// Implemented by wot-reputation (Caronni rule).
pub trait TrustAlgorithm: Send + Sync {
    /// Name of the algorithm (for logging).
    fn name(&self) -> &str;

    /// Calculate the trust of `source` into `target`.
    ///
    /// `view` is the caller's current view on the graph. For a top-level
    /// query it is seeded with 1.0 for `source` and 0.0 for every other
    /// node; implementations may mutate it while they work.
    fn trust(
        &self,
        graph: &TrustGraph,
        view: &mut View,
        source: &Node,
        target: &Node,
    ) -> Result<f64, WotError>;
}
