// crates/wot-reputation/src/web_of_trust.rs
//
// Web-of-Trust container: owns the graph and the trust algorithm, seeds a
// fresh view for every query and assembles full views of a source.

use rayon::prelude::*;
use wot_core::{TrustAlgorithm, TrustGraph, View, WotError};

use crate::caronni::Caronni;

/// A Web of Trust ready to answer trust queries.
///
/// Every query owns its view, so queries never observe each other and
/// [`WebOfTrust::compute_all_trust_from`] may evaluate targets in parallel.
pub struct WebOfTrust {
    graph: TrustGraph,
    algorithm: Box<dyn TrustAlgorithm>,
    parallel: bool,
}

impl WebOfTrust {
    /// Wrap a graph with the default Caronni algorithm.
    pub fn new(graph: TrustGraph) -> Self {
        Self::with_algorithm(graph, Box::new(Caronni::new()))
    }

    /// Wrap a graph with a specific trust algorithm.
    pub fn with_algorithm(graph: TrustGraph, algorithm: Box<dyn TrustAlgorithm>) -> Self {
        Self {
            graph,
            algorithm,
            parallel: false,
        }
    }

    /// Evaluate the targets of a full view on the rayon thread pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn graph(&self) -> &TrustGraph {
        &self.graph
    }

    pub fn algorithm_name(&self) -> &str {
        self.algorithm.name()
    }

    /// Trust of `source` into `target`, computed on a freshly seeded view.
    pub fn compute_trust(&self, source: &str, target: &str) -> Result<f64, WotError> {
        let source_node = self.graph.require_node(source, "compute_trust")?;
        let target_node = self.graph.require_node(target, "compute_trust")?;

        let mut view = View::initialize(source, self.graph.node_names());
        let trust = self
            .algorithm
            .trust(&self.graph, &mut view, source_node, target_node)?;
        tracing::debug!("Trust of {} in {}: {}", source, target, trust);
        Ok(trust)
    }

    /// View of `source` on every node of the graph, itself included.
    ///
    /// Each target is an independent full computation; no intermediate
    /// result is shared between targets.
    pub fn compute_all_trust_from(&self, source: &str) -> Result<View, WotError> {
        self.graph.require_node(source, "compute_all_trust_from")?;

        let targets: Vec<&str> = self.graph.node_names().collect();
        let results: Vec<(&str, f64)> = if self.parallel {
            targets
                .par_iter()
                .map(|&target| self.compute_trust(source, target).map(|t| (target, t)))
                .collect::<Result<_, _>>()?
        } else {
            targets
                .iter()
                .map(|&target| self.compute_trust(source, target).map(|t| (target, t)))
                .collect::<Result<_, _>>()?
        };

        let mut view = View::new(source);
        for (target, trust) in results {
            view.set(target, trust);
        }
        tracing::info!(
            "Computed view of {} over {} nodes with {}",
            source,
            view.len(),
            self.algorithm.name()
        );
        Ok(view)
    }
}
