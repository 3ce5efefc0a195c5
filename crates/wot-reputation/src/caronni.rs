// crates/wot-reputation/src/caronni.rs
//
// Caronni trust propagation rule.
//
// The trust of a source in a target combines one contribution per parent of
// the target. A direct link from the source contributes its probability; any
// other parent contributes (trust in that parent) * (link probability), where
// trust in the parent is computed recursively in a network with the target
// removed. Contributions are merged with a probabilistic OR.

use serde::{Deserialize, Serialize};
use wot_core::{Node, TrustAlgorithm, TrustGraph, View, WotError};

/// Guards against runaway recursion. Both default to unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaronniConfig {
    /// Maximum recursion depth below the top-level query.
    pub max_depth: Option<usize>,
    /// Maximum number of recursive evaluations per top-level query.
    pub max_evaluations: Option<u64>,
}

/// Merge two independent trust contributions: `1 - (1 - a)(1 - b)`.
pub fn probabilistic_or(a: f64, b: f64) -> f64 {
    1.0 - (1.0 - a) * (1.0 - b)
}

/// The Caronni recursive trust combination rule.
#[derive(Debug, Clone, Default)]
pub struct Caronni {
    config: CaronniConfig,
}

/// Per-query evaluation counter.
struct Budget {
    evaluations: u64,
}

impl Caronni {
    /// Create the algorithm without recursion guards.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CaronniConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CaronniConfig {
        &self.config
    }

    fn evaluate(
        &self,
        graph: &TrustGraph,
        view: &mut View,
        source: &Node,
        target: &Node,
        depth: usize,
        budget: &mut Budget,
    ) -> Result<f64, WotError> {
        budget.evaluations += 1;
        self.check_guards(source, target, depth, budget)?;

        // Filtered once: later parents see the accumulated value written by
        // earlier ones, but the candidate list itself does not change.
        let parents: Vec<&Node> = graph
            .parents_of(target.name())?
            .into_iter()
            .filter(|parent| view.contains(parent.name()))
            .collect();

        for parent in parents {
            let link = graph.link_probability(parent, target)?;
            let accumulated = trust_in(view, target);

            let new_trust = if parent.name() == source.name() {
                probabilistic_or(trust_in(view, source) * link, accumulated)
            } else {
                // Only the branch copy loses the target, which keeps cycles
                // through the target out of this descent.
                let mut branch = view.copy();
                branch.remove(target.name());
                let trust_in_parent =
                    self.evaluate(graph, &mut branch, source, parent, depth + 1, budget)?;
                probabilistic_or(trust_in_parent * link, accumulated)
            };

            view.set(target.name(), new_trust);
        }

        Ok(trust_in(view, target))
    }

    fn check_guards(
        &self,
        source: &Node,
        target: &Node,
        depth: usize,
        budget: &Budget,
    ) -> Result<(), WotError> {
        let reason = match (self.config.max_depth, self.config.max_evaluations) {
            (Some(max), _) if depth > max => {
                Some(format!("recursion depth {} exceeds limit {}", depth, max))
            }
            (_, Some(max)) if budget.evaluations > max => Some(format!(
                "{} recursive evaluations exceed limit {}",
                budget.evaluations, max
            )),
            _ => None,
        };

        match reason {
            Some(reason) => {
                tracing::warn!(
                    "Aborting trust computation {} -> {}: {}",
                    source.name(),
                    target.name(),
                    reason
                );
                Err(WotError::ComputationAborted {
                    from: source.name().to_string(),
                    to: target.name().to_string(),
                    reason,
                })
            }
            None => Ok(()),
        }
    }
}

/// Current estimate for `node`; an untracked node carries no trust.
fn trust_in(view: &View, node: &Node) -> f64 {
    view.get(node.name()).unwrap_or(0.0)
}

impl TrustAlgorithm for Caronni {
    fn name(&self) -> &str {
        "caronni"
    }

    fn trust(
        &self,
        graph: &TrustGraph,
        view: &mut View,
        source: &Node,
        target: &Node,
    ) -> Result<f64, WotError> {
        let mut budget = Budget { evaluations: 0 };
        let trust = self.evaluate(graph, view, source, target, 0, &mut budget)?;
        tracing::debug!(
            "Caronni trust {} -> {} = {} ({} evaluations)",
            source.name(),
            target.name(),
            trust,
            budget.evaluations
        );
        Ok(trust)
    }
}
