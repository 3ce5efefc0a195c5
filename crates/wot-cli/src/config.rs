// crates/wot-cli/src/config.rs
//
// Runtime configuration for the wot CLI.
// Loaded from a TOML file or populated with sensible defaults.

use serde::Deserialize;
use std::fs;

use wot_core::WotError;
use wot_reputation::CaronniConfig;

/// Runtime configuration for the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WotConfig {
    /// Path to the graph definition file.
    #[serde(default = "default_graph_path")]
    pub graph_path: String,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Abort a query whose recursion goes deeper than this.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Abort a query after this many recursive evaluations.
    #[serde(default)]
    pub max_evaluations: Option<u64>,

    /// Evaluate the targets of a full view in parallel.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_graph_path() -> String {
    "data/input_simple1".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_parallel() -> bool {
    true
}

impl Default for WotConfig {
    fn default() -> Self {
        Self {
            graph_path: default_graph_path(),
            log_level: default_log_level(),
            max_depth: None,
            max_evaluations: None,
            parallel: default_parallel(),
        }
    }
}

impl WotConfig {
    /// Load configuration from a TOML file at the given path.
    pub fn load(path: &str) -> Result<Self, WotError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| WotError::Config(format!("cannot read '{}': {}", path, e)))?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, WotError> {
        toml::from_str(contents).map_err(|e| WotError::Config(e.to_string()))
    }

    /// Recursion guards for the Caronni algorithm.
    pub fn caronni_config(&self) -> CaronniConfig {
        CaronniConfig {
            max_depth: self.max_depth,
            max_evaluations: self.max_evaluations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = WotConfig::from_toml("").unwrap();
        assert_eq!(config, WotConfig::default());
        assert_eq!(config.caronni_config(), CaronniConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config = WotConfig::from_toml(
            "graph_path = \"graphs/office\"\nmax_depth = 8\nmax_evaluations = 100000\nparallel = false\n",
        )
        .unwrap();
        assert_eq!(config.graph_path, "graphs/office");
        assert_eq!(config.log_level, "info");
        assert!(!config.parallel);
        assert_eq!(
            config.caronni_config(),
            CaronniConfig {
                max_depth: Some(8),
                max_evaluations: Some(100_000),
            }
        );
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = WotConfig::from_toml("max_depth = \"deep\"").unwrap_err();
        assert!(matches!(err, WotError::Config(_)));
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = WotConfig::load("/nonexistent/wot.toml").unwrap_err();
        assert!(matches!(err, WotError::Config(_)));
    }
}
