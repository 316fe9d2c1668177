//! Configuration for sighash cache construction
//!
//! Controls whether the three cached digests are computed concurrently.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// SigHash cache builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigHashConfig {
    /// Compute the three digests concurrently (requires the `parallel` feature)
    #[serde(default = "default_true")]
    pub parallel: bool,

    /// Minimum number of inputs plus outputs before going parallel.
    /// Small transactions hash faster than a thread handoff.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_true() -> bool {
    true
}

fn default_parallel_threshold() -> usize {
    64
}

impl Default for SigHashConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 64,
        }
    }
}

impl SigHashConfig {
    /// Configuration that never spawns work onto the thread pool
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let config: SigHashConfig =
            toml::from_str(s).context("Failed to parse sighash configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.parallel_threshold == 0 {
            return Err(anyhow::anyhow!(
                "parallel_threshold must be greater than 0"
            ));
        }

        Ok(())
    }

    /// Whether a transaction with `items` inputs plus outputs should be
    /// built in parallel
    pub fn use_parallel(&self, items: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && items >= self.parallel_threshold
    }
}
