//! Dashboard configuration
//!
//! Parses an optional TOML file. Every key has a default, so an empty file
//! (or no file at all) yields the stock dashboard.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::dashboard::layout::{card_column_width, MIN_NAME_LENGTH};

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Runs examined for health and averaging (default: 5)
    #[serde(default = "default_max_runs")]
    pub max_runs: usize,
    /// Workflow names longer than this are truncated (default: 17)
    #[serde(default = "default_workflow_name_length")]
    pub workflow_name_length: usize,
    /// TTL passed to `gh api --cache` (default: 60m)
    #[serde(default = "default_api_cache")]
    pub api_cache: String,
    /// GitHub CLI program (default: gh)
    #[serde(default = "default_gh_binary")]
    pub gh_binary: String,
}

const fn default_max_runs() -> usize {
    5
}

const fn default_workflow_name_length() -> usize {
    17
}

fn default_api_cache() -> String {
    "60m".to_string()
}

fn default_gh_binary() -> String {
    "gh".to_string()
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            max_runs: default_max_runs(),
            workflow_name_length: default_workflow_name_length(),
            api_cache: default_api_cache(),
            gh_binary: default_gh_binary(),
        }
    }
}

impl DashboardConfig {
    /// Parse a configuration file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse configuration content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_path)
    }

    /// Width of one card column in the grid
    #[must_use]
    pub const fn card_width(&self) -> usize {
        card_column_width(self.workflow_name_length)
    }

    fn validate(&self) -> Result<()> {
        if self.max_runs == 0 {
            bail!("max_runs must be at least 1");
        }
        if self.workflow_name_length < MIN_NAME_LENGTH {
            bail!("workflow_name_length must be at least {MIN_NAME_LENGTH}");
        }
        if self.api_cache.trim().is_empty() {
            bail!("api_cache cannot be empty");
        }
        if self.gh_binary.trim().is_empty() {
            bail!("gh_binary cannot be empty");
        }
        Ok(())
    }
}
