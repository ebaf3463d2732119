//! # Rule Engine Settings
//!
//! Settings for a process hosting rule nodes: the environment name, logging
//! options, and the node definitions to instantiate. Values come from an optional
//! settings file (TOML, YAML or JSON, chosen by extension) overlaid with
//! `RULE_ENGINE__*` environment variables.
//!
//! ```toml
//! environment = "production"
//!
//! [logging]
//! level = "info"
//! json = true
//!
//! [[nodes]]
//! name = "to tenant"
//! type = "change originator"
//! configuration = { originator_source = "TENANT" }
//! ```

use crate::constants::{env_vars, DEFAULT_ENVIRONMENT};
use crate::error::RuleNodeResult;
use crate::node::NodeConfiguration;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleEngineSettings {
    #[serde(default = "current_environment")]
    pub environment: String,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub nodes: Vec<NodeDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Filter directive, e.g. `info` or `rule_node_core=debug`
    #[serde(default)]
    pub level: Option<String>,
    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

/// A single node as declared in settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub configuration: serde_json::Value,
}

impl NodeDefinition {
    pub fn node_configuration(&self) -> NodeConfiguration {
        NodeConfiguration::new(self.configuration.clone())
    }
}

impl Default for RuleEngineSettings {
    fn default() -> Self {
        Self {
            environment: current_environment(),
            logging: LoggingSettings::default(),
            nodes: Vec::new(),
        }
    }
}

impl RuleEngineSettings {
    /// Load settings from environment variables only
    pub fn from_env() -> RuleNodeResult<Self> {
        Self::load(None)
    }

    /// Load settings from `path`, overlaid with environment variables
    pub fn from_file(path: impl AsRef<Path>) -> RuleNodeResult<Self> {
        Self::load(Some(path.as_ref()))
    }

    fn load(path: Option<&Path>) -> RuleNodeResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            debug!(path = %path.display(), "Loading rule engine settings file");
            builder = builder.add_source(File::from(path).required(true));
        }
        builder = builder.add_source(
            Environment::with_prefix(env_vars::SETTINGS_PREFIX)
                .prefix_separator(env_vars::SETTINGS_SEPARATOR)
                .separator(env_vars::SETTINGS_SEPARATOR),
        );

        let settings: RuleEngineSettings = builder.build()?.try_deserialize()?;
        info!(
            environment = %settings.environment,
            nodes = settings.nodes.len(),
            "Loaded rule engine settings"
        );
        Ok(settings)
    }
}

/// Current environment name from environment variables
pub fn current_environment() -> String {
    environment_from(|key| std::env::var(key).ok())
}

fn environment_from(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(env_vars::ENVIRONMENT)
        .or_else(|| lookup(env_vars::APP_ENVIRONMENT))
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string())
}
