//! # System Constants
//!
//! Names shared between rule nodes, the host runtime and configuration files.

/// Originator source literals accepted in node configuration
pub mod originator_sources {
    pub const CUSTOMER: &str = "CUSTOMER";
    pub const TENANT: &str = "TENANT";
    pub const RELATED: &str = "RELATED";
}

/// Relation names used when routing a processed message to the next node
pub mod relations {
    pub const SUCCESS: &str = "Success";
    pub const FAILURE: &str = "Failure";
}

/// Environment variables consulted by settings and logging
pub mod env_vars {
    pub const SETTINGS_PREFIX: &str = "RULE_ENGINE";
    pub const SETTINGS_SEPARATOR: &str = "__";
    pub const ENVIRONMENT: &str = "RULE_ENGINE_ENV";
    pub const APP_ENVIRONMENT: &str = "APP_ENV";
}

pub const DEFAULT_ENVIRONMENT: &str = "development";

// Node operation names used in structured logs
pub const OPERATION_INIT: &str = "init";
pub const OPERATION_TRANSFORM: &str = "transform";
