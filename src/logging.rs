//! # Structured Logging Module
//!
//! Environment-aware structured logging for rule nodes, either human readable or
//! JSON lines for log shippers.

use crate::config::{current_environment, LoggingSettings};
use crate::models::RuleMessage;
use chrono::Utc;
use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging. Later calls are ignored.
pub fn init_structured_logging(settings: &LoggingSettings) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let environment = current_environment();
        let log_level = settings
            .level
            .clone()
            .unwrap_or_else(|| get_log_level(&environment).to_string());
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

        let layer = if settings.json {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .with_filter(filter)
                .boxed()
        } else {
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_level(true)
                .with_ansi(true)
                .with_filter(filter)
                .boxed()
        };

        // A host runtime may already own the global subscriber
        if tracing_subscriber::registry().with(layer).try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized - continuing with existing subscriber");
        }

        tracing::info!(
            environment = %environment,
            level = %log_level,
            json = settings.json,
            "STRUCTURED LOGGING: Initialized"
        );
    });
}

/// Get log level based on environment
fn get_log_level(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        _ => "debug",
    }
}

/// Log structured data for node operations
pub fn log_node_operation(
    operation: &str,
    node: &str,
    msg: Option<&RuleMessage>,
    status: &str,
    details: Option<&str>,
) {
    tracing::info!(
        operation = %operation,
        node = %node,
        msg_id = msg.map(|m| m.id().to_string()),
        originator = msg.map(|m| m.originator().to_string()),
        status = %status,
        details = details,
        timestamp = %Utc::now().to_rfc3339(),
        "NODE_OPERATION"
    );
}

/// Log error with full context
pub fn log_error(node: &str, operation: &str, error: &str, context: Option<&str>) {
    tracing::error!(
        node = %node,
        operation = %operation,
        error = %error,
        context = context,
        timestamp = %Utc::now().to_rfc3339(),
        "ERROR"
    );
}
