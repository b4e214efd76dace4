//! Error types for the orchestration layer

use thiserror::Error;

/// Errors surfaced by the router and its configuration
#[derive(Debug, Error)]
pub enum AgentError {
    /// The router selected a tool that was never registered
    #[error("missing capability: no tool named '{name}' is registered")]
    MissingCapability { name: String },

    /// A registered tool returned an error while handling the query
    #[error("tool '{name}' failed: {source}")]
    ToolFailed {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("invalid routing configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AgentError>;
