//! AgentPro - keyword-routed tool orchestration
//!
//! A router inspects each prompt and hands it to exactly one registered tool.
//! The bundled tools, the one-shot generator and the chat loop are stubs that
//! produce deterministic text without any I/O.

pub mod agents;
mod config;
pub mod error;
pub mod tools;
pub mod utils;

pub mod cli;

pub use agents::{ChatBot, LineSource, RouteRule, RouterAgent, RoutingTable, SimpleAgent};
pub use config::{LoggingConfig, Settings};
pub use error::AgentError;
pub use tools::{
    CodeEngine, SearchResult, SearchTool, SlideTool, Tool, ToolMetadata, ToolOutput, ToolRegistry,
};
