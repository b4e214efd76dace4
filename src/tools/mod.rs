//! Tool System - Named capabilities the router can delegate a prompt to
//!
//! Information Hiding:
//! - Tool payload construction hidden behind trait
//! - Result shapes unified behind `ToolOutput`
//! - Registry implementation details hidden from consumers

pub mod code_engine;
pub mod macros;
pub mod registry;
pub mod search;
pub mod slides;

pub use code_engine::CodeEngine;
pub use registry::ToolRegistry;
pub use search::SearchTool;
pub use slides::SlideTool;

use anyhow::Result;
use serde::Serialize;
use std::fmt;

/// Tool metadata - what the tool is called and what it does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolMetadata {
    pub name: String,
    pub description: String,
}

impl fmt::Display for ToolMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Structured search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub snippet: String,
    pub link: String,
}

/// Result of a tool invocation
///
/// Serialized untagged: text becomes a JSON string, a search hit becomes
/// `{"snippet": ..., "link": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    Text(String),
    Search(SearchResult),
}

impl ToolOutput {
    pub fn text(value: impl Into<String>) -> Self {
        ToolOutput::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ToolOutput::Text(text) => Some(text),
            ToolOutput::Search(_) => None,
        }
    }

    pub fn as_search(&self) -> Option<&SearchResult> {
        match self {
            ToolOutput::Search(result) => Some(result),
            ToolOutput::Text(_) => None,
        }
    }
}

impl fmt::Display for ToolOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolOutput::Text(text) => write!(f, "{}", text),
            ToolOutput::Search(result) => write!(f, "{} ({})", result.snippet, result.link),
        }
    }
}

/// Tool trait - All tools must implement this
///
/// Implementations are stateless: the same query always yields the same output
/// and a tool can be shared across callers without locking.
pub trait Tool: Send + Sync {
    /// Get tool metadata (name, description)
    fn metadata(&self) -> ToolMetadata;

    /// Registry key for this tool
    fn name(&self) -> String {
        self.metadata().name
    }

    /// Invoke the tool with the caller's query
    ///
    /// Failures are tool-specific and are not standardized by this trait.
    fn invoke(&self, query: &str) -> Result<ToolOutput>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_display() {
        let metadata = ToolMetadata {
            name: "search".to_string(),
            description: "Look things up".to_string(),
        };
        assert_eq!(metadata.to_string(), "search: Look things up");
    }

    #[test]
    fn test_output_serializes_untagged() {
        let text = serde_json::to_value(ToolOutput::text("hello")).unwrap();
        assert_eq!(text, serde_json::json!("hello"));

        let hit = ToolOutput::Search(SearchResult {
            snippet: "found".to_string(),
            link: "https://example.com".to_string(),
        });
        let value = serde_json::to_value(&hit).unwrap();
        assert_eq!(value["snippet"], "found");
        assert_eq!(value["link"], "https://example.com");
    }

    #[test]
    fn test_output_accessors() {
        let text = ToolOutput::text("deck");
        assert_eq!(text.as_text(), Some("deck"));
        assert!(text.as_search().is_none());
        assert_eq!(text.to_string(), "deck");
    }
}
