//! Search stub

use super::{SearchResult, Tool, ToolMetadata, ToolOutput};
use anyhow::Result;

pub const NAME: &str = "search";
pub const PLACEHOLDER_LINK: &str = "https://example.com";

/// Returns a synthetic top hit for the query with a fixed link
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchTool;

impl SearchTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for SearchTool {
    fn metadata(&self) -> ToolMetadata {
        crate::tool_metadata! {
            name: NAME,
            description: "Look up a snippet and link for general questions",
        }
    }

    fn invoke(&self, query: &str) -> Result<ToolOutput> {
        Ok(ToolOutput::Search(SearchResult {
            snippet: format!("[Search] Top result for “{}”.", query),
            link: PLACEHOLDER_LINK.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_returns_snippet_and_link() {
        let output = SearchTool::new().invoke("weather in Lagos").unwrap();
        let hit = output.as_search().unwrap();
        assert!(hit.snippet.contains("weather in Lagos"));
        assert_eq!(hit.link, PLACEHOLDER_LINK);
    }

    #[test]
    fn test_search_is_deterministic() {
        let tool = SearchTool::new();
        assert_eq!(tool.invoke("rust").unwrap(), tool.invoke("rust").unwrap());
    }
}
