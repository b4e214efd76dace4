//! Code generation stub

use super::{Tool, ToolMetadata, ToolOutput};
use anyhow::Result;

pub const NAME: &str = "code_engine";

/// Returns a canned "generated code" line embedding the query
#[derive(Debug, Default, Clone, Copy)]
pub struct CodeEngine;

impl CodeEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for CodeEngine {
    fn metadata(&self) -> ToolMetadata {
        crate::tool_metadata! {
            name: NAME,
            description: "Generate code, functions or algorithms for the request",
        }
    }

    fn invoke(&self, query: &str) -> Result<ToolOutput> {
        Ok(ToolOutput::Text(format!(
            "[CodeEngine] 🔧 Generated demo code for: “{}”",
            query
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_engine_embeds_query() {
        let output = CodeEngine::new().invoke("sort a list").unwrap();
        let text = output.as_text().unwrap();
        assert!(text.starts_with("[CodeEngine]"));
        assert!(text.contains("sort a list"));
    }

    #[test]
    fn test_code_engine_empty_query() {
        let output = CodeEngine::new().invoke("").unwrap();
        assert!(output.as_text().unwrap().contains("“”"));
    }
}
