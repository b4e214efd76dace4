//! Tool Registry
//!
//! Information Hiding:
//! - Tool storage and lookup implementation hidden
//! - Duplicate-name resolution hidden behind `register`

use super::{CodeEngine, SearchTool, SlideTool, Tool, ToolMetadata};
use std::collections::HashMap;
use std::sync::Arc;

/// Tool registry mapping tool names to shared tool instances
///
/// Registering a name twice keeps the later tool.
#[derive(Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Build a registry from an ordered list; later duplicates replace earlier ones
    pub fn from_tools(tools: impl IntoIterator<Item = Arc<dyn Tool>>) -> Self {
        let mut registry = Self::new();
        for tool in tools {
            registry.register(tool);
        }
        registry
    }

    /// Register a tool, replacing any tool already registered under the same name
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let name = tool.name();
        tracing::debug!("[ToolRegistry] Registering tool: {}", name);
        if self.tools.insert(name.clone(), tool).is_some() {
            tracing::warn!(
                tool = %name,
                "[ToolRegistry] Tool '{}' registered twice, keeping the later one",
                name
            );
        }
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All tool names, sorted
    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// All tool metadata, sorted by name
    pub fn list_tools(&self) -> Vec<ToolMetadata> {
        let mut tools: Vec<ToolMetadata> =
            self.tools.values().map(|tool| tool.metadata()).collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    /// Human-readable listing, one tool per line
    pub fn tools_description(&self) -> String {
        self.list_tools()
            .iter()
            .map(|metadata| format!("- {}", metadata))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Registry holding the three stub tools
    pub fn with_defaults() -> Self {
        Self::from_tools(default_tools())
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// The stub tools in the order the demo wires them: code, search, slides
pub fn default_tools() -> Vec<Arc<dyn Tool>> {
    vec![
        Arc::new(CodeEngine::new()),
        Arc::new(SearchTool::new()),
        Arc::new(SlideTool::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolOutput;

    struct FixedTool {
        name: &'static str,
        reply: &'static str,
    }

    impl Tool for FixedTool {
        fn metadata(&self) -> ToolMetadata {
            ToolMetadata {
                name: self.name.to_string(),
                description: "Fixed reply for testing".to_string(),
            }
        }

        fn invoke(&self, _query: &str) -> anyhow::Result<ToolOutput> {
            Ok(ToolOutput::text(self.reply))
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(Arc::new(SearchTool::new()));

        assert!(registry.has_tool("search"));
        assert!(registry.get("search").is_some());
        assert!(registry.get("nonexistent").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_registry_list_tools() {
        let registry = ToolRegistry::with_defaults();

        assert_eq!(
            registry.tool_names(),
            vec!["code_engine", "search", "slides"]
        );
        assert_eq!(registry.list_tools().len(), 3);
    }

    #[test]
    fn test_registry_last_duplicate_wins() {
        let registry = ToolRegistry::from_tools(vec![
            Arc::new(FixedTool { name: "search", reply: "first" }) as Arc<dyn Tool>,
            Arc::new(FixedTool { name: "search", reply: "second" }),
        ]);

        assert_eq!(registry.len(), 1);
        let output = registry.get("search").unwrap().invoke("q").unwrap();
        assert_eq!(output.as_text(), Some("second"));
    }

    #[test]
    fn test_tools_description() {
        let registry = ToolRegistry::with_defaults();
        let description = registry.tools_description();

        assert!(description.contains("- code_engine:"));
        assert!(description.contains("- search:"));
        assert!(description.contains("- slides:"));
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::default();
        assert!(registry.is_empty());
        assert!(registry.tool_names().is_empty());
    }
}
