//! Router Agent - Keyword-based Tool Selection and Delegation
//!
//! Implements the "one-way ticket" router pattern:
//! - Receives a prompt
//! - Picks exactly one tool with ordered, case-insensitive keyword rules
//! - Delegates the original prompt and returns the tool output untouched
//!
//! Information Hiding:
//! - Hides keyword matching and rule ordering
//! - Hides tool lookup
//! - Exposes a single `dispatch` entry point

use crate::error::{AgentError, Result};
use crate::tools::{code_engine, registry::ToolRegistry, search, slides, Tool, ToolOutput};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One routing rule: any keyword match selects `tool`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRule {
    pub tool: String,
    pub keywords: Vec<String>,
}

impl RouteRule {
    pub fn new(tool: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            tool: tool.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// `lowered_prompt` must already be lowercase
    fn matches(&self, lowered_prompt: &str) -> bool {
        self.keywords
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| lowered_prompt.contains(&keyword))
    }
}

/// Ordered keyword rules plus the tool used when nothing matches
///
/// Rules are checked in order and the first match wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoutingTable {
    pub rules: Vec<RouteRule>,
    pub fallback: String,
}

impl Default for RoutingTable {
    fn default() -> Self {
        Self {
            rules: vec![
                RouteRule::new(code_engine::NAME, &["code", "function", "algorithm"]),
                RouteRule::new(slides::NAME, &["slide", "visual"]),
            ],
            fallback: search::NAME.to_string(),
        }
    }
}

impl RoutingTable {
    /// Name of the tool this prompt routes to
    pub fn select(&self, prompt: &str) -> &str {
        let lowered = prompt.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.tool.as_str())
            .unwrap_or(self.fallback.as_str())
    }

    pub fn validate(&self) -> Result<()> {
        if self.fallback.trim().is_empty() {
            return Err(AgentError::Config(
                "fallback tool name cannot be empty".to_string(),
            ));
        }

        for (index, rule) in self.rules.iter().enumerate() {
            if rule.tool.trim().is_empty() {
                return Err(AgentError::Config(format!(
                    "rule {} has an empty tool name",
                    index
                )));
            }
            if rule.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(AgentError::Config(format!(
                    "rule {} for '{}' has no keywords",
                    index, rule.tool
                )));
            }
        }

        Ok(())
    }

    /// Every tool name the table can select
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.rules.iter().map(|rule| rule.tool.as_str()).collect();
        names.push(self.fallback.as_str());
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Router agent that selects one registered tool per prompt
#[derive(Clone)]
pub struct RouterAgent {
    registry: ToolRegistry,
    routing: RoutingTable,
}

impl RouterAgent {
    /// Build a router over `tools` with the default routing table
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self {
            registry: ToolRegistry::from_tools(tools),
            routing: RoutingTable::default(),
        }
    }

    /// Build a router with a custom routing table
    pub fn with_routing(tools: Vec<Arc<dyn Tool>>, routing: RoutingTable) -> Result<Self> {
        routing.validate()?;

        let router = Self {
            registry: ToolRegistry::from_tools(tools),
            routing,
        };

        for name in router.unregistered_tools() {
            tracing::warn!(
                tool = %name,
                "[RouterAgent] Routing table names '{}' but no such tool is registered",
                name
            );
        }

        Ok(router)
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn routing(&self) -> &RoutingTable {
        &self.routing
    }

    /// Tools the routing table (rules or fallback) can select that are not registered
    pub fn unregistered_tools(&self) -> Vec<&str> {
        self.routing
            .tool_names()
            .into_iter()
            .filter(|name| !self.registry.has_tool(name))
            .collect()
    }

    /// Resolve the tool a prompt routes to
    pub fn select_tool(&self, prompt: &str) -> Result<Arc<dyn Tool>> {
        let name = self.routing.select(prompt);
        self.registry
            .get(name)
            .ok_or_else(|| AgentError::MissingCapability {
                name: name.to_string(),
            })
    }

    /// Route a prompt to one tool and return its output unchanged
    pub fn dispatch(&self, prompt: &str) -> Result<ToolOutput> {
        let tool = self.select_tool(prompt)?;

        let name = tool.name();
        tracing::info!(tool = %name, "[RouterAgent] Delegating to {}", name);

        tool.invoke(prompt)
            .map_err(|source| AgentError::ToolFailed { name, source })
    }
}
