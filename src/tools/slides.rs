//! Slide deck stub

use super::{Tool, ToolMetadata, ToolOutput};
use anyhow::Result;

pub const NAME: &str = "slides";

#[derive(Debug, Default, Clone, Copy)]
pub struct SlideTool;

impl SlideTool {
    pub fn new() -> Self {
        Self
    }
}

impl Tool for SlideTool {
    fn metadata(&self) -> ToolMetadata {
        crate::tool_metadata! {
            name: NAME,
            description: "Create a slide deck or visual summary",
        }
    }

    fn invoke(&self, query: &str) -> Result<ToolOutput> {
        Ok(ToolOutput::Text(format!(
            "[Slides] 📊 Dummy slide deck created for: “{}”",
            query
        )))
    }
}
