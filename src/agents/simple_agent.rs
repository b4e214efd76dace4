//! Simple Agent - one-shot code generator stub
//!
//! Recognizes a single keyword and otherwise returns a placeholder. Nothing is
//! executed; the output is only text.

pub const FIBONACCI_SNIPPET: &str = "def fibonacci(n):\n    a, b = 0, 1\n    for _ in range(n):\n        yield a\n        a, b = b, a + b\n";

pub const PLACEHOLDER: &str = "# TODO: implement code generation logic here";

#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleAgent;

impl SimpleAgent {
    pub fn new() -> Self {
        Self
    }

    /// Produce code text for the prompt
    pub fn generate(&self, prompt: &str) -> String {
        tracing::info!("[SimpleAgent] Generating code for: {}", prompt);

        if prompt.to_lowercase().contains("fibonacci") {
            FIBONACCI_SNIPPET.to_string()
        } else {
            tracing::debug!("[SimpleAgent] No template matched, returning placeholder");
            PLACEHOLDER.to_string()
        }
    }
}
