//! Tool Definition Macros
//!
//! Simplifies tool creation by reducing boilerplate

/// Define tool metadata using a declarative syntax
///
/// # Example
/// ```
/// let metadata = agentpro::tool_metadata! {
///     name: "slides",
///     description: "Build a slide deck for the query"
/// };
/// assert_eq!(metadata.name, "slides");
/// ```
#[macro_export]
macro_rules! tool_metadata {
    (
        name: $name:expr,
        description: $description:expr $(,)?
    ) => {
        $crate::tools::ToolMetadata {
            name: $name.to_string(),
            description: $description.to_string(),
        }
    };
}
