use super::types::{ToolResult, ToolSpec};
use std::future::Future;
use std::pin::Pin;

/// Core tool trait: one request the agent can make of the host
pub trait Tool: Send + Sync {
    /// Tool name (used in agent function calling)
    fn name(&self) -> &str;

    /// Human-readable description
    fn description(&self) -> &str;

    /// JSON schema for parameters
    fn parameters_schema(&self) -> serde_json::Value;

    /// Execute the tool with given arguments.
    ///
    /// `Err` is reserved for plumbing failures; expected refusals come back as
    /// an unsuccessful [`ToolResult`].
    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>>;

    /// Get the full spec for agent registration
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            parameters: self.parameters_schema(),
        }
    }
}
