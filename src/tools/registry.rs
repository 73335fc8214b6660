use super::traits::Tool;
use super::types::{ToolResult, ToolSpec};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Central registry for the request tools exposed to the agent.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool. Replaces any existing tool with the same name.
    pub fn register(&mut self, tool: Box<dyn Tool>) {
        let tool: Arc<dyn Tool> = Arc::from(tool);
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Look up a tool by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.tools.get(name)
    }

    /// Return sorted list of registered tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Return specs for all registered tools, ordered by name.
    pub fn specs(&self) -> Vec<ToolSpec> {
        let mut specs: Vec<ToolSpec> = self.tools.values().map(|tool| tool.spec()).collect();
        specs.sort_by(|a, b| a.name.cmp(&b.name));
        specs
    }

    /// Execute a tool by name.
    ///
    /// Never fails: unknown tools and plumbing errors both come back as an
    /// unsuccessful result so the agent always gets a reply.
    pub async fn execute(&self, name: &str, args: Value) -> ToolResult {
        let Some(tool) = self.tools.get(name) else {
            return ToolResult::rejected(format!("Tool not found: {name}"));
        };

        match tool.execute(args).await {
            Ok(result) => {
                tracing::debug!(tool = name, success = result.success, "tool finished");
                result
            }
            Err(error) => {
                tracing::warn!(tool = name, "tool failed: {error:#}");
                ToolResult::rejected(format!("{error:#}"))
            }
        }
    }

    /// Execute and flatten to the text the agent sees.
    pub async fn invoke(&self, name: &str, args: Value) -> String {
        self.execute(name, args).await.into_agent_text()
    }
}
