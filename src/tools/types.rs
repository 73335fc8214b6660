use serde::{Deserialize, Serialize};

/// Result of a tool execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResult {
    pub success: bool,
    pub output: String,
    pub error: Option<String>,
}

impl ToolResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            error: None,
        }
    }

    /// A refusal or validation rejection the agent can act on.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            error: Some(reason.into()),
        }
    }

    /// The single string handed back to the agent, whatever the outcome.
    pub fn into_agent_text(self) -> String {
        if self.success {
            return self.output;
        }
        match self.error {
            Some(error) if !error.is_empty() => error,
            _ if !self.output.is_empty() => self.output,
            _ => "Tool failed without a message.".to_string(),
        }
    }
}

/// Description of a tool for the agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSpec {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}
