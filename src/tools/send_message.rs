use super::common::required_str;
use super::traits::Tool;
use super::types::ToolResult;
use crate::ipc::{ContextProvider, DropEntry, DropQueue, DropRequest};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Queue a chat message for the current group.
pub struct SendMessageTool {
    context: Arc<dyn ContextProvider>,
    queue: Arc<dyn DropQueue>,
}

impl SendMessageTool {
    pub fn new(context: Arc<dyn ContextProvider>, queue: Arc<dyn DropQueue>) -> Self {
        Self { context, queue }
    }
}

impl Tool for SendMessageTool {
    fn name(&self) -> &str {
        "send_message"
    }

    fn description(&self) -> &str {
        "Send a message to the current chat group. Use this to proactively share information or updates."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The message text to send"
                }
            },
            "required": ["text"]
        })
    }

    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>> {
        Box::pin(async move {
            let text = required_str(&args, "text")?;
            let ctx = self.context.current()?;

            let entry = DropEntry::now(DropRequest::Message {
                chat_jid: ctx.chat_jid,
                text: text.to_string(),
                group_folder: ctx.group_folder,
            });
            let filename = self.queue.enqueue(&entry)?;

            Ok(ToolResult::ok(format!(
                "Message queued for delivery ({filename})"
            )))
        })
    }
}
