use super::common::required_str;
use super::traits::Tool;
use super::types::ToolResult;
use crate::ipc::{ContextProvider, DropEntry, DropQueue, DropRequest, GroupRegistration};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const MAIN_ONLY: &str = "Only the main group can register new groups.";

/// Ask the host to start serving a new chat group. Main group only.
pub struct RegisterGroupTool {
    context: Arc<dyn ContextProvider>,
    queue: Arc<dyn DropQueue>,
}

impl RegisterGroupTool {
    pub fn new(context: Arc<dyn ContextProvider>, queue: Arc<dyn DropQueue>) -> Self {
        Self { context, queue }
    }
}

impl Tool for RegisterGroupTool {
    fn name(&self) -> &str {
        "register_group"
    }

    fn description(&self) -> &str {
        "Register a new chat group so the agent can respond to messages there. Main group only. \
         Use available_groups.json to find the JID for a group."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "jid": {
                    "type": "string",
                    "description": "The chat JID (e.g., \"120363336345536173@g.us\")"
                },
                "name": {
                    "type": "string",
                    "description": "Display name for the group"
                },
                "folder": {
                    "type": "string",
                    "description": "Folder name for group files (lowercase, hyphens)"
                },
                "trigger": {
                    "type": "string",
                    "description": "Trigger word (e.g., \"@Andy\")"
                }
            },
            "required": ["jid", "name", "folder", "trigger"]
        })
    }

    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>> {
        Box::pin(async move {
            let ctx = self.context.current()?;
            if !ctx.is_main {
                tracing::info!(caller = %ctx.group_folder, "refused group registration from non-main group");
                return Ok(ToolResult::rejected(MAIN_ONLY));
            }

            let registration = GroupRegistration {
                jid: required_str(&args, "jid")?.to_string(),
                name: required_str(&args, "name")?.to_string(),
                folder: required_str(&args, "folder")?.to_string(),
                trigger: required_str(&args, "trigger")?.to_string(),
                group_folder: ctx.group_folder,
            };
            let reply = format!(
                "Group \"{}\" registered. It will start receiving messages immediately.",
                registration.name
            );
            self.queue
                .enqueue(&DropEntry::now(DropRequest::RegisterGroup(registration)))?;

            Ok(ToolResult::ok(reply))
        })
    }
}
