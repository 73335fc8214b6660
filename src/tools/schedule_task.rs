use super::common::{optional_str, required_str};
use super::traits::Tool;
use super::types::ToolResult;
use crate::ipc::{ContextProvider, DropEntry, DropQueue, DropRequest};
use crate::schedule::{ContextMode, ScheduleType, validate_schedule};
use serde_json::json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const DESCRIPTION: &str = r#"Schedule a recurring or one-time task. The task will run as a full agent with access to all tools.

CONTEXT MODE - Choose based on task type:
- "group" (recommended for most tasks): Task runs in the group's conversation context, with access to chat history and memory.
- "isolated": Task runs in a fresh session with no conversation history.

SCHEDULE VALUE FORMAT (all times are LOCAL timezone):
- cron: Standard cron expression (e.g., "0 9 * * *" for daily at 9am LOCAL time)
- interval: Milliseconds between runs (e.g., "300000" for 5 minutes)
- once: Local time WITHOUT "Z" suffix (e.g., "2026-02-01T15:30:00")"#;

/// Validate a schedule request and queue it for the host scheduler.
pub struct ScheduleTaskTool {
    context: Arc<dyn ContextProvider>,
    queue: Arc<dyn DropQueue>,
}

impl ScheduleTaskTool {
    pub fn new(context: Arc<dyn ContextProvider>, queue: Arc<dyn DropQueue>) -> Self {
        Self { context, queue }
    }
}

impl Tool for ScheduleTaskTool {
    fn name(&self) -> &str {
        "schedule_task"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "prompt": {
                    "type": "string",
                    "description": "What the agent should do when the task runs"
                },
                "schedule_type": {
                    "type": "string",
                    "enum": ["cron", "interval", "once"],
                    "description": "cron=recurring at specific times, interval=recurring every N ms, once=run once"
                },
                "schedule_value": {
                    "type": "string",
                    "description": "cron: \"0 9 * * *\" | interval: milliseconds | once: local timestamp"
                },
                "context_mode": {
                    "type": "string",
                    "enum": ["group", "isolated"],
                    "default": "group",
                    "description": "group=runs with chat history, isolated=fresh session"
                },
                "target_group": {
                    "type": "string",
                    "description": "Target group folder (main only, defaults to current group)"
                }
            },
            "required": ["prompt", "schedule_type", "schedule_value"]
        })
    }

    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>> {
        Box::pin(async move {
            let prompt = required_str(&args, "prompt")?;
            let schedule_value = required_str(&args, "schedule_value")?;

            let schedule_type = match required_str(&args, "schedule_type")?.parse::<ScheduleType>()
            {
                Ok(schedule_type) => schedule_type,
                Err(rejection) => return Ok(ToolResult::rejected(rejection.to_string())),
            };
            let context_mode = match optional_str(&args, "context_mode")
                .map_or(Ok(ContextMode::default()), str::parse::<ContextMode>)
            {
                Ok(mode) => mode,
                Err(rejection) => return Ok(ToolResult::rejected(rejection.to_string())),
            };
            if let Err(rejection) = validate_schedule(schedule_type, schedule_value) {
                return Ok(ToolResult::rejected(rejection.to_string()));
            }

            let ctx = self.context.current()?;
            let requested_target = optional_str(&args, "target_group");
            let group_folder = match requested_target {
                Some(target) if ctx.is_main => target.to_string(),
                Some(target) => {
                    tracing::debug!(
                        requested = target,
                        caller = %ctx.group_folder,
                        "non-main caller asked for another group; scoping to caller"
                    );
                    ctx.group_folder.clone()
                }
                None => ctx.group_folder.clone(),
            };

            let entry = DropEntry::now(DropRequest::ScheduleTask {
                prompt: prompt.to_string(),
                schedule_type,
                schedule_value: schedule_value.to_string(),
                context_mode,
                group_folder,
                chat_jid: ctx.chat_jid,
                created_by: ctx.group_folder,
            });
            let filename = self.queue.enqueue(&entry)?;

            Ok(ToolResult::ok(format!(
                "Task scheduled ({filename}): {schedule_type} - {schedule_value}"
            )))
        })
    }
}
