use super::traits::Tool;
use super::types::ToolResult;
use crate::ipc::{ContextProvider, FileTaskSnapshot, TaskSnapshot};
use serde_json::json;
use std::fmt::Write;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

const NO_TASKS: &str = "No scheduled tasks found.";
const PROMPT_PREVIEW_CHARS: usize = 50;

/// Read-only view of the host's task snapshot, scoped to the caller.
pub struct ListTasksTool {
    context: Arc<dyn ContextProvider>,
    snapshot: FileTaskSnapshot,
}

impl ListTasksTool {
    pub fn new(context: Arc<dyn ContextProvider>, snapshot: FileTaskSnapshot) -> Self {
        Self { context, snapshot }
    }
}

fn render_task(task: &TaskSnapshot) -> String {
    let preview: String = task.prompt.chars().take(PROMPT_PREVIEW_CHARS).collect();
    format!(
        "- [{}] {preview}... ({}: {}) - {}, next: {}",
        task.id,
        task.schedule_type,
        task.schedule_value,
        task.status,
        task.next_run.as_deref().filter(|n| !n.is_empty()).unwrap_or("N/A"),
    )
}

impl Tool for ListTasksTool {
    fn name(&self) -> &str {
        "list_tasks"
    }

    fn description(&self) -> &str {
        "List all scheduled tasks. From main: shows all tasks. From other groups: shows only that group's tasks."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    fn execute<'a>(
        &'a self,
        _args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>> {
        Box::pin(async move {
            let ctx = self.context.current()?;
            let Some(all_tasks) = self.snapshot.load()? else {
                return Ok(ToolResult::ok(NO_TASKS));
            };

            let visible: Vec<&TaskSnapshot> = all_tasks
                .iter()
                .filter(|task| ctx.is_main || task.group_folder == ctx.group_folder)
                .collect();
            if visible.is_empty() {
                return Ok(ToolResult::ok(NO_TASKS));
            }

            let mut listing = String::from("Scheduled tasks:");
            for task in visible {
                let _ = write!(listing, "\n{}", render_task(task));
            }
            Ok(ToolResult::ok(listing))
        })
    }
}
