use super::common::{required_str, task_id_schema};
use super::traits::Tool;
use super::types::ToolResult;
use crate::ipc::{ContextProvider, DropEntry, DropQueue, DropRequest, TaskRef};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleAction {
    Pause,
    Resume,
    Cancel,
}

impl LifecycleAction {
    fn request(self, task: TaskRef) -> DropRequest {
        match self {
            Self::Pause => DropRequest::PauseTask(task),
            Self::Resume => DropRequest::ResumeTask(task),
            Self::Cancel => DropRequest::CancelTask(task),
        }
    }

    fn acknowledgement(self) -> &'static str {
        match self {
            Self::Pause => "pause requested",
            Self::Resume => "resume requested",
            Self::Cancel => "cancellation requested",
        }
    }
}

/// Pause, resume or cancel a task by id.
///
/// Carries the caller's group and main flag; whether the caller may touch
/// that task is decided by the host.
pub struct TaskLifecycleTool {
    action: LifecycleAction,
    context: Arc<dyn ContextProvider>,
    queue: Arc<dyn DropQueue>,
}

impl TaskLifecycleTool {
    pub fn new(
        action: LifecycleAction,
        context: Arc<dyn ContextProvider>,
        queue: Arc<dyn DropQueue>,
    ) -> Self {
        Self {
            action,
            context,
            queue,
        }
    }
}

impl Tool for TaskLifecycleTool {
    fn name(&self) -> &str {
        match self.action {
            LifecycleAction::Pause => "pause_task",
            LifecycleAction::Resume => "resume_task",
            LifecycleAction::Cancel => "cancel_task",
        }
    }

    fn description(&self) -> &str {
        match self.action {
            LifecycleAction::Pause => "Pause a scheduled task. It will not run until resumed.",
            LifecycleAction::Resume => "Resume a paused task.",
            LifecycleAction::Cancel => "Cancel and delete a scheduled task.",
        }
    }

    fn parameters_schema(&self) -> serde_json::Value {
        task_id_schema(match self.action {
            LifecycleAction::Pause => "pause",
            LifecycleAction::Resume => "resume",
            LifecycleAction::Cancel => "cancel",
        })
    }

    fn execute<'a>(
        &'a self,
        args: serde_json::Value,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<ToolResult>> + Send + 'a>> {
        Box::pin(async move {
            let task_id = required_str(&args, "task_id")?;
            let ctx = self.context.current()?;

            let entry = DropEntry::now(self.action.request(TaskRef {
                task_id: task_id.to_string(),
                group_folder: ctx.group_folder,
                is_main: ctx.is_main,
            }));
            self.queue.enqueue(&entry)?;

            Ok(ToolResult::ok(format!(
                "Task {task_id} {}.",
                self.action.acknowledgement()
            )))
        })
    }
}
