use super::{
    LifecycleAction, ListTasksTool, RegisterGroupTool, ScheduleTaskTool, SendMessageTool,
    TaskLifecycleTool, Tool, ToolRegistry,
};
use crate::config::IpcConfig;
use crate::ipc::{ContextProvider, DirectoryQueue, DropQueue, FileContextStore, FileTaskSnapshot};
use std::sync::Arc;

/// Create the request tools, wired to the file-backed IPC layout under `ipc`.
pub fn request_tools(ipc: &IpcConfig) -> Vec<Box<dyn Tool>> {
    let context: Arc<dyn ContextProvider> = Arc::new(FileContextStore::new(ipc.context_file()));
    let messages: Arc<dyn DropQueue> = Arc::new(DirectoryQueue::new(ipc.messages_dir()));
    let tasks: Arc<dyn DropQueue> = Arc::new(DirectoryQueue::new(ipc.tasks_dir()));

    vec![
        Box::new(SendMessageTool::new(context.clone(), messages)),
        Box::new(ScheduleTaskTool::new(context.clone(), tasks.clone())),
        Box::new(ListTasksTool::new(
            context.clone(),
            FileTaskSnapshot::new(ipc.task_snapshot_file()),
        )),
        Box::new(TaskLifecycleTool::new(
            LifecycleAction::Pause,
            context.clone(),
            tasks.clone(),
        )),
        Box::new(TaskLifecycleTool::new(
            LifecycleAction::Resume,
            context.clone(),
            tasks.clone(),
        )),
        Box::new(TaskLifecycleTool::new(
            LifecycleAction::Cancel,
            context.clone(),
            tasks.clone(),
        )),
        Box::new(RegisterGroupTool::new(context, tasks)),
    ]
}

pub fn request_registry(ipc: &IpcConfig) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    for tool in request_tools(ipc) {
        registry.register(tool);
    }
    registry
}
