//! Request tools the agent calls from inside the sandbox.
//!
//! Every tool reads its caller identity from a [`ContextProvider`] and either
//! enqueues a [`DropEntry`] for the host or reads the host's task snapshot.
//! Nothing here talks to the host directly.
//!
//! [`ContextProvider`]: crate::ipc::ContextProvider
//! [`DropEntry`]: crate::ipc::DropEntry

mod common;
pub mod factory;
pub mod list_tasks;
pub mod register_group;
pub mod registry;
pub mod schedule_task;
pub mod send_message;
pub mod task_lifecycle;
pub mod traits;
pub mod types;

pub use factory::{request_registry, request_tools};
pub use list_tasks::ListTasksTool;
pub use register_group::RegisterGroupTool;
pub use registry::ToolRegistry;
pub use schedule_task::ScheduleTaskTool;
pub use send_message::SendMessageTool;
pub use task_lifecycle::{LifecycleAction, TaskLifecycleTool};
pub use traits::Tool;
pub use types::{ToolResult, ToolSpec};
