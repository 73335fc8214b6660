use crate::schedule::{ContextMode, ScheduleType};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A request handed from the sandbox to the host, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DropRequest {
    Message {
        #[serde(rename = "chatJid")]
        chat_jid: String,
        text: String,
        #[serde(rename = "groupFolder")]
        group_folder: String,
    },
    ScheduleTask {
        prompt: String,
        schedule_type: ScheduleType,
        schedule_value: String,
        context_mode: ContextMode,
        /// Group the task runs in; may differ from the caller only for main.
        #[serde(rename = "groupFolder")]
        group_folder: String,
        #[serde(rename = "chatJid")]
        chat_jid: String,
        #[serde(rename = "createdBy")]
        created_by: String,
    },
    PauseTask(TaskRef),
    ResumeTask(TaskRef),
    CancelTask(TaskRef),
    RegisterGroup(GroupRegistration),
}

/// Lifecycle target plus the caller's claim; the host decides if it may act.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRef {
    pub task_id: String,
    pub group_folder: String,
    pub is_main: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRegistration {
    pub jid: String,
    pub name: String,
    pub folder: String,
    pub trigger: String,
    /// Group that asked for the registration.
    #[serde(rename = "groupFolder")]
    pub group_folder: String,
}

impl DropRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Message { .. } => "message",
            Self::ScheduleTask { .. } => "schedule_task",
            Self::PauseTask(_) => "pause_task",
            Self::ResumeTask(_) => "resume_task",
            Self::CancelTask(_) => "cancel_task",
            Self::RegisterGroup(_) => "register_group",
        }
    }
}

/// One immutable queue file: the request plus when it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropEntry {
    #[serde(flatten)]
    pub request: DropRequest,
    pub timestamp: String,
}

impl DropEntry {
    /// Stamp `request` with the current UTC time, millisecond precision.
    pub fn now(request: DropRequest) -> Self {
        Self {
            request,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
