use crate::error::InputError;
use crate::ipc::RunContext;
use serde::Deserialize;

const SCHEDULED_BANNER: &str = "[SCHEDULED TASK - You are running automatically, not in response to a user message. \
Use send_message if needed to communicate with the user.]";

/// What the host hands a run on stdin.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    pub prompt: String,
    #[serde(default)]
    pub session_id: Option<String>,
    pub group_folder: String,
    pub chat_jid: String,
    pub is_main: bool,
    #[serde(default)]
    pub is_scheduled_task: bool,
}

impl RunRequest {
    pub fn parse(raw: &str) -> Result<Self, InputError> {
        serde_json::from_str(raw).map_err(|e| InputError::Parse(e.to_string()))
    }

    pub fn context(&self) -> RunContext {
        RunContext {
            chat_jid: self.chat_jid.clone(),
            group_folder: self.group_folder.clone(),
            is_main: self.is_main,
        }
    }

    /// Incoming session to resume, if the host supplied a usable one.
    pub fn resume_session(&self) -> Option<&str> {
        self.session_id.as_deref().filter(|id| !id.is_empty())
    }

    /// The prompt as the agent sees it; unattended runs get an advisory banner.
    pub fn effective_prompt(&self) -> String {
        if self.is_scheduled_task {
            format!("{SCHEDULED_BANNER}\n\n{}", self.prompt)
        } else {
            self.prompt.clone()
        }
    }
}
