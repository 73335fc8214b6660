use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ipc: IpcConfig,

    #[serde(default)]
    pub agent: AgentConfig,
}

/// Filesystem layout shared by the host and the sandboxed tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcConfig {
    #[serde(default = "default_ipc_root")]
    pub root: PathBuf,
}

fn default_ipc_root() -> PathBuf {
    PathBuf::from("/workspace/ipc")
}

impl Default for IpcConfig {
    fn default() -> Self {
        Self {
            root: default_ipc_root(),
        }
    }
}

impl IpcConfig {
    pub fn context_file(&self) -> PathBuf {
        self.root.join("context.json")
    }

    pub fn messages_dir(&self) -> PathBuf {
        self.root.join("messages")
    }

    pub fn tasks_dir(&self) -> PathBuf {
        self.root.join("tasks")
    }

    pub fn task_snapshot_file(&self) -> PathBuf {
        self.root.join("current_tasks.json")
    }
}

/// How the wrapped agent binary is launched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    #[serde(default = "default_agent_binary")]
    pub binary: String,
    #[serde(default = "default_agent_workspace_dir")]
    pub workspace_dir: PathBuf,
    #[serde(default = "default_agent_home_dir")]
    pub home_dir: PathBuf,
    /// Characters of agent stderr kept in a failure report.
    #[serde(default = "default_stderr_tail_chars")]
    pub stderr_tail_chars: usize,
}

fn default_agent_binary() -> String {
    "opencode".into()
}

fn default_agent_workspace_dir() -> PathBuf {
    PathBuf::from("/workspace/group")
}

fn default_agent_home_dir() -> PathBuf {
    PathBuf::from("/home/node")
}

fn default_stderr_tail_chars() -> usize {
    500
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            binary: default_agent_binary(),
            workspace_dir: default_agent_workspace_dir(),
            home_dir: default_agent_home_dir(),
            stderr_tail_chars: default_stderr_tail_chars(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ipc.root.as_os_str().is_empty() {
            return Err(ConfigError::Validation("ipc.root must not be empty".into()));
        }
        if self.agent.binary.trim().is_empty() {
            return Err(ConfigError::Validation(
                "agent.binary must not be empty".into(),
            ));
        }
        if self.agent.stderr_tail_chars == 0 {
            return Err(ConfigError::Validation(
                "agent.stderr_tail_chars must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}
