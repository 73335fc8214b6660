use super::Config;
use std::path::PathBuf;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(root) = std::env::var("BURROW_IPC_ROOT")
            && !root.is_empty()
        {
            self.ipc.root = PathBuf::from(root);
        }

        if let Ok(binary) = std::env::var("BURROW_AGENT_BINARY")
            && !binary.is_empty()
        {
            self.agent.binary = binary;
        }

        if let Ok(workspace) = std::env::var("BURROW_AGENT_WORKSPACE")
            && !workspace.is_empty()
        {
            self.agent.workspace_dir = PathBuf::from(workspace);
        }

        if let Ok(home) = std::env::var("BURROW_AGENT_HOME")
            && !home.is_empty()
        {
            self.agent.home_dir = PathBuf::from(home);
        }
    }
}
