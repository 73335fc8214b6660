#![allow(dead_code)]

use burrow::config::{AgentConfig, Config, IpcConfig};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch sandbox: IPC root, agent workspace and home under one tempdir.
///
/// The agent binary is `/bin/sh`, so `sh run ...` executes the `run` script
/// placed in the workspace with the driver's remaining arguments.
pub struct Sandbox {
    pub tmp: TempDir,
}

impl Sandbox {
    pub fn new(script: &str) -> Self {
        let tmp = TempDir::new().unwrap();
        for dir in ["ipc", "group", "home"] {
            std::fs::create_dir_all(tmp.path().join(dir)).unwrap();
        }
        std::fs::write(tmp.path().join("group").join("run"), script).unwrap();
        Self { tmp }
    }

    pub fn ipc_root(&self) -> PathBuf {
        self.tmp.path().join("ipc")
    }

    pub fn workspace(&self) -> PathBuf {
        self.tmp.path().join("group")
    }

    pub fn home(&self) -> PathBuf {
        self.tmp.path().join("home")
    }

    pub fn config(&self) -> Config {
        Config {
            ipc: IpcConfig {
                root: self.ipc_root(),
            },
            agent: AgentConfig {
                binary: "/bin/sh".into(),
                workspace_dir: self.workspace(),
                home_dir: self.home(),
                stderr_tail_chars: 500,
            },
        }
    }

    pub fn read(&self, relative: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.workspace().join(relative)).unwrap()
    }
}

/// Records its argv, cwd and HOME, then streams a mixed event log.
pub const RECORDING_AGENT: &str = r#"
printf '%s\n' "$0" "$@" > args.txt
pwd > cwd.txt
printf '%s' "$HOME" > home.txt
echo "agent booting" >&2
echo '{"type":"step_start"}'
echo '{"type":"text","text":"Hello"}'
echo 'plain line'
echo ''
echo '{"type":"text","text":" world","session_id":"ses_42"}'
"#;

/// Floods stderr, then fails.
pub const FAILING_AGENT: &str = r#"
i=0
while [ $i -lt 600 ]; do printf x; i=$((i+1)); done >&2
printf 'END' >&2
exit 3
"#;

/// Succeeds without ever naming a session.
pub const SESSIONLESS_AGENT: &str = r#"
echo '{"type":"text","text":"ok"}'
"#;
