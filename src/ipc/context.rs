use super::atomic::write_atomic;
use crate::error::ContextError;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Identity of the conversation a run belongs to.
///
/// Tools never take these values from the agent's arguments; the host is the
/// only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RunContext {
    pub chat_jid: String,
    pub group_folder: String,
    pub is_main: bool,
}

/// Read-through source of the current [`RunContext`].
///
/// Implementations must not cache: every call observes the latest write.
pub trait ContextProvider: Send + Sync {
    fn current(&self) -> Result<RunContext, ContextError>;
}

/// Context stored as a JSON sidecar file under the IPC root.
#[derive(Debug, Clone)]
pub struct FileContextStore {
    path: PathBuf,
}

impl FileContextStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Host side: publish the context for the upcoming run.
    pub fn write(&self, context: &RunContext) -> Result<(), ContextError> {
        let json = serde_json::to_vec_pretty(context).map_err(|e| ContextError::Malformed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(
            group = %context.group_folder,
            is_main = context.is_main,
            "wrote run context to {}",
            self.path.display()
        );
        Ok(())
    }

    /// Tool side: a missing file yields the neutral, non-main context.
    pub fn read(&self) -> Result<RunContext, ContextError> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                return Ok(RunContext::default());
            }
            Err(error) => return Err(error.into()),
        };

        serde_json::from_str(&raw).map_err(|e| ContextError::Malformed {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl ContextProvider for FileContextStore {
    fn current(&self) -> Result<RunContext, ContextError> {
        self.read()
    }
}
