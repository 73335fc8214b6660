use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;

/// One task as last published by the host scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    pub id: String,
    #[serde(rename = "groupFolder")]
    pub group_folder: String,
    pub prompt: String,
    pub schedule_type: String,
    pub schedule_value: String,
    pub status: String,
    #[serde(default)]
    pub next_run: Option<String>,
}

/// Read-only view of the host's task list file. Freshness is the host's concern.
#[derive(Debug, Clone)]
pub struct FileTaskSnapshot {
    path: PathBuf,
}

impl FileTaskSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `None` when the host has not published a snapshot yet.
    pub fn load(&self) -> Result<Option<Vec<TaskSnapshot>>> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("Failed to read task snapshot: {}", self.path.display())
                });
            }
        };

        let tasks = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse task snapshot: {}", self.path.display()))?;
        Ok(Some(tasks))
    }
}
