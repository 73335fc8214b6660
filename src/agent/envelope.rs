use serde::{Deserialize, Serialize};
use std::io::Write;

pub const OUTPUT_START_MARKER: &str = "---BURROW_OUTPUT_START---";
pub const OUTPUT_END_MARKER: &str = "---BURROW_OUTPUT_END---";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

/// The one result a run reports to its parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunResult {
    pub status: RunStatus,
    /// Always present on the wire; `null` on error.
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResult {
    pub fn success(text: String, session_id: Option<String>) -> Self {
        Self {
            status: RunStatus::Success,
            result: Some(text),
            new_session_id: session_id,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            status: RunStatus::Error,
            result: None,
            new_session_id: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

/// Write the sentinel-delimited block: start marker, one JSON line, end marker.
pub fn write_envelope<W: Write>(out: &mut W, result: &RunResult) -> std::io::Result<()> {
    let json = serde_json::to_string(result)?;
    writeln!(out, "{OUTPUT_START_MARKER}")?;
    writeln!(out, "{json}")?;
    writeln!(out, "{OUTPUT_END_MARKER}")?;
    out.flush()
}

/// Parent side: pull the first complete block out of a mixed stream.
pub fn scan_envelope(stream: &str) -> Option<RunResult> {
    let (_, after_start) = stream.split_once(OUTPUT_START_MARKER)?;
    let (body, _) = after_start.split_once(OUTPUT_END_MARKER)?;
    serde_json::from_str(body.trim()).ok()
}
