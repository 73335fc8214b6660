use super::reduce::{AgentOutput, reduce_or_raw};
use crate::config::AgentConfig;
use crate::error::AgentError;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncReadExt, BufReader};
use tokio::process::Command;

/// Launches the wrapped agent binary once per prompt.
#[derive(Debug, Clone)]
pub struct AgentDriver {
    binary: String,
    workspace_dir: PathBuf,
    home_dir: PathBuf,
    stderr_tail_chars: usize,
}

impl AgentDriver {
    pub fn new(config: &AgentConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            workspace_dir: config.workspace_dir.clone(),
            home_dir: config.home_dir.clone(),
            stderr_tail_chars: config.stderr_tail_chars,
        }
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn build_args(prompt: &str, session_id: Option<&str>) -> Vec<String> {
        let mut args = vec!["run".to_string()];
        if let Some(session_id) = session_id.filter(|id| !id.is_empty()) {
            args.push("--session".to_string());
            args.push(session_id.to_string());
        }
        args.extend(["--format".to_string(), "json".to_string()]);
        args.push(prompt.to_string());
        args
    }

    /// Run the agent to completion and reduce its event stream.
    ///
    /// No timeout is applied; the caller owns cancellation.
    pub async fn run(
        &self,
        prompt: &str,
        session_id: Option<&str>,
    ) -> Result<AgentOutput, AgentError> {
        let args = Self::build_args(prompt, session_id);
        tracing::info!(
            binary = %self.binary,
            resume = session_id.is_some(),
            "starting agent in {}",
            self.workspace_dir.display()
        );

        let mut child = Command::new(&self.binary)
            .args(&args)
            .current_dir(&self.workspace_dir)
            .env("HOME", &self.home_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AgentError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let (stdout, stderr) = tokio::join!(read_all(stdout), forward_lines(stderr));

        let status = child.wait().await.map_err(|source| AgentError::Wait {
            binary: self.binary.clone(),
            source,
        })?;

        if !status.success() {
            return Err(AgentError::Subprocess {
                binary: self.binary.clone(),
                code: status.code(),
                stderr_tail: tail_chars(&stderr, self.stderr_tail_chars),
            });
        }

        let output = reduce_or_raw(&stdout);
        tracing::info!(
            chars = output.text.chars().count(),
            session = output.session_id.as_deref().unwrap_or("-"),
            "agent finished"
        );
        Ok(output)
    }
}

async fn read_all<R: AsyncRead + Unpin>(pipe: Option<R>) -> Vec<u8> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe
        && let Err(error) = pipe.read_to_end(&mut buf).await
    {
        tracing::warn!("failed reading agent stdout: {error}");
    }
    buf
}

/// Buffer stderr while echoing each line to the log as it arrives.
async fn forward_lines<R: AsyncRead + Unpin>(pipe: Option<R>) -> String {
    let mut captured = String::new();
    let Some(pipe) = pipe else {
        return captured;
    };

    let mut reader = BufReader::new(pipe);
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                let text = String::from_utf8_lossy(&line);
                let trimmed = text.trim_end();
                if !trimmed.is_empty() {
                    tracing::info!(target: "agent", "{trimmed}");
                }
                captured.push_str(&text);
            }
            Err(error) => {
                tracing::warn!("failed reading agent stderr: {error}");
                break;
            }
        }
    }
    captured
}

/// Last `max` characters of `text`, never splitting a code point.
fn tail_chars(text: &str, max: usize) -> String {
    let skip = text.chars().count().saturating_sub(max);
    text.chars().skip(skip).collect()
}
