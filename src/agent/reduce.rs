use serde_json::{Map, Value};

/// What the agent produced once its stdout has been folded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentOutput {
    pub text: String,
    pub session_id: Option<String>,
}

/// One non-blank stdout line, tagged before it is folded.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// A JSON object event from the agent's stream.
    Event(Map<String, Value>),
    /// Anything else, kept verbatim.
    Raw(String),
}

impl ParsedLine {
    pub fn parse(line: &str) -> Self {
        match serde_json::from_str::<Value>(line) {
            Ok(Value::Object(event)) => Self::Event(event),
            _ => Self::Raw(line.to_string()),
        }
    }
}

fn non_empty_str<'a>(event: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    event
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

fn fold_line(mut output: AgentOutput, line: ParsedLine) -> AgentOutput {
    match line {
        ParsedLine::Event(event) => {
            if let Some(text) = event.get("text").and_then(Value::as_str) {
                output.text.push_str(text);
            }
            if let Some(session_id) = non_empty_str(&event, "session_id") {
                output.session_id = Some(session_id.to_string());
            }
        }
        ParsedLine::Raw(raw) => output.text.push_str(&raw),
    }
    output
}

/// Fold a complete stdout capture.
///
/// Lines split on `\n` only, so raw lines keep any `\r`. Blank lines are
/// skipped; the last non-empty `session_id` wins.
pub fn reduce_output(stdout: &[u8]) -> Result<AgentOutput, std::str::Utf8Error> {
    let stdout = std::str::from_utf8(stdout)?;
    Ok(stdout
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(ParsedLine::parse)
        .fold(AgentOutput::default(), fold_line))
}

/// Like [`reduce_output`], but undecodable output degrades to the raw buffer.
pub fn reduce_or_raw(stdout: &[u8]) -> AgentOutput {
    reduce_output(stdout).unwrap_or_else(|error| {
        tracing::warn!("agent stdout is not UTF-8 ({error}); returning it unreduced");
        AgentOutput {
            text: String::from_utf8_lossy(stdout).into_owned(),
            session_id: None,
        }
    })
}
