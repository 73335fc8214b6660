use thiserror::Error;

// ─── Top-level error hierarchy ───────────────────────────────────────────────

/// Structured error hierarchy for `burrow`.
///
/// Each subsystem defines its own error variant. The run entrypoint matches on
/// these to pick the exit code and envelope text; internal code continues to use
/// `anyhow::Result` for ad-hoc context chains.
#[derive(Debug, Error)]
pub enum BurrowError {
    // ── Run input ────────────────────────────────────────────────────────
    #[error("input: {0}")]
    Input(#[from] InputError),

    // ── Agent subprocess ────────────────────────────────────────────────
    #[error("agent: {0}")]
    Agent(#[from] AgentError),

    // ── Drop queue ──────────────────────────────────────────────────────
    #[error("queue: {0}")]
    Queue(#[from] QueueError),

    // ── Context store ───────────────────────────────────────────────────
    #[error("context: {0}")]
    Context(#[from] ContextError),

    // ── Config ──────────────────────────────────────────────────────────
    #[error("config: {0}")]
    Config(#[from] ConfigError),

    // ── Generic fallthrough (wraps anyhow for interop) ──────────────────
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ─── Input errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to parse input: {0}")]
    Parse(String),

    #[error("Failed to read input: {0}")]
    Read(#[from] std::io::Error),
}

// ─── Tool argument validation ───────────────────────────────────────────────

/// Rejections returned to the agent verbatim so it can retry in the same run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid cron: \"{0}\". Use format like \"0 9 * * *\" (daily 9am).")]
    Cron(String),

    #[error("Invalid interval: \"{0}\". Must be positive milliseconds.")]
    Interval(String),

    #[error("Invalid timestamp: \"{0}\". Use ISO 8601 format.")]
    Timestamp(String),

    #[error("Invalid schedule_type: \"{0}\". Use cron, interval, or once.")]
    ScheduleType(String),

    #[error("Invalid context_mode: \"{0}\". Use group or isolated.")]
    ContextMode(String),
}

// ─── Agent subprocess errors ────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum AgentError {
    /// The binary could not be launched at all.
    #[error("failed to launch {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    /// The binary ran and exited unsuccessfully. `stderr_tail` is bounded.
    #[error("{binary} exited with code {}: {stderr_tail}", display_code(.code))]
    Subprocess {
        binary: String,
        code: Option<i32>,
        stderr_tail: String,
    },

    #[error("failed waiting on {binary}: {source}")]
    Wait {
        binary: String,
        #[source]
        source: std::io::Error,
    },
}

#[allow(clippy::ref_option)]
fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| c.to_string())
}

// ─── Queue errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("failed to encode entry: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ─── Context errors ─────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ContextError {
    #[error("context file {path} is malformed: {message}")]
    Malformed { path: String, message: String },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

// ─── Config errors ──────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config: {0}")]
    Load(String),

    #[error("validation failed: {0}")]
    Validation(String),
}

// ─── Convenience re-exports ─────────────────────────────────────────────────

/// Shorthand result type for the crate.
pub type Result<T> = std::result::Result<T, BurrowError>;
