//! Driving the wrapped agent binary for a single run.
//!
//! [`RunRequest`] comes in on stdin, [`AgentRunner`] publishes the run context
//! and launches the agent through [`AgentDriver`], and the outcome leaves as a
//! sentinel-delimited [`RunResult`] on stdout.

pub mod driver;
pub mod envelope;
pub mod reduce;
pub mod request;
pub mod runner;

pub use driver::AgentDriver;
pub use envelope::{
    OUTPUT_END_MARKER, OUTPUT_START_MARKER, RunResult, RunStatus, scan_envelope, write_envelope,
};
pub use reduce::{AgentOutput, ParsedLine, reduce_or_raw, reduce_output};
pub use request::RunRequest;
pub use runner::AgentRunner;
