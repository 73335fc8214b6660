//! Run serialization: the execution lock and the orchestrator that owns it.

pub mod lock;
pub mod orchestrator;

pub use lock::ExecutionLock;
pub use orchestrator::{BUSY_MESSAGE, RunOrchestrator};
