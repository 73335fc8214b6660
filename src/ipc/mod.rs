//! Filesystem IPC between the sandboxed agent and the host.
//!
//! Identity flows host → sandbox through the context file; requests flow
//! sandbox → host through the drop queues. Nothing here is shared in memory.

mod atomic;
pub mod context;
pub mod entry;
pub mod queue;
pub mod snapshot;

pub use atomic::write_atomic;
pub use context::{ContextProvider, FileContextStore, RunContext};
pub use entry::{DropEntry, DropRequest, GroupRegistration, TaskRef};
pub use queue::{DirectoryQueue, DrainedEntry, DropQueue};
pub use snapshot::{FileTaskSnapshot, TaskSnapshot};
