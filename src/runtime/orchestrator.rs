use super::lock::ExecutionLock;
use crate::agent::{AgentRunner, RunRequest, RunResult};

pub const BUSY_MESSAGE: &str = "Another agent run is already in progress.";

/// Owns the execution lock and serializes runs through it.
#[derive(Debug, Clone)]
pub struct RunOrchestrator {
    lock: ExecutionLock,
    runner: AgentRunner,
}

impl RunOrchestrator {
    pub fn new(runner: AgentRunner) -> Self {
        Self {
            lock: ExecutionLock::new(),
            runner,
        }
    }

    pub fn lock(&self) -> &ExecutionLock {
        &self.lock
    }

    /// `None` when another run holds the lock.
    pub async fn try_run(&self, request: &RunRequest) -> Option<RunResult> {
        self.lock.with_lock(|| self.runner.run(request)).await
    }

    /// Like [`Self::try_run`], reporting contention as a failed result.
    pub async fn run(&self, request: &RunRequest) -> RunResult {
        match self.try_run(request).await {
            Some(result) => result,
            None => {
                tracing::warn!(group = %request.group_folder, "run rejected: lock busy");
                RunResult::failure(BUSY_MESSAGE)
            }
        }
    }
}
