use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Single-flight guard for agent runs.
///
/// Clones share the same permit. Contention never waits: a busy lock turns the
/// call away.
#[derive(Debug, Clone)]
pub struct ExecutionLock {
    permit: Arc<Semaphore>,
}

impl Default for ExecutionLock {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionLock {
    pub fn new() -> Self {
        Self {
            permit: Arc::new(Semaphore::new(1)),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.permit.available_permits() == 0
    }

    /// Run `f` while holding the lock, or return `None` at once if it is held.
    ///
    /// The permit is released when the future completes, errors, panics or is
    /// dropped.
    pub async fn with_lock<F, Fut, T>(&self, f: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        let Ok(_permit) = self.permit.try_acquire() else {
            tracing::debug!("execution lock busy; turning run away");
            return None;
        };
        Some(f().await)
    }
}
