use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Serializes process-env mutation across tests and restores every touched
/// variable when dropped.
pub(crate) struct ScopedEnv {
    saved: Vec<(&'static str, Option<String>)>,
    _lock: MutexGuard<'static, ()>,
}

impl ScopedEnv {
    pub(crate) fn new() -> Self {
        Self {
            saved: Vec::new(),
            _lock: ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner),
        }
    }

    pub(crate) fn set(&mut self, key: &'static str, value: &str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: ENV_LOCK is held for the guard's lifetime, so no other test
        // mutates the environment concurrently.
        unsafe {
            std::env::set_var(key, value);
        }
        self
    }

    pub(crate) fn unset(&mut self, key: &'static str) -> &mut Self {
        self.saved.push((key, std::env::var(key).ok()));
        // SAFETY: see `set`.
        unsafe {
            std::env::remove_var(key);
        }
        self
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, previous) in self.saved.drain(..).rev() {
            // SAFETY: the lock field is dropped after this body runs.
            unsafe {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
