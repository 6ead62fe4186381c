//! Shared helpers for tests that touch process environment variables.
//!
//! The helpers centralise the unsafe interactions with `std::env` so
//! individual tests can stay focused on their assertions while the
//! environment is restored even when a test panics.

use std::env;
use std::ffi::{OsStr, OsString};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Global mutex guarding environment mutations.
///
/// Tests adjust variables such as `LOG_LEVEL` and `NO_COLOR`. Holding the
/// lock while an [`EnvGuard`] is alive keeps parallel tests from observing
/// each other's overrides.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Acquires [`ENV_LOCK`], recovering it if a previous holder panicked.
pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Scoped helper that applies an environment change and restores the previous
/// value when dropped.
#[derive(Debug)]
pub struct EnvGuard {
    key: OsString,
    previous: Option<OsString>,
}

impl EnvGuard {
    /// Sets `key` to `value` for the duration of the guard.
    #[allow(unsafe_code)]
    pub fn set(key: &'static str, value: impl AsRef<OsStr>) -> Self {
        let key_os = OsString::from(key);
        let previous = env::var_os(&key_os);
        // SAFETY: callers hold ENV_LOCK, so no other test thread reads or
        // writes the environment concurrently.
        unsafe {
            env::set_var(&key_os, value.as_ref());
        }
        Self {
            key: key_os,
            previous,
        }
    }

    /// Removes `key` for the duration of the guard.
    #[allow(unsafe_code)]
    pub fn remove(key: &'static str) -> Self {
        let key_os = OsString::from(key);
        let previous = env::var_os(&key_os);
        // SAFETY: see `set`.
        unsafe {
            env::remove_var(&key_os);
        }
        Self {
            key: key_os,
            previous,
        }
    }
}

#[allow(unsafe_code)]
impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see `set`.
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}
