//! Environment isolation utilities for testing
//!
//! Tests that run the CLI must not pick up a developer's `AUTOSTACKER_CONFIG`
//! or `RUST_LOG`. This module clears those variables for the duration of a
//! closure and serializes such tests with a mutex.

use std::sync::Mutex;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Variables removed while an isolated test runs
pub const ISOLATED_VARS: &[&str] = &["AUTOSTACKER_CONFIG", "RUST_LOG"];

/// Run `f` with the variables in [`ISOLATED_VARS`] unset
///
/// The original values are restored afterwards. A lock poisoned by a
/// panicking test is recovered rather than propagated.
///
/// # Examples
///
/// ```no_run
/// use autostacker_testkit::with_isolated_env;
/// use std::process::Command;
///
/// with_isolated_env(|| {
///     // AUTOSTACKER_CONFIG is not set for the child process
///     let status = Command::new("autostacker").arg("--help").status();
/// });
/// ```
pub fn with_isolated_env<F, R>(f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let saved: Vec<(&str, Option<String>)> = ISOLATED_VARS
        .iter()
        .map(|&name| (name, std::env::var(name).ok()))
        .collect();

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        for name in ISOLATED_VARS {
            std::env::remove_var(name);
        }
    }

    let result = f();

    // SAFETY: We still hold ENV_LOCK, ensuring exclusive access to env vars.
    unsafe {
        for (name, value) in saved {
            match value {
                Some(value) => std::env::set_var(name, value),
                None => std::env::remove_var(name),
            }
        }
    }

    result
}
