//! Stylesheet value warnings with colored terminal output.
//!
//! Callers that choose a lenient parse report the fallback here. Each
//! distinct message is printed once per process, so messages should come
//! from a fixed set rather than embed untrusted input.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

use owo_colors::OwoColorize;

/// Messages already printed, keyed as `[component] message`.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// A poisoned set only means another thread panicked mid-insert; the set
/// itself is still usable.
fn warned() -> MutexGuard<'static, HashSet<String>> {
    WARNED.lock().unwrap_or_else(PoisonError::into_inner)
}

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Warn about a value that was replaced by a fallback (prints once per unique message)
///
/// # Example
/// ```
/// use tincture_common::warning::warn_once;
///
/// warn_once("Color", "malformed hex color; using transparent black");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if warned().insert(key(component, message)) {
        eprintln!("{}", format!("[Tincture {component}] ⚠ {message}").yellow());
    }
}

/// Whether `warn_once` has already reported this exact message.
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    warned().contains(&key(component, message))
}

/// Number of distinct warnings recorded since the last clear.
#[must_use]
pub fn warning_count() -> usize {
    warned().len()
}

/// Forget every recorded warning so they can be printed again.
pub fn clear_warnings() {
    warned().clear();
}
