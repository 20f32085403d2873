//! This module is for testing only

use std::panic::{self, AssertUnwindSafe};

use crate::config::{RuntimeConfig, Termination};

/// Runs `f` with fatal errors turned into unwinding panics on this thread.
///
/// Returns the diagnostic of the fatal error `f` raised, if any.
pub fn catch_fatal<R>(f: impl FnOnce() -> R) -> Result<R, String> {
    let previous = RuntimeConfig::current();
    previous.with_termination(Termination::Unwind).install();
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    previous.install();

    outcome.map_err(|payload| match payload.downcast::<String>() {
        Ok(diagnostic) => *diagnostic,
        Err(_) => "<non-runtime panic>".to_string(),
    })
}

#[test]
fn catch_fatal_passes_values_through() {
    assert_eq!(Ok(7), catch_fatal(|| 7));
}

#[test]
fn catch_fatal_restores_termination() {
    let _ = catch_fatal(|| crate::fatal::panic("x"));
    assert_eq!(Termination::Exit, RuntimeConfig::current().termination);
}
