//! The single fatal-error channel.
//!
//! Contract violations (bad index, unwrap of an absent value, pop on an empty
//! array) are bugs in the calling program, not conditions it can handle, so
//! every one of them ends up here and never returns.

use std::fmt::{self, Display};
use std::io::Write;

use crate::config::{RuntimeConfig, Termination};

/// Exit status used for every fatal path.
pub const FATAL_EXIT_STATUS: i32 = 100;

const PREFIX: &str = "[claw panicked]";

/// A contract violation detected by the runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    IndexOutOfBounds { index: usize, len: usize },
    /// `operation` was called on a collection with no elements.
    EmptyCollection { operation: &'static str },
    /// `what` names the kind of value that could not be unwrapped.
    BadUnwrap { what: &'static str },
    CapacityExceeded { capacity: usize },
    AllocationFailed { bytes: usize },
    /// An alignment that is not a power of two.
    BadAlignment { align: usize },
    /// Free-form message, e.g. from generated code or `Optional::expect`.
    Message(String),
}

impl Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::IndexOutOfBounds { index, len } => write!(f, "index out of bounds: the len is {} but the index is {}", len, index),
            Violation::EmptyCollection { operation } => write!(f, "{} called on empty collection", operation),
            Violation::BadUnwrap { what } => write!(f, "unwrapping a bad {}", what),
            Violation::CapacityExceeded { capacity } => write!(f, "capacity of {} items exceeded", capacity),
            Violation::AllocationFailed { bytes } => write!(f, "allocation of {} bytes failed", bytes),
            Violation::BadAlignment { align } => write!(f, "alignment {} is not a power of two", align),
            Violation::Message(message) => Display::fmt(message, f),
        }
    }
}

/// Reports `message` and terminates.
pub fn panic(message: &str) -> ! {
    terminate(format!("{}: {}", PREFIX, message))
}

/// Reports `message` together with the source line of the generated code
/// that raised it, and terminates.
pub fn panic_at(message: &str, line: u32) -> ! {
    terminate(format!("{}[line: {}]: {}", PREFIX, line, message))
}

/// Reports a contract violation and terminates.
#[cold]
pub fn violation(violation: Violation) -> ! {
    panic(&violation.to_string())
}

#[cold]
fn terminate(diagnostic: String) -> ! {
    error!(target: "claw::fatal", "{}", diagnostic);
    match RuntimeConfig::current().termination {
        Termination::Exit => {
            let stderr = std::io::stderr();
            let mut out = stderr.lock();
            let _ = writeln!(out, "{}", diagnostic);
            let _ = out.flush();
            std::process::exit(FATAL_EXIT_STATUS)
        },
        Termination::Unwind => std::panic::panic_any(diagnostic),
    }
}
