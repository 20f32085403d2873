//! Per-thread runtime settings.

use std::cell::Cell;

/// What the runtime does after printing a fatal diagnostic.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Termination {
    /// Exit the process with [`crate::fatal::FATAL_EXIT_STATUS`].
    Exit,
    /// Raise a Rust panic whose payload is the diagnostic text.
    ///
    /// For hosts that embed the runtime and want to catch contract violations
    /// at a boundary, and for tests.
    Unwind,
}

/// Settings consulted by the containers and the fatal reporter.
///
/// The runtime is single-threaded, so the active configuration lives in a
/// thread local. `install` replaces it for the calling thread only.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Behavior after a contract violation has been reported.
    pub termination: Termination,

    /// Capacity of an `Array` created with `Array::new`.
    ///
    /// Default: 8. Values below 1 are raised to 1.
    pub initial_array_capacity: usize,

    /// Starting capacity of the buffer `format` writes into.
    ///
    /// Default: 1024. The buffer grows past it when needed.
    pub format_capacity: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_TERMINATION: Termination = Termination::Exit;
    pub const DEFAULT_ARRAY_CAPACITY: usize = 8;
    pub const DEFAULT_FORMAT_CAPACITY: usize = 1024;

    pub const fn new() -> RuntimeConfig {
        RuntimeConfig {
            termination: Self::DEFAULT_TERMINATION,
            initial_array_capacity: Self::DEFAULT_ARRAY_CAPACITY,
            format_capacity: Self::DEFAULT_FORMAT_CAPACITY,
        }
    }

    pub fn with_termination(mut self, termination: Termination) -> RuntimeConfig {
        self.termination = termination;
        self
    }

    pub fn with_initial_array_capacity(mut self, capacity: usize) -> RuntimeConfig {
        self.initial_array_capacity = capacity.max(1);
        self
    }

    pub fn with_format_capacity(mut self, capacity: usize) -> RuntimeConfig {
        self.format_capacity = capacity;
        self
    }

    /// Makes this configuration active on the current thread.
    pub fn install(self) {
        CURRENT.with(|current| current.set(self));
    }

    /// Returns the configuration active on the current thread.
    #[inline(always)]
    pub fn current() -> RuntimeConfig {
        CURRENT.with(|current| current.get())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static CURRENT: Cell<RuntimeConfig> = Cell::new(RuntimeConfig::new());
}
