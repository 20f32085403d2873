#![allow(unused_macros)]
#![macro_use]

// Forwarders to `log`. Without the `logging` feature they expand to nothing.

macro_rules! error {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::error!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::error!(target: "claw", $($arg)+);
    )
}

macro_rules! debug {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::debug!(target: "claw", $($arg)+);
    )
}

macro_rules! trace {
    (target: $target:expr, $($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: $target, $($arg)+);
    );
    ($($arg:tt)+) => (
        #[cfg(feature = "logging")]
        log::trace!(target: "claw", $($arg)+);
    )
}
