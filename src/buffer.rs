//! Backing-buffer helpers shared by the growable containers.
//!
//! Every container grows through here, so an allocation failure is reported
//! the same way wherever it happens.

use crate::fatal::{self, Violation};

/// Ensures `items` can hold `capacity` elements without reallocating.
///
/// Any raw pointer previously taken into `items` is invalid afterwards.
pub fn reserve_total<T>(items: &mut Vec<T>, capacity: usize) {
    let additional = capacity.saturating_sub(items.len());
    if items.try_reserve_exact(additional).is_err() {
        fatal::violation(Violation::AllocationFailed {
            bytes: capacity.saturating_mul(std::mem::size_of::<T>()),
        });
    }
}

/// A zero-filled byte block of exactly `len` bytes.
pub fn zeroed_block(len: usize) -> Box<[u8]> {
    let mut bytes = Vec::new();
    reserve_total(&mut bytes, len);
    bytes.resize(len, 0u8);
    bytes.into_boxed_slice()
}
