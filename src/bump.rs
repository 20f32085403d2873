use std::fmt::{self, Display};

use crate::buffer;
use crate::fatal::{self, Violation};

/// Logical position of an allocation inside a `BumpAllocator`.
///
/// Offsets stay valid when the arena grows and its block moves. Addresses
/// into the block do not, which is why the arena only hands out offsets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(usize);

impl Offset {
    #[inline(always)]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{}", self.0)
    }
}

/// Arena over a single contiguous byte block.
///
/// Allocation bumps a cursor; nothing is reclaimed until the arena itself is
/// dropped. When a request does not fit, the whole block is reallocated at
/// `max(2 * capacity, capacity + bytes)` and the cursor keeps its offset.
pub struct BumpAllocator {
    block: Box<[u8]>,
    cursor: usize,
}

impl BumpAllocator {
    pub fn new(capacity: usize) -> BumpAllocator {
        BumpAllocator {
            block: buffer::zeroed_block(capacity),
            cursor: 0,
        }
    }

    /// Reserves `bytes` bytes and returns where they start.
    ///
    /// No padding is inserted, consecutive allocations are adjacent.
    pub fn allocate(&mut self, bytes: usize) -> Offset {
        self.allocate_aligned(bytes, 1)
    }

    /// Reserves `bytes` bytes starting at an offset that is a multiple of
    /// `align`. Alignment is relative to the start of the block and must be a
    /// power of two.
    pub fn allocate_aligned(&mut self, bytes: usize, align: usize) -> Offset {
        if !align.is_power_of_two() {
            fatal::violation(Violation::BadAlignment { align });
        }
        let padding = (align - (self.cursor % align)) % align;
        let needed = match padding.checked_add(bytes) {
            Some(needed) => needed,
            None => fatal::violation(Violation::AllocationFailed { bytes }),
        };
        if needed > self.remaining() {
            self.grow(needed);
        }
        let start = self.cursor + padding;
        self.cursor = start + bytes;
        Offset(start)
    }

    /// Allocates room for `bytes` and copies them in.
    pub fn upload(&mut self, bytes: &[u8]) -> Offset {
        let offset = self.allocate(bytes.len());
        self.block[offset.0..offset.0 + bytes.len()].copy_from_slice(bytes);
        offset
    }

    /// Reallocates the block so at least `bytes` more bytes fit.
    ///
    /// The block may move; offsets handed out before remain valid.
    pub fn grow(&mut self, bytes: usize) {
        let capacity = self.block.len();
        let new_capacity = match capacity.checked_add(bytes) {
            Some(requested) => requested.max(capacity.saturating_mul(2)),
            None => fatal::violation(Violation::AllocationFailed { bytes }),
        };
        trace!("grow arena from {} to {} bytes, cursor at {}", capacity, new_capacity, self.cursor);

        let mut block = buffer::zeroed_block(new_capacity);
        block[..capacity].copy_from_slice(&self.block);
        self.block = block;
    }

    /// The `len` bytes allocated at `offset`. Fatal if the range reaches past
    /// the allocated region.
    pub fn slice(&self, offset: Offset, len: usize) -> &[u8] {
        let end = self.checked_end(offset, len);
        &self.block[offset.0..end]
    }

    pub fn slice_mut(&mut self, offset: Offset, len: usize) -> &mut [u8] {
        let end = self.checked_end(offset, len);
        &mut self.block[offset.0..end]
    }

    fn checked_end(&self, offset: Offset, len: usize) -> usize {
        match offset.0.checked_add(len) {
            Some(end) if end <= self.cursor => end,
            _ => fatal::violation(Violation::IndexOutOfBounds {
                index: offset.0.saturating_add(len).saturating_sub(1),
                len: self.cursor,
            }),
        }
    }

    /// Bytes handed out so far, including alignment padding.
    #[inline(always)]
    pub fn used(&self) -> usize {
        self.cursor
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.block.len()
    }

    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.block.len() - self.cursor
    }
}
