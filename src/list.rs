use crate::buffer;
use crate::fatal::{self, Violation};
use crate::Optional;

/// Fixed-capacity list, `list<T, N>` in generated code.
///
/// Holds at most `N` items and never reallocates; pushing onto a full list is
/// a contract violation.
// don't derive Clone, the buffer capacity must stay at N
pub struct FixedList<T, const N: usize> {
    items: Vec<T>,
}

impl<T, const N: usize> FixedList<T, N> {
    pub fn new() -> FixedList<T, N> {
        let mut items = Vec::new();
        buffer::reserve_total(&mut items, N);
        FixedList {
            items,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        N
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item. Fatal if the list already holds `N` items.
    pub fn push(&mut self, item: T) {
        if self.items.len() >= N {
            fatal::violation(Violation::CapacityExceeded { capacity: N });
        }
        self.items.push(item);
    }

    pub fn at_ref(&self, index: usize) -> &T {
        match self.items.get(index) {
            Some(item) => item,
            None => fatal::violation(Violation::IndexOutOfBounds { index, len: self.items.len() }),
        }
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item=&T> {
        self.items.iter()
    }
}

impl<T, const N: usize> FixedList<T, N> where T: Clone {
    /// Copy of the item at `index`. Fatal if out of bounds.
    pub fn at(&self, index: usize) -> T {
        self.at_ref(index).clone()
    }

    pub fn get(&self, index: usize) -> Optional<T> {
        self.items.get(index).cloned().into()
    }
}

impl<T, const N: usize> Default for FixedList<T, N> {
    fn default() -> Self {
        FixedList::new()
    }
}

impl<T, const N: usize> std::fmt::Debug for FixedList<T, N> where T: std::fmt::Debug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
