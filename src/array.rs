use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

use crate::buffer;
use crate::config::RuntimeConfig;
use crate::fatal::{self, Violation};
use crate::Optional;

/// Growable array with doubling growth.
///
/// The array owns its buffer and tracks its own capacity. When a `push` finds
/// the buffer full, the buffer is reallocated at twice the size, which may move
/// it: references into the array never survive a grow, indices do.
pub struct Array<T> where T: Sized {
    items: Vec<T>,
    capacity: usize,
}

impl<T> Array<T> where T: Sized {
    /// Creates an empty array with the configured default capacity (8 unless
    /// changed through `RuntimeConfig`).
    pub fn new() -> Array<T> {
        Array::with_capacity(RuntimeConfig::current().initial_array_capacity)
    }

    /// Creates an empty array that can hold `capacity` items before growing.
    /// A capacity of 0 is raised to 1.
    pub fn with_capacity(capacity: usize) -> Array<T> {
        let capacity = capacity.max(1);
        let mut items = Vec::new();
        buffer::reserve_total(&mut items, capacity);
        Array {
            items,
            capacity,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value`, growing the buffer first if it is full.
    pub fn push(&mut self, value: T) {
        if self.items.len() == self.capacity {
            self.grow();
        }
        self.items.push(value);
    }

    /// Removes and returns the last item. Fatal on an empty array.
    pub fn pop(&mut self) -> T {
        match self.items.pop() {
            Some(value) => value,
            None => fatal::violation(Violation::EmptyCollection { operation: "pop" }),
        }
    }

    /// Doubles the capacity.
    pub fn grow(&mut self) {
        self.grow_by(1);
    }

    /// Grows the capacity to at least `max(2 * capacity, capacity + extra)`.
    pub fn grow_by(&mut self, extra: usize) {
        let new_capacity = self.capacity
            .saturating_mul(2)
            .max(self.capacity.saturating_add(extra));
        trace!("grow array from {} to {} items", self.capacity, new_capacity);
        buffer::reserve_total(&mut self.items, new_capacity);
        self.capacity = new_capacity;
    }

    /// Reference to the item at `index`. Fatal if out of bounds.
    pub fn at_ref(&self, index: usize) -> &T {
        match self.items.get(index) {
            Some(value) => value,
            None => fatal::violation(Violation::IndexOutOfBounds { index, len: self.items.len() }),
        }
    }

    pub fn at_mut(&mut self, index: usize) -> &mut T {
        let len = self.items.len();
        match self.items.get_mut(index) {
            Some(value) => value,
            None => fatal::violation(Violation::IndexOutOfBounds { index, len }),
        }
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item=&T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> impl ExactSizeIterator<Item=&mut T> {
        self.items.iter_mut()
    }
}

impl<T> Array<T> where T: Clone {
    /// Copy of the item at `index`. Fatal if out of bounds.
    pub fn at(&self, index: usize) -> T {
        self.at_ref(index).clone()
    }

    /// Copy of the item at `index`, absent if out of bounds.
    pub fn get(&self, index: usize) -> Optional<T> {
        self.items.get(index).cloned().into()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        self.at_ref(index)
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        self.at_mut(index)
    }
}

impl<T> Debug for Array<T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}
