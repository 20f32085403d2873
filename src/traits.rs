use crate::{Array, TextBuffer};

/// Implements collect to runtime containers.
pub trait ClawIterator: Iterator {
    fn collect_array(self) -> Array<Self::Item>;

    fn collect_text(self) -> TextBuffer where Self: Iterator<Item=u8>;
}

impl<Q: Iterator> ClawIterator for Q {
    fn collect_array(self) -> Array<Self::Item> {
        let (lower, _) = self.size_hint();
        let mut array = Array::with_capacity(lower.max(4));
        for item in self {
            array.push(item);
        }
        array
    }

    fn collect_text(self) -> TextBuffer where Self: Iterator<Item=u8> {
        TextBuffer::from(self.collect::<Vec<u8>>())
    }
}
