use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::str::Utf8Error;

use crate::buffer;
use crate::fatal::{self, Violation};
use crate::Optional;

/// Owned, length-tracked byte sequence.
///
/// Content is bytes, not characters: indices, `find` and case mapping all work
/// on single bytes, and case mapping only touches ASCII letters. The length is
/// the length of the content after every mutation, including `clear`.
///
/// `append` and `clear` mutate in place; `rev`, `to_upper`, `to_lower`,
/// `slice` and `substr` return new buffers.
#[derive(Clone, Default)]
pub struct TextBuffer {
    bytes: Vec<u8>,
}

impl TextBuffer {
    pub fn new(initial: &[u8]) -> TextBuffer {
        let mut bytes = Vec::new();
        buffer::reserve_total(&mut bytes, initial.len());
        bytes.extend_from_slice(initial);
        TextBuffer { bytes }
    }

    pub fn empty() -> TextBuffer {
        TextBuffer { bytes: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> TextBuffer {
        let mut bytes = Vec::new();
        buffer::reserve_total(&mut bytes, capacity);
        TextBuffer { bytes }
    }

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// An owned copy of the content.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// The content as `str`, if it is valid UTF-8.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.bytes)
    }

    /// The byte at `index`. Fatal if out of bounds.
    pub fn at(&self, index: usize) -> u8 {
        match self.bytes.get(index) {
            Some(byte) => *byte,
            None => fatal::violation(Violation::IndexOutOfBounds { index, len: self.bytes.len() }),
        }
    }

    /// Appends `text`. The buffer is grown to exactly the new length.
    pub fn append(&mut self, text: &[u8]) {
        let new_len = self.bytes.len().saturating_add(text.len());
        buffer::reserve_total(&mut self.bytes, new_len);
        self.bytes.extend_from_slice(text);
    }

    pub fn append_byte(&mut self, byte: u8) {
        self.append(&[byte]);
    }

    /// A new buffer holding this content followed by `other`.
    pub fn concat(&self, other: &[u8]) -> TextBuffer {
        let mut merged = TextBuffer::with_capacity(self.bytes.len().saturating_add(other.len()));
        merged.bytes.extend_from_slice(&self.bytes);
        merged.bytes.extend_from_slice(other);
        merged
    }

    /// Bytes in `[start, end)`. Empty when `start >= end`; fatal when `end`
    /// is past the content.
    pub fn slice(&self, start: usize, end: usize) -> TextBuffer {
        if end > self.bytes.len() {
            fatal::violation(Violation::IndexOutOfBounds { index: end - 1, len: self.bytes.len() });
        }
        if start >= end {
            return TextBuffer::empty();
        }
        TextBuffer::new(&self.bytes[start..end])
    }

    /// `len` bytes starting at `start`, i.e. `slice(start, start + len)`.
    pub fn substr(&self, start: usize, len: usize) -> TextBuffer {
        match start.checked_add(len) {
            Some(end) => self.slice(start, end),
            None => fatal::violation(Violation::IndexOutOfBounds { index: usize::MAX, len: self.bytes.len() }),
        }
    }

    pub fn rev(&self) -> TextBuffer {
        let mut reversed = TextBuffer::with_capacity(self.bytes.len());
        for index in (0..self.bytes.len()).rev() {
            reversed.bytes.push(self.bytes[index]);
        }
        reversed
    }

    /// Lowest index holding `byte`.
    pub fn find(&self, byte: u8) -> Optional<usize> {
        self.bytes.iter().position(|b| *b == byte).into()
    }

    /// True iff `other` has the same length and the same bytes.
    pub fn eq(&self, other: &[u8]) -> bool {
        if self.bytes.len() != other.len() {
            return false;
        }
        self.bytes.iter().zip(other.iter()).all(|(a, b)| a == b)
    }

    pub fn to_upper(&self) -> TextBuffer {
        self.map_bytes(|b| b.to_ascii_uppercase())
    }

    pub fn to_lower(&self) -> TextBuffer {
        self.map_bytes(|b| b.to_ascii_lowercase())
    }

    fn map_bytes(&self, map: impl Fn(u8) -> u8) -> TextBuffer {
        let mut mapped = TextBuffer::with_capacity(self.bytes.len());
        mapped.bytes.extend(self.bytes.iter().map(|b| map(*b)));
        mapped
    }

    /// Drops the content; size is 0 afterwards.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl From<&str> for TextBuffer {
    fn from(value: &str) -> Self {
        TextBuffer::new(value.as_bytes())
    }
}

impl From<&[u8]> for TextBuffer {
    fn from(value: &[u8]) -> Self {
        TextBuffer::new(value)
    }
}

impl From<Vec<u8>> for TextBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        TextBuffer { bytes }
    }
}

impl AsRef<[u8]> for TextBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&String::from_utf8_lossy(&self.bytes), f)
    }
}

impl Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&String::from_utf8_lossy(&self.bytes), f)
    }
}

impl PartialEq for TextBuffer {
    fn eq(&self, other: &Self) -> bool {
        TextBuffer::eq(self, &other.bytes)
    }
}

impl Eq for TextBuffer {}

impl Hash for TextBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bytes.hash(state)
    }
}

impl PartialEq<[u8]> for TextBuffer {
    fn eq(&self, other: &[u8]) -> bool {
        TextBuffer::eq(self, other)
    }
}

impl PartialEq<str> for TextBuffer {
    fn eq(&self, other: &str) -> bool {
        TextBuffer::eq(self, other.as_bytes())
    }
}

impl PartialEq<&str> for TextBuffer {
    fn eq(&self, other: &&str) -> bool {
        TextBuffer::eq(self, other.as_bytes())
    }
}

impl PartialEq<TextBuffer> for str {
    fn eq(&self, other: &TextBuffer) -> bool {
        other.eq(self.as_bytes())
    }
}

impl PartialEq<TextBuffer> for &str {
    fn eq(&self, other: &TextBuffer) -> bool {
        other.eq(self.as_bytes())
    }
}

#[cfg(test)]
mod text_tests {
    use crate::{Optional, TextBuffer};
    use crate::testing::catch_fatal;

    #[test]
    fn test_size_tracks_content() {
        let mut text = TextBuffer::from("hello");
        assert_eq!(5, text.size());
        text.append(b" world!");
        assert_eq!(12, text.size());
        assert_eq!("hello world!", text);
    }

    #[test]
    fn test_clear_resets_size() {
        let mut text = TextBuffer::from("abc");
        text.clear();
        assert_eq!(0, text.size());
        assert!(text.is_empty());
        text.append(b"z");
        assert_eq!("z", text);
    }

    #[test]
    fn test_at() {
        let text = TextBuffer::from("abc");
        assert_eq!(b'b', text.at(1));
        let diagnostic = catch_fatal(|| text.at(3)).unwrap_err();
        assert_eq!("[claw panicked]: index out of bounds: the len is 3 but the index is 3", diagnostic);
    }

    #[test]
    fn test_slice_and_substr() {
        let text = TextBuffer::from("runtime");
        assert_eq!("unt", text.slice(1, 4));
        assert_eq!("unt", text.substr(1, 3));
        assert_eq!("", text.slice(4, 4));
        assert_eq!("", text.slice(5, 2));
        assert!(catch_fatal(|| text.slice(2, 8)).is_err());
    }

    #[test]
    fn test_rev() {
        assert_eq!("cba", TextBuffer::from("abc").rev());
        assert_eq!("", TextBuffer::empty().rev());
    }

    #[test]
    fn test_find() {
        let text = TextBuffer::from("banana");
        assert_eq!(Optional::of(1), text.find(b'a'));
        assert_eq!(Optional::none(), text.find(b'z'));
    }

    #[test]
    fn test_eq() {
        let text = TextBuffer::from("abc");
        assert!(text.eq(b"abc"));
        assert!(!text.eq(b"abd"));
        assert!(!text.eq(b"ab"));
        assert_eq!(TextBuffer::from("abc"), text);
    }

    #[test]
    fn test_equal_buffers_hash_equal() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(text: &TextBuffer) -> u64 {
            let mut hasher = DefaultHasher::new();
            text.hash(&mut hasher);
            hasher.finish()
        }

        let mut grown = TextBuffer::with_capacity(64);
        grown.append(b"abc");
        let exact = TextBuffer::from("abc");
        assert_eq!(exact, grown);
        assert_eq!(hash_of(&exact), hash_of(&grown));
        assert_ne!(hash_of(&exact), hash_of(&TextBuffer::from("abd")));
    }

    #[test]
    fn test_case_mapping() {
        let text = TextBuffer::from("Hello, World 42!");
        assert_eq!("HELLO, WORLD 42!", text.to_upper());
        assert_eq!("hello, world 42!", text.to_lower());
        assert_eq!("Hello, World 42!", text);
    }

    #[test]
    fn test_concat() {
        let text = TextBuffer::from("foo");
        assert_eq!("foobar", text.concat(b"bar"));
        assert_eq!("foo", text);
    }

    #[test]
    fn test_str_view() {
        assert_eq!(Ok("ok"), TextBuffer::from("ok").as_str());
        assert!(TextBuffer::new(&[0xff, 0xfe]).as_str().is_err());
    }

    #[cfg(not(miri))]
    mod proptests {
        use crate::TextBuffer;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn appends_concatenate(
                a in proptest::collection::vec(any::<u8>(), 0..64),
                b in proptest::collection::vec(any::<u8>(), 0..64),
            ) {
                let mut text = TextBuffer::empty();
                text.append(&a);
                text.append(&b);
                let mut expected = a.clone();
                expected.extend_from_slice(&b);
                prop_assert_eq!(a.len() + b.len(), text.size());
                prop_assert_eq!(&expected[..], text.as_bytes());
            }

            #[test]
            fn rev_is_an_involution(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
                let text = TextBuffer::new(&bytes);
                prop_assert_eq!(text.clone(), text.rev().rev());
            }

            #[test]
            fn upper_of_lower_uppercases_letters_only(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
                let text = TextBuffer::new(&bytes).to_lower().to_upper();
                prop_assert_eq!(bytes.len(), text.size());
                for (byte, mapped) in bytes.iter().zip(text.as_bytes()) {
                    if byte.is_ascii_alphabetic() {
                        prop_assert_eq!(byte.to_ascii_uppercase(), *mapped);
                    } else {
                        prop_assert_eq!(*byte, *mapped);
                    }
                }
            }

            #[test]
            fn substr_matches_slice(
                (bytes, start, len) in (1usize..64)
                    .prop_flat_map(|n| (proptest::collection::vec(any::<u8>(), n), 0..=n))
                    .prop_flat_map(|(bytes, start)| {
                        let n = bytes.len();
                        (Just(bytes), Just(start), 0..=n - start)
                    }),
            ) {
                let text = TextBuffer::new(&bytes);
                prop_assert_eq!(text.slice(start, start + len), text.substr(start, len));
            }
        }
    }
}
