use crate::fatal::{self, Violation};

/// A value that may be absent.
///
/// Returned by the non-panicking lookups (`Array::get`, `TextBuffer::find`).
/// Unwrapping an absent value is a contract violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// A present value.
    #[inline(always)]
    pub fn of(value: T) -> Optional<T> {
        Optional { value: Some(value) }
    }

    #[inline(always)]
    pub fn none() -> Optional<T> {
        Optional { value: None }
    }

    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    #[inline(always)]
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the value, or fails fatally if it is absent.
    pub fn unwrap(self) -> T {
        match self.value {
            Some(value) => value,
            None => fatal::violation(Violation::BadUnwrap { what: "option" }),
        }
    }

    /// Returns the value, or fails fatally with `message` if it is absent.
    pub fn expect(self, message: &str) -> T {
        match self.value {
            Some(value) => value,
            None => fatal::violation(Violation::Message(message.to_string())),
        }
    }

    pub fn unwrap_or(self, default: T) -> T {
        self.value.unwrap_or(default)
    }

    pub fn as_ref(&self) -> Optional<&T> {
        Optional { value: self.value.as_ref() }
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Optional::none()
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        Optional { value }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.value
    }
}
