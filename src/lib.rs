//! Runtime library for compiler-generated code: growable arrays, optionals,
//! tagged results, text buffers and a bump arena, plus the fatal-error channel
//! they all report contract violations through.
//!
//! Everything here is single-threaded. Growing a container may move its
//! buffer, so generated code should hold on to indices and `Offset`s, not to
//! addresses.

mod logging;
mod buffer;
pub mod config;
pub mod fatal;
mod optional;
mod result;
mod array;
mod list;
mod bump;
mod text;
pub mod format;
pub mod generic;
mod traits;

pub use config::{RuntimeConfig, Termination};
pub use fatal::Violation;
pub use optional::Optional;
pub use result::ResultOf;
pub use array::Array;
pub use list::FixedList;
pub use bump::{BumpAllocator, Offset};
pub use text::TextBuffer;
pub use format::{format, Arg, FormatError};
pub use generic::{ElementType, Family, Instantiation, Registry};
pub use traits::ClawIterator;

#[cfg(test)]
pub mod testing;
