//! Template formatting for generated code.
//!
//! Placeholders are `{s}` (text), `{d}` (integer), `{p}` (address) and `{c}`
//! (single byte); `{{` renders a literal `{`. Arguments are consumed in order.

use std::fmt::{self, Display};
use std::io::Write;

use crate::config::RuntimeConfig;
use crate::TextBuffer;

/// One positional argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Arg<'a> {
    Str(&'a [u8]),
    Int(i64),
    Ptr(usize),
    Char(u8),
}

impl<'a> Arg<'a> {
    fn placeholder(&self) -> char {
        match self {
            Arg::Str(_) => 's',
            Arg::Int(_) => 'd',
            Arg::Ptr(_) => 'p',
            Arg::Char(_) => 'c',
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Arg::Str(value.as_bytes())
    }
}

impl<'a> From<&'a TextBuffer> for Arg<'a> {
    fn from(value: &'a TextBuffer) -> Self {
        Arg::Str(value.as_bytes())
    }
}

impl<'a> From<i64> for Arg<'a> {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl<'a> From<i32> for Arg<'a> {
    fn from(value: i32) -> Self {
        Arg::Int(value as i64)
    }
}

impl<'a, T> From<*const T> for Arg<'a> {
    fn from(value: *const T) -> Self {
        Arg::Ptr(value as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormatError {
    /// Placeholder number `index` has no argument.
    MissingArgument { index: usize, placeholder: char },
    /// Argument number `index` does not fit its placeholder.
    MismatchedArgument { index: usize, expected: char, found: char },
}

impl Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingArgument { index, placeholder } => write!(f, "no argument for placeholder {{{}}} at position {}", placeholder, index),
            FormatError::MismatchedArgument { index, expected, found } => write!(f, "argument {} is {{{}}} but placeholder expects {{{}}}", index, found, expected),
        }
    }
}

impl std::error::Error for FormatError {}

/// Renders `template` with `args` into a new buffer.
///
/// An unknown placeholder `{x` renders as `{?` and swallows `x`. Unused
/// arguments are ignored.
pub fn format(template: &[u8], args: &[Arg<'_>]) -> Result<TextBuffer, FormatError> {
    let mut out = Vec::new();
    crate::buffer::reserve_total(&mut out, RuntimeConfig::current().format_capacity);
    let mut next_arg = 0;
    let mut i = 0;

    while i < template.len() {
        let byte = template[i];
        if byte != b'{' {
            out.push(byte);
            i += 1;
            continue;
        }

        let kind = template.get(i + 1).copied();
        let closed = template.get(i + 2) == Some(&b'}');
        match kind {
            Some(b'{') => {
                out.push(b'{');
                i += 2;
            },
            Some(placeholder @ b's') | Some(placeholder @ b'd') | Some(placeholder @ b'p') | Some(placeholder @ b'c') if closed => {
                let arg = args.get(next_arg).ok_or(FormatError::MissingArgument {
                    index: next_arg,
                    placeholder: placeholder as char,
                })?;
                write_arg(&mut out, placeholder, *arg, next_arg)?;
                next_arg += 1;
                i += 3;
            },
            Some(_) => {
                out.extend_from_slice(b"{?");
                i += 2;
            },
            None => {
                out.push(b'{');
                i += 1;
            },
        }
    }

    if next_arg < args.len() {
        debug!("format ignored {} unused arguments", args.len() - next_arg);
    }
    Ok(TextBuffer::from(out))
}

fn write_arg(out: &mut Vec<u8>, placeholder: u8, arg: Arg<'_>, index: usize) -> Result<(), FormatError> {
    match (placeholder, arg) {
        (b's', Arg::Str(text)) => out.extend_from_slice(text),
        (b'd', Arg::Int(value)) => write_infallible(out, format_args!("{}", value)),
        (b'p', Arg::Ptr(address)) => write_infallible(out, format_args!("{:#x}", address)),
        (b'c', Arg::Char(byte)) => out.push(byte),
        (expected, found) => return Err(FormatError::MismatchedArgument {
            index,
            expected: expected as char,
            found: found.placeholder(),
        }),
    }
    Ok(())
}

#[inline(always)]
fn write_infallible(out: &mut Vec<u8>, args: fmt::Arguments<'_>) {
    // writing into a Vec never fails
    let _ = out.write_fmt(args);
}
