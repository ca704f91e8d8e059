//! Renders [`Value`]s as text.
//!
//! The grammar is:
//! - `Object` renders as `object`.
//! - `Integer` renders in decimal, with a `-` sign if negative.
//! - `Str` renders as its contents.
//! - `List` renders as its elements' renderings, separated by commas and
//!   enclosed in square brackets, e.g. `[1,[2,3],object]`.

use std::fmt::{self, Write};

use arrayvec::{ArrayString};
use log::{debug};

use super::{model, Error, Result};
use model::{Value, Iter};

/// Renders [`Value`]s.
///
/// By default the nesting depth is unbounded. Setting `max_depth` refuses
/// to render values containing more than that many nested lists.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Render {
    pub max_depth: Option<usize>,
}

impl Render {
    /// Returns a `Render` that refuses to nest deeper than `max_depth` lists.
    pub fn bounded(max_depth: usize) -> Self { Self {max_depth: Some(max_depth)} }

    /// Returns a new `String` containing the rendering of `value`.
    pub fn str(&self, value: &Value) -> Result<String> {
        let mut buffer = String::new();
        self.write(&mut buffer, value).map_err(|e| {
            debug!("Failed to render {}: {}", value.tag(), e);
            e
        })?;
        Ok(buffer)
    }

    /// Appends the rendering of `value` to `out`.
    ///
    /// On error, `out` may contain a partial rendering.
    pub fn write(&self, out: &mut impl Write, value: &Value) -> Result<()> {
        walk(out, value, ",", self.max_depth, |out, leaf| match leaf {
            Value::Integer(i) => write!(out, "{}", i),
            Value::Str(s) => out.write_str(s),
            _ => out.write_str(leaf.tag().name()),
        })
    }
}

/// A partly written `List`.
struct Frame<'a> {
    elements: Iter<'a>,
    started: bool,
}

/// Writes `value` to `out`, bracketing lists and separating their elements
/// with `separator`, and passing every other `Value` to `leaf`.
///
/// Nested lists are tracked on an explicit stack, so the depth of `value` is
/// limited only by `max_depth`.
pub(crate) fn walk<'a, W: Write>(
    out: &mut W,
    value: &'a Value,
    separator: &str,
    max_depth: Option<usize>,
    mut leaf: impl FnMut(&mut W, &Value) -> fmt::Result,
) -> Result<()> {
    let mut stack: Vec<Frame<'a>> = Vec::new();
    let mut value = value;
    loop {
        if let Value::List(list) = value {
            if let Some(limit) = max_depth {
                if stack.len() >= limit { return Err(Error::DepthExceeded {limit}); }
            }
            out.write_char('[')?;
            stack.push(Frame {elements: list.iter(), started: false});
        } else {
            leaf(out, value)?;
        }
        value = loop {
            let Some(frame) = stack.last_mut() else { return Ok(()); };
            if let Some(element) = frame.elements.next() {
                if frame.started { out.write_str(separator)?; }
                frame.started = true;
                break element;
            }
            out.write_char(']')?;
            stack.pop();
        };
    }
}

/// Returns a new `String` containing the rendering of `value`.
pub fn str(value: &Value) -> String {
    Render::default().str(value).expect("Unbounded rendering into a String failed")
}

// ----------------------------------------------------------------------------

/// The length of an [`Identity`]: `0x` followed by up to 16 hex digits.
pub const IDENTITY_LEN: usize = 18;

/// The address of a [`Value`] in hexadecimal, e.g. `0x7ffd5c3e9a10`.
pub type Identity = ArrayString<IDENTITY_LEN>;

/// Returns text unique to the storage of `value`, while it lives.
///
/// Two live `Value`s never have the same `Identity`, but a `Value` that is
/// moved changes its `Identity`. Use only for display.
pub fn identity(value: &Value) -> Identity {
    let mut ret = Identity::new();
    write!(ret, "{:p}", value).expect("Address too long");
    ret
}

impl fmt::Display for Value {
    /// Only fails if `f` does.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Render::default().write(f, self).map_err(|_| fmt::Error)
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use model::{make_object, make_integer, make_str, make_list, List};
    use crate::built_in::{add_integers, range};

    fn list(values: &[Value]) -> Value {
        Value::List(values.iter().cloned().collect())
    }

    #[test]
    fn object() {
        assert_eq!(str(&make_object()), "object");
    }

    #[test]
    fn integers() {
        assert_eq!(str(&make_integer(-42)), "-42");
        assert_eq!(str(&make_integer(0)), "0");
        assert_eq!(str(&make_integer(7)), "7");
        assert_eq!(str(&make_integer(i64::MIN)), "-9223372036854775808");
    }

    #[test]
    fn strings() {
        assert_eq!(str(&make_str("ayy lmao")), "ayy lmao");
        assert_eq!(str(&make_str("")), "");
    }

    #[test]
    fn empty_list() {
        assert_eq!(str(&make_list()), "[]");
    }

    #[test]
    fn separators() {
        assert_eq!(str(&list(&[make_integer(1)])), "[1]");
        assert_eq!(str(&list(&[make_integer(1), make_integer(2)])), "[1,2]");
        let mut value = make_list();
        for i in 1..=3 { value.list_mut().append(&make_integer(i)); }
        assert_eq!(str(&value), "[1,2,3]");
    }

    #[test]
    fn nested() {
        let inner = list(&[make_integer(1), make_integer(2)]);
        assert_eq!(str(&list(&[inner, make_integer(3)])), "[[1,2],3]");
        assert_eq!(str(&list(&[make_list(), make_list()])), "[[],[]]");
        let mixed = list(&[make_integer(100), make_object(), make_str("s")]);
        assert_eq!(str(&mixed), "[100,object,s]");
    }

    #[test]
    fn prepended() {
        let mut value = make_list();
        value.list_mut().prepend(&make_integer(100));
        value.list_mut().append(&make_object());
        assert_eq!(str(&value), "[100,object]");
    }

    #[test]
    fn sum() {
        let sum = add_integers(&make_integer(9), &make_integer(8)).unwrap();
        assert_eq!(str(&sum), "17");
    }

    #[test]
    fn range_rendering() {
        assert_eq!(str(&range(0, 10, 1).unwrap()), "[0,1,2,3,4,5,6,7,8,9]");
    }

    /// `depth` lists, each containing the next, around `0`.
    fn nest(depth: usize) -> Value {
        let mut value = make_integer(0);
        for _ in 0..depth { value = Value::List(List::from_iter([value])); }
        value
    }

    #[test]
    fn depth_limit() {
        let value = nest(3);
        assert_eq!(Render::bounded(3).str(&value).unwrap(), "[[[0]]]");
        assert_eq!(Render::bounded(2).str(&value), Err(Error::DepthExceeded {limit: 2}));
        assert_eq!(Render::bounded(0).str(&make_integer(5)).unwrap(), "5");
    }

    #[test]
    fn deep_nesting() {
        let depth = 100_000;
        let value = nest(depth);
        let expected = format!("{}0{}", "[".repeat(depth), "]".repeat(depth));
        assert_eq!(str(&value), expected);
        assert_eq!(value.to_string(), expected);
        assert_eq!(Render::default().str(&value).unwrap(), expected);
    }

    #[test]
    fn deep_debug() {
        let mut value = nest(300);
        value.list_mut().append(&make_str("s"));
        let expected = format!("{}0{}, \"s\"]", "[".repeat(300), "]".repeat(299));
        assert_eq!(format!("{:?}", value), expected);
    }

    #[test]
    fn refusing_writer() {
        /// Accepts `room` bytes, then fails.
        struct Short { room: usize }
        impl Write for Short {
            fn write_str(&mut self, s: &str) -> fmt::Result {
                self.room = self.room.checked_sub(s.len()).ok_or(fmt::Error)?;
                Ok(())
            }
        }
        let value = nest(4);
        assert_eq!(Render::default().write(&mut Short {room: 3}, &value), Err(Error::Format));
        assert_eq!(Render::default().write(&mut Short {room: 9}, &value), Ok(()));
    }

    #[test]
    fn display() {
        let value = list(&[make_integer(-1), make_str("a")]);
        assert_eq!(value.to_string(), "[-1,a]");
        assert_eq!(format!("<{}>", make_object()), "<object>");
    }

    #[test]
    fn identities() {
        let a = make_object();
        let b = make_object();
        let id_a = identity(&a);
        assert!(id_a.starts_with("0x"));
        assert_eq!(id_a, identity(&a));
        assert_ne!(id_a, identity(&b));
    }
}
