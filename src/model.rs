use std::{fmt};

use log::{trace};

use super::{render, Error, Result};

mod list;
pub use list::{List, Iter};

/// The discriminator of a [`Value`].
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tag {
    Object,
    Integer,
    Str,
    List,
}

impl Tag {
    /// The name by which the type is known, e.g. in the rendering of an
    /// object.
    pub fn name(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Integer => "integer",
            Self::Str => "string",
            Self::List => "list",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

// ----------------------------------------------------------------------------

/// A dynamically typed value.
///
/// The payload always matches the [`Tag`] because the tag is the enum
/// discriminant. Each `Value` exclusively owns its payload: cloning a list
/// clones every element.
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// A plain object, with no state beyond its type.
    Object,

    /// A signed integer. Arithmetic on it wraps.
    Integer(i64),

    /// An immutable string.
    Str(Box<str>),

    /// A sequence of `Value`s.
    List(List),
}

impl Value {
    pub fn tag(&self) -> Tag {
        match self {
            Self::Object => Tag::Object,
            Self::Integer(_) => Tag::Integer,
            Self::Str(_) => Tag::Str,
            Self::List(_) => Tag::List,
        }
    }

    /// Returns `Err(TypeMismatch)` unless `self` has tag `expected`.
    pub fn expect_tag(&self, expected: Tag) -> Result<()> {
        let found = self.tag();
        if found == expected { Ok(()) } else { Err(Error::TypeMismatch {expected, found}) }
    }

    /// Returns the payload of an `Integer`.
    pub fn as_integer(&self) -> Result<i64> {
        if let Self::Integer(i) = self { Ok(*i) } else { Err(self.mismatch(Tag::Integer)) }
    }

    /// Returns the payload of a `List`.
    pub fn as_list(&self) -> Result<&List> {
        if let Self::List(list) = self { Ok(list) } else { Err(self.mismatch(Tag::List)) }
    }

    fn mismatch(&self, expected: Tag) -> Error {
        Error::TypeMismatch {expected, found: self.tag()}
    }

    /// Assert that `self` is an `Integer`.
    pub fn integer(&self) -> i64 {
        let Self::Integer(ret) = self else { panic!("{:?} is not an integer", self); };
        *ret
    }

    /// Assert that `self` is a `Str`.
    pub fn string(&self) -> &str {
        let Self::Str(ret) = self else { panic!("{:?} is not a string", self); };
        ret
    }

    /// Assert that `self` is a `List`.
    pub fn list(&self) -> &List {
        let Self::List(ret) = self else { panic!("{:?} is not a list", self); };
        ret
    }

    /// Assert that `self` is a `List`.
    pub fn list_mut(&mut self) -> &mut List {
        match self {
            Self::List(ret) => ret,
            other => panic!("{:?} is not a list", other),
        }
    }

    /// Release `self` and everything it owns. Lists release their elements
    /// first.
    pub fn destroy(self) {
        trace!("destroy {}", self.tag());
        match self {
            Self::List(list) => list.destroy(),
            Self::Object | Self::Integer(_) | Self::Str(_) => {},
        }
    }

    /// Assert that `self` is an `Object`, then destroy it.
    pub fn destroy_object(self) { self.destroy_as(Tag::Object) }

    /// Assert that `self` is an `Integer`, then destroy it.
    pub fn destroy_integer(self) { self.destroy_as(Tag::Integer) }

    /// Assert that `self` is a `Str`, then destroy it.
    pub fn destroy_str(self) { self.destroy_as(Tag::Str) }

    /// Assert that `self` is a `List`, then destroy it.
    pub fn destroy_list(self) { self.destroy_as(Tag::List) }

    fn destroy_as(self, expected: Tag) {
        assert_eq!(self.tag(), expected, "destroyed {:?} as {}", self, expected);
        self.destroy();
    }
}

impl std::default::Default for Value {
    fn default() -> Self { Value::Object }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        render::walk(f, self, ", ", None, |f, leaf| match leaf {
            Self::Integer(i) => fmt::Debug::fmt(i, f),
            Self::Str(s) => fmt::Debug::fmt(s, f),
            _ => f.write_str(leaf.tag().name()),
        }).map_err(|_| fmt::Error)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self { Self::Integer(value) }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self { Self::Str(value.into()) }
}

impl From<String> for Value {
    fn from(value: String) -> Self { Self::Str(value.into_boxed_str()) }
}

impl From<List> for Value {
    fn from(value: List) -> Self { Self::List(value) }
}

// ----------------------------------------------------------------------------

/// Constructs an `Object`.
pub fn make_object() -> Value { Value::Object }

/// Constructs an `Integer`.
pub fn make_integer(i: i64) -> Value { Value::Integer(i) }

/// Constructs a `Str`.
pub fn make_str(s: &str) -> Value { Value::from(s) }

/// Constructs an empty `List`.
pub fn make_list() -> Value { Value::List(List::new()) }

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(make_object().tag(), Tag::Object);
        assert_eq!(make_integer(3).tag(), Tag::Integer);
        assert_eq!(make_str("x").tag(), Tag::Str);
        assert_eq!(make_list().tag(), Tag::List);
        assert_eq!(Tag::Str.to_string(), "string");
    }

    #[test]
    fn checked_access() {
        assert_eq!(make_integer(-7).as_integer(), Ok(-7));
        assert_eq!(
            make_object().as_integer(),
            Err(Error::TypeMismatch {expected: Tag::Integer, found: Tag::Object}),
        );
        assert!(make_list().as_list().unwrap().is_empty());
        assert!(make_str("a").expect_tag(Tag::List).is_err());
    }

    #[test]
    fn destroy_matching() {
        make_object().destroy_object();
        make_integer(1).destroy_integer();
        make_str("s").destroy_str();
        let mut list = make_list();
        list.list_mut().append(&make_integer(1));
        list.destroy_list();
    }

    #[test]
    #[should_panic(expected = "destroyed 5 as list")]
    fn destroy_mismatch() {
        make_integer(5).destroy_list();
    }

    #[test]
    #[should_panic(expected = "is not an integer")]
    fn assert_integer() {
        make_object().integer();
    }

    #[test]
    fn clone_is_independent() {
        let mut outer = make_list();
        outer.list_mut().append(&make_integer(1));
        let copy = outer.clone();
        outer.list_mut().append(&make_integer(2));
        assert_eq!(copy.list().len(), 1);
        assert_eq!(outer.list().len(), 2);
        assert_ne!(copy, outer);
    }

    #[test]
    fn debug() {
        let mut list = make_list();
        list.list_mut().append(&make_str("a"));
        list.list_mut().append(&make_object());
        assert_eq!(format!("{:?}", list), "[\"a\", object]");
    }
}
