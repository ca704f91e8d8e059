use std::{fmt};

use super::{Tag};

/// A recoverable failure of an operation on [`Value`]s.
///
/// Invariant violations, such as destroying a `Value` as the wrong type, are
/// not `Error`s. They panic.
///
/// [`Value`]: super::Value
#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// An operand had tag `found` where `expected` was required.
    TypeMismatch { expected: Tag, found: Tag },

    /// An index was not less than the length of the list.
    IndexOutOfRange { index: usize, length: usize },

    /// Rendering nested deeper than `limit` lists.
    DepthExceeded { limit: usize },

    /// `range()` was called with a step of zero.
    ZeroStep,

    /// A caller-supplied writer refused rendered text.
    Format,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self) }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;
        match self {
            TypeMismatch { expected, found } =>
                write!(f, "TypeMismatch: expected {}, found {}", expected, found),
            IndexOutOfRange { index, length } =>
                write!(f, "IndexOutOfRange: index {} but length {}", index, length),
            DepthExceeded { limit } =>
                write!(f, "DepthExceeded: lists nested deeper than {}", limit),
            ZeroStep => f.write_str("ZeroStep: range() step must not be zero"),
            Format => f.write_str("Format: the writer refused rendered text"),
        }
    }
}

impl std::error::Error for Error {}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self { Self::Format }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = Error::TypeMismatch { expected: Tag::Integer, found: Tag::Object };
        assert_eq!(e.to_string(), "TypeMismatch: expected integer, found object");
        let e = Error::IndexOutOfRange { index: 3, length: 3 };
        assert_eq!(format!("{:?}", e), "IndexOutOfRange: index 3 but length 3");
    }
}
