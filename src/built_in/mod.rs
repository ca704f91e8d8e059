use std::collections::{HashMap};
use std::sync::{OnceLock};
use std::{fmt};

use super::{model, Error, Result};
use model::{Value, List};

type Binary = &'static (dyn Fn(i64, i64) -> i64 + Sync);

/// A table of the methods of a built-in type.
pub struct BuiltIn {
    name: &'static str,
    binary: HashMap<&'static str, Binary>,
}

impl BuiltIn {
    /// Apply the binary method `method` to `x` and `y`.
    ///
    /// Panics if there is no such method.
    pub fn call(&self, method: &str, x: &Value, y: &Value) -> Result<Value> {
        let binary = self.binary.get(method).unwrap_or_else(|| {
            panic!("{} has no binary method {}", self.name, method)
        });
        Ok(Value::Integer(binary(x.as_integer()?, y.as_integer()?)))
    }
}

impl fmt::Debug for BuiltIn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name) }
}

// ----------------------------------------------------------------------------

mod integer;
pub use integer::{compile_integer};

/// The method table for type `Integer`, compiled on first use.
pub fn integer() -> &'static BuiltIn {
    static INTEGER: OnceLock<BuiltIn> = OnceLock::new();
    INTEGER.get_or_init(compile_integer)
}

/// Returns a new `Integer` holding `a + b`, wrapping on overflow.
pub fn add_integers(a: &Value, b: &Value) -> Result<Value> {
    integer().call("ADD", a, b)
}

/// Returns a `List` of the `Integer`s from `start` (inclusive) to `stop`
/// (exclusive) in steps of `step`, like Python's `range()`.
pub fn range(start: i64, stop: i64, step: i64) -> Result<Value> {
    if step == 0 { return Err(Error::ZeroStep); }
    let mut list = List::new();
    let mut i = start;
    while (step > 0 && i < stop) || (step < 0 && i > stop) {
        list.append(&Value::Integer(i));
        let Some(next) = i.checked_add(step) else { break };
        i = next;
    }
    Ok(Value::List(list))
}

// ----------------------------------------------------------------------------
