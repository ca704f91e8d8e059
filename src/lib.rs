//! A tagged dynamic-object model: every value is an object, an integer, a
//! string or a list of values.

mod error;
pub use error::{Error, Result};

pub mod model;
pub use model::{Tag, Value, List, make_object, make_integer, make_str, make_list};

pub mod built_in;
pub use built_in::{add_integers, range};

pub mod render;
pub use render::{Render, Identity, str, identity};
