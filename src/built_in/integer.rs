use super::{Binary, BuiltIn};

/// Integer arithmetic wraps on overflow, as two's complement.
const BINARY: [(&'static str, Binary); 3] = [
    ("ADD", &|x, y| x.wrapping_add(y)),
    ("SUB", &|x, y| x.wrapping_sub(y)),
    ("MUL", &|x, y| x.wrapping_mul(y)),
];

/// Constructs the method table for type `Integer`.
pub fn compile_integer() -> BuiltIn {
    BuiltIn {
        name: "Integer",
        binary: BINARY.iter().copied().collect(),
    }
}
