//! Demo values for code examples.
//!
//! Examples read better with concrete literals (`int count = 42;`) than with
//! placeholders. Values are random so repeated views of a hint vary a little;
//! the randomness source is injected so tests can pin it down.

use rand::{Rng, RngCore};

/// Letters used for `char` demo values. `w` is left out.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'x', 'y', 'z',
];

/// The one `String` demo value. Random text could read as nonsense or worse.
const STRING_VALUE: &str = "\"hello world\"";

/// Outer size of demo array creations.
const ARRAY_SIZE: usize = 5;

/// Synthesizes literal expressions for a named type.
pub struct DemoValues<'r> {
    rng: &'r mut dyn RngCore,
}

impl<'r> DemoValues<'r> {
    /// Create a synthesizer drawing from `rng`.
    pub fn new(rng: &'r mut dyn RngCore) -> Self {
        DemoValues { rng }
    }

    /// A literal or expression of type `ty`.
    ///
    /// Never empty: array types get a sized creation, unknown types fall
    /// back to `new <ty>()`, and an empty type name to `new Object()`.
    pub fn value(&mut self, ty: &str) -> String {
        match ty {
            "byte" | "short" | "int" | "long" => self.rng.gen_range(0..100_u32).to_string(),
            "float" | "double" => format!("{:.2}", self.rng.gen::<f64>() * 10.0),
            "boolean" => self.rng.gen_bool(0.5).to_string(),
            "char" => ALPHABET[self.rng.gen_range(0..ALPHABET.len())].to_string(),
            "String" => STRING_VALUE.to_string(),
            array if array.ends_with("[]") => Self::array_creation(array),
            "" => "new Object()".to_string(),
            other => format!("new {other}()"),
        }
    }

    /// `new T[5]` for `T[]`, with the outer size only: `new T[5][]` for
    /// `T[][]`.
    fn array_creation(ty: &str) -> String {
        let bare = ty.trim_end_matches("[]");
        let inner = (ty.len() - bare.len()) / 2 - 1;
        let element = if bare.is_empty() { "Object" } else { bare };
        format!("new {element}[{ARRAY_SIZE}]{}", "[]".repeat(inner))
    }

    /// `ty name = <value>;`
    pub fn declaration(&mut self, ty: &str, name: &str) -> String {
        self.declaration_with_value(ty, name, ty)
    }

    /// `declared name = <value of value_ty>;`, for showing a mismatch.
    pub fn declaration_with_value(&mut self, declared: &str, name: &str, value_ty: &str) -> String {
        let value = self.value(value_ty);
        format!("{declared} {name} = {value};")
    }

    /// `{v1, v2, ...}` with `size` values of type `ty`.
    pub fn initializer_list(&mut self, ty: &str, size: usize) -> String {
        let values: Vec<String> = (0..size).map(|_| self.value(ty)).collect();
        format!("{{{}}}", values.join(", "))
    }

    /// `name(v1, v2)` with one value per parameter type.
    pub fn method_call(&mut self, name: &str, parameter_types: &[String]) -> String {
        let values: Vec<String> = parameter_types.iter().map(|ty| self.value(ty)).collect();
        format!("{name}({})", values.join(", "))
    }
}

#[cfg(test)]
mod tests;
