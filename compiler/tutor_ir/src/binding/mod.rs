//! Resolved type and method bindings.
//!
//! The front end attaches these to nodes after name resolution. The hint
//! engine treats them as facts: it never computes or widens a type itself.

use std::fmt;

/// A resolved type, as the front end names it.
///
/// `name` is the element type name (possibly qualified, e.g.
/// `java.lang.String`); `dimensions` counts array brackets.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeBinding {
    name: String,
    dimensions: u32,
}

impl TypeBinding {
    /// A non-array type.
    pub fn new(name: impl Into<String>) -> Self {
        TypeBinding {
            name: name.into(),
            dimensions: 0,
        }
    }

    /// An array of `element` with the given number of dimensions.
    pub fn array(element: impl Into<String>, dimensions: u32) -> Self {
        TypeBinding {
            name: element.into(),
            dimensions,
        }
    }

    /// Full type name including array brackets, e.g. `int[][]`.
    pub fn name(&self) -> String {
        let mut name = self.name.clone();
        for _ in 0..self.dimensions {
            name.push_str("[]");
        }
        name
    }

    /// Element type name without brackets.
    pub fn element_name(&self) -> &str {
        &self.name
    }

    /// Number of array dimensions (0 for non-arrays).
    pub fn dimensions(&self) -> u32 {
        self.dimensions
    }

    /// Check if this is an array type.
    pub fn is_array(&self) -> bool {
        self.dimensions > 0
    }
}

impl fmt::Display for TypeBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for _ in 0..self.dimensions {
            f.write_str("[]")?;
        }
        Ok(())
    }
}

/// A resolved method signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodBinding {
    pub return_type: TypeBinding,
    pub parameter_types: Vec<TypeBinding>,
}

impl MethodBinding {
    /// Create a new method binding.
    pub fn new(return_type: TypeBinding, parameter_types: Vec<TypeBinding>) -> Self {
        MethodBinding {
            return_type,
            parameter_types,
        }
    }
}
