//! Pure text helpers shared by hint and link strategies.

use std::borrow::Cow;

/// Primitive type keywords.
const PRIMITIVES: &[&str] = &[
    "byte", "short", "int", "long", "float", "double", "boolean", "char",
];

/// `name(A, B)`
pub fn method_signature(name: &str, parameter_types: &[String]) -> String {
    format!("{name}({})", parameter_types.join(", "))
}

/// `ret name(A param1, B param2)`
pub fn method_declaration(name: &str, return_type: &str, parameter_types: &[String]) -> String {
    let params: Vec<String> = parameter_types
        .iter()
        .enumerate()
        .map(|(i, ty)| format!("{ty} param{}", i + 1))
        .collect();
    format!("{return_type} {name}({})", params.join(", "))
}

/// How a variable of type `ty` is described in prose.
///
/// Primitives and `String` read as "int-type variable"; every other type as
/// "Float object".
pub fn var_description(ty: &str) -> String {
    if PRIMITIVES.contains(&ty) || ty == "String" {
        format!("{ty}-type variable")
    } else {
        format!("{ty} object")
    }
}

/// Strip package qualifiers: `java.lang.Float` becomes `Float`.
///
/// Type arguments are shortened too, so
/// `java.util.ArrayList<java.lang.Integer>` becomes `ArrayList<Integer>`.
pub fn simple_name(qualified: &str) -> Cow<'_, str> {
    if !qualified.contains('<') {
        return Cow::Borrowed(last_segment(qualified));
    }

    let mut out = String::with_capacity(qualified.len());
    let mut start = 0;
    for (i, c) in qualified.char_indices() {
        if !is_qualified_name_char(c) {
            out.push_str(last_segment(&qualified[start..i]));
            out.push(c);
            start = i + c.len_utf8();
        }
    }
    out.push_str(last_segment(&qualified[start..]));
    Cow::Owned(out)
}

fn last_segment(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => name,
    }
}

fn is_qualified_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '$' | '.')
}

#[cfg(test)]
mod tests;
