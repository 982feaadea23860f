//! Links built from raw source text.
//!
//! Some errors are reported before a usable tree exists. For those the
//! caller passes the source text up to and including the error line.

use super::Query;

/// Characters that may continue an identifier.
pub(crate) fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Link for a `}` that closes nothing.
///
/// The last `}` in `text` is the extra one. The block closed by the `}`
/// before it is shown with its body elided, once with the extra brace
/// (`original`) and once without (`fixed`).
pub(crate) fn extraneous_closing_brace(text: &str) -> Option<Query> {
    let end = text.rfind('}')?;
    let right = text[..end].rfind('}')?;
    let left = matching_open(text, right)?;

    // Include the line above the block header.
    let header_start = match text[..left].rfind('\n') {
        Some(nl) if nl > 0 => text[..nl].rfind('\n').map_or(0, |prev| prev + 1),
        Some(nl) => nl + 1,
        None => 0,
    };

    let original = format!(
        "{}\n  /* your code */\n{}",
        &text[header_start..=left],
        &text[right..=end]
    );
    let fixed = original[..original.len() - 1].to_string();

    Some(
        Query::new("extraneousclosingcurlybrace")
            .param("original", original)
            .param("fixed", fixed),
    )
}

/// Link for a malformed method header.
///
/// The method name is the identifier right before the last `(`.
pub(crate) fn incorrect_method_declaration(text: &str) -> Option<Query> {
    let open = text.rfind('(')?;
    let before = &text[..open];
    let start = before
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_identifier_part(c))
        .map_or(0, |(i, c)| i + c.len_utf8());

    let name = &before[start..];
    if name.is_empty() {
        return None;
    }
    Some(Query::new("incorrectmethoddeclaration").param("methodname", name))
}

/// Index of the `{` or `(` matching the closer at `close`, scanning back.
fn matching_open(text: &str, close: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 1_usize;
    let mut i = close;
    while depth > 0 && i > 0 {
        i -= 1;
        match bytes[i] {
            b'{' | b'(' => depth -= 1,
            b'}' | b')' => depth += 1,
            _ => {}
        }
    }
    (depth == 0).then_some(i)
}

#[cfg(test)]
mod tests;
