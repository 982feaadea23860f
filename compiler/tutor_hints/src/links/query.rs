//! Reference paths and their query parameters.

use std::fmt::Write;

/// An unencoded reference path with ordered parameters.
///
/// Strategies build a `Query`; the assembler encodes it and appends global
/// options.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Query {
    path: &'static str,
    params: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new(path: &'static str) -> Self {
        Query {
            path,
            params: Vec::new(),
        }
    }

    /// Append a parameter. Order is kept.
    #[must_use]
    pub fn param(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.params.push((key, value.into()));
        self
    }

    /// Append a list parameter, joined with `,` before encoding.
    #[must_use]
    pub fn list_param(self, key: &'static str, values: &[String]) -> Self {
        self.param(key, values.join(","))
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Value of the first parameter named `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// `path?k1=v1&k2=v2`, values form-encoded.
    pub(crate) fn encode(&self, embedded: bool) -> String {
        let mut out = String::from(self.path);
        let extra = embedded.then_some(("embed", "true"));
        let params = self
            .params
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .chain(extra);

        for (i, (key, value)) in params.enumerate() {
            out.push(if i == 0 { '?' } else { '&' });
            out.push_str(key);
            out.push('=');
            out.push_str(&form_encode(value));
        }
        out
    }
}

/// `application/x-www-form-urlencoded` encoding of one value.
///
/// ASCII alphanumerics and `.-*_` pass through, space becomes `+`, and
/// every other byte of the UTF-8 encoding becomes `%XX`.
pub(crate) fn form_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'-' | b'*' | b'_' => {
                out.push(char::from(byte));
            }
            b' ' => out.push('+'),
            _ => {
                // Writing to a String cannot fail.
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
