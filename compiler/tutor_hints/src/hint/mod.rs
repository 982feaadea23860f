//! The hint record shown to the learner.

/// One candidate fix for a diagnostic.
///
/// Hints for the same diagnostic share `problem_text` and differ in the
/// suggestion and examples. Examples are attached while the hint is built;
/// a published `Hint` is immutable.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hint {
    problem_text: String,
    suggestion_text: String,
    bad_code: Vec<String>,
    good_code: Vec<String>,
}

impl Hint {
    /// Create a hint with no code examples.
    pub fn new(problem_text: impl Into<String>, suggestion_text: impl Into<String>) -> Self {
        Hint {
            problem_text: problem_text.into(),
            suggestion_text: suggestion_text.into(),
            bad_code: Vec::new(),
            good_code: Vec::new(),
        }
    }

    /// Add an example of the incorrect code.
    #[must_use]
    pub fn with_bad_code(mut self, code: impl Into<String>) -> Self {
        self.bad_code.push(code.into());
        self
    }

    /// Add an example of corrected code.
    #[must_use]
    pub fn with_good_code(mut self, code: impl Into<String>) -> Self {
        self.good_code.push(code.into());
        self
    }

    pub fn problem_text(&self) -> &str {
        &self.problem_text
    }

    pub fn suggestion_text(&self) -> &str {
        &self.suggestion_text
    }

    pub fn bad_code(&self) -> &[String] {
        &self.bad_code
    }

    pub fn good_code(&self) -> &[String] {
        &self.good_code
    }

    /// Check if the hint illustrates its fix with at least one example.
    pub fn has_examples(&self) -> bool {
        !self.bad_code.is_empty() || !self.good_code.is_empty()
    }

    /// All examples, incorrect ones first.
    pub fn examples(&self) -> impl Iterator<Item = &str> {
        self.bad_code
            .iter()
            .chain(&self.good_code)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests;
