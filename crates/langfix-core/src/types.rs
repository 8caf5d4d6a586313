use serde::{Deserialize, Serialize};

/// Marker shown before a translation in the result label.
pub const RESULT_PREFIX: &str = "➡ ";

/// One conversion request and its result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

impl Conversion {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Label text for the result (e.g. "➡ สวัสดี").
    pub fn display_text(&self) -> String {
        format!("{}{}", RESULT_PREFIX, self.output)
    }
}
