use crate::document::DocumentKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatterError {
    /// The input does not hold exactly one document worth of digits. This is
    /// never returned, it is handed to the `on_fail` callback instead.
    #[error("Parameter \"{input}\" does not contain {expected} digits. Found {found} digit(s).")]
    InputLength {
        document: DocumentKind,
        input: String,
        expected: usize,
        found: usize,
    },

    #[error("Option \"{option}\" must be an integer between {min} and {max}. Got {value}.")]
    HiddenRange {
        option: &'static str,
        value: i64,
        min: usize,
        max: usize,
    },
}
