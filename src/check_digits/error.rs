use crate::document::DocumentKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckDigitsError {
    /// The input does not carry enough (or carries too many) digits
    #[error(
        "{} input {input} does not contain {min} to {max} digits. Got {} in \"{digits}\".",
        .document.label(),
        .digits.len()
    )]
    InputLength {
        document: DocumentKind,
        input: String,
        digits: String,
        min: usize,
        max: usize,
    },

    /// Every base digit is the same
    #[error(
        "{} input {input} is invalid. Repeated digits are not considered valid.",
        .document.label()
    )]
    RepeatedDigits {
        document: DocumentKind,
        input: String,
    },

    /// A check digit was requested for a sequence of the wrong size
    #[error(
        "Failed to calculate {} check digit for \"{sequence}\": expected {min} or {max} digits, got {length}.",
        .document.label()
    )]
    SequenceLength {
        document: DocumentKind,
        sequence: String,
        length: usize,
        min: usize,
        max: usize,
    },
}
