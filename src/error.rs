use crate::formatter::error::FormatterError;
use crate::generator::error::GeneratorError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrUtilsError {
    /// The formatter options are invalid (hidden range out of bounds)
    #[error(transparent)]
    InvalidFormatterOptions(FormatterError),
    /// The generator options are invalid (prefix too long, reserved branch id, etc.)
    #[error(transparent)]
    InvalidGeneratorOptions(GeneratorError),
}

impl From<FormatterError> for BrUtilsError {
    fn from(err: FormatterError) -> Self {
        BrUtilsError::InvalidFormatterOptions(err)
    }
}

impl From<GeneratorError> for BrUtilsError {
    fn from(err: GeneratorError) -> Self {
        BrUtilsError::InvalidGeneratorOptions(err)
    }
}
