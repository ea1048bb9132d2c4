use crate::check_digits::CheckDigitsError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    #[error("The prefix length must be less than or equal to {max}. Got {found}.")]
    PrefixLength { found: usize, max: usize },

    #[error("The branch ID (characters 8 to 11) cannot be \"0000\". Got prefix \"{prefix}\".")]
    PrefixBranchId { prefix: String },

    #[error("The prefix \"{prefix}\" is invalid. Repeated digits are not considered valid.")]
    PrefixNotValid { prefix: String },

    #[error(transparent)]
    CheckDigits(#[from] CheckDigitsError),
}
