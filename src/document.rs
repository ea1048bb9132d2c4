use crate::generator::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use strum::{AsRefStr, Display, EnumString};

#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr,
)]
#[serde(tag = "type")]
#[strum(serialize_all = "lowercase")]
pub enum DocumentKind {
    Cpf,
    Cnpj,
}

impl DocumentKind {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }
}

/// Delimiter slot of a formatted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Separator {
    Dot,
    Slash,
    Dash,
}

/// A Brazilian document number layout together with its check-digit scheme.
pub trait Document: Copy + Default + Debug + PartialEq + Eq + Send + Sync + 'static {
    const KIND: DocumentKind;

    /// Total number of digits, check digits included.
    const LENGTH: usize;

    /// Number of digits before the two check digits.
    const BASE_LENGTH: usize = Self::LENGTH - 2;

    const DEFAULT_HIDDEN_START: usize;
    const DEFAULT_HIDDEN_END: usize;

    /// Digit index a separator is inserted before, in increasing order.
    const SEPARATORS: &'static [(usize, Separator)];

    /// Computes a check digit for a sequence already known to hold
    /// `BASE_LENGTH` or `BASE_LENGTH + 1` digits.
    fn compute_check_digit(sequence: &[u8]) -> u8;

    /// Document-specific restrictions on a sanitized generator prefix.
    fn check_prefix(_prefix: &str) -> Result<(), GeneratorError> {
        Ok(())
    }

    /// Whether a complete base sequence may be emitted by the generator.
    fn is_generatable(_base: &[u8]) -> bool {
        true
    }
}
