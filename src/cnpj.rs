//! CNPJ (Cadastro Nacional da Pessoa Jurídica): 8 registration digits, 4
//! branch digits and 2 check digits, printed as `DD.DDD.DDD/BBBB-DD`.

use crate::document::{Document, DocumentKind, Separator};
use crate::formatter::{error::FormatterError, options::FormatterOverrides, Formatter};
use crate::generator::{error::GeneratorError, options::GeneratorOverrides, Generator};
use crate::utils::DocumentUtils;
use crate::validation::{DocumentValidator, Validator};
use std::ops::Range;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cnpj;

pub type CnpjFormatter = Formatter<Cnpj>;
pub type CnpjGenerator = Generator<Cnpj>;
pub type CnpjValidator = DocumentValidator<Cnpj>;
pub type CnpjUtils = DocumentUtils<Cnpj>;

/// Digits identifying the establishment of the company.
const BRANCH_ID: Range<usize> = 8..12;
const RESERVED_BRANCH_ID: &str = "0000";

impl Document for Cnpj {
    const KIND: DocumentKind = DocumentKind::Cnpj;
    const LENGTH: usize = 14;
    const DEFAULT_HIDDEN_START: usize = 5;
    const DEFAULT_HIDDEN_END: usize = 13;
    // XX.XXX.XXX/YYYY-ZZ
    const SEPARATORS: &'static [(usize, Separator)] = &[
        (2, Separator::Dot),
        (5, Separator::Dot),
        (8, Separator::Slash),
        (12, Separator::Dash),
    ];

    // https://pt.wikipedia.org/wiki/Cadastro_Nacional_da_Pessoa_Jur%C3%ADdica
    fn compute_check_digit(sequence: &[u8]) -> u8 {
        // weights cycle through 2..=9 starting from the last digit
        let sum: u32 = sequence
            .iter()
            .rev()
            .zip((2..=9).cycle())
            .map(|(digit, weight)| u32::from(*digit) * weight)
            .sum();
        let remainder = sum % 11;
        if remainder < 2 {
            0
        } else {
            (11 - remainder) as u8
        }
    }

    fn check_prefix(prefix: &str) -> Result<(), GeneratorError> {
        if prefix.get(BRANCH_ID) == Some(RESERVED_BRANCH_ID) {
            return Err(GeneratorError::PrefixBranchId {
                prefix: prefix.to_string(),
            });
        }
        Ok(())
    }

    fn is_generatable(base: &[u8]) -> bool {
        base.get(BRANCH_ID) != Some(&[0, 0, 0, 0][..])
    }
}

/// Formats a CNPJ as `DD.DDD.DDD/DDDD-DD`, returning the input unchanged when
/// it does not hold 14 digits.
pub fn format(value: &str) -> String {
    CnpjFormatter::default().format(value)
}

pub fn format_with(value: &str, overrides: &FormatterOverrides) -> Result<String, FormatterError> {
    CnpjFormatter::default().format_with(value, overrides)
}

/// Generates a random valid CNPJ.
pub fn generate(format: bool, prefix: Option<&str>) -> Result<String, GeneratorError> {
    let mut overrides = GeneratorOverrides::new().format(format);
    if let Some(prefix) = prefix {
        overrides = overrides.prefix(prefix);
    }
    CnpjGenerator::default().generate_with(&overrides)
}

pub fn is_valid(value: &str) -> bool {
    CnpjValidator::default().is_valid(value)
}
