//! CPF (Cadastro de Pessoas Físicas): 9 base digits followed by 2 check digits,
//! printed as `DDD.DDD.DDD-DD`.

use crate::document::{Document, DocumentKind, Separator};
use crate::formatter::{error::FormatterError, options::FormatterOverrides, Formatter};
use crate::generator::{error::GeneratorError, options::GeneratorOverrides, Generator};
use crate::utils::DocumentUtils;
use crate::validation::{DocumentValidator, Validator};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cpf;

pub type CpfFormatter = Formatter<Cpf>;
pub type CpfGenerator = Generator<Cpf>;
pub type CpfValidator = DocumentValidator<Cpf>;
pub type CpfUtils = DocumentUtils<Cpf>;

impl Document for Cpf {
    const KIND: DocumentKind = DocumentKind::Cpf;
    const LENGTH: usize = 11;
    const DEFAULT_HIDDEN_START: usize = 3;
    const DEFAULT_HIDDEN_END: usize = 10;
    const SEPARATORS: &'static [(usize, Separator)] = &[
        (3, Separator::Dot),
        (6, Separator::Dot),
        (9, Separator::Dash),
    ];

    // https://pt.wikipedia.org/wiki/Cadastro_de_Pessoas_F%C3%ADsicas#C%C3%A1lculo_do_d%C3%ADgito_verificador
    fn compute_check_digit(sequence: &[u8]) -> u8 {
        // weights go from `len + 1` down to 2
        let mut weight = sequence.len() as u32 + 1;
        let mut sum: u32 = 0;
        for digit in sequence {
            sum += u32::from(*digit) * weight;
            weight -= 1;
        }
        let result = 11 - (sum % 11);
        if result > 9 {
            0
        } else {
            result as u8
        }
    }
}

/// Formats a CPF as `DDD.DDD.DDD-DD`, returning the input unchanged when it
/// does not hold 11 digits.
pub fn format(value: &str) -> String {
    CpfFormatter::default().format(value)
}

pub fn format_with(value: &str, overrides: &FormatterOverrides) -> Result<String, FormatterError> {
    CpfFormatter::default().format_with(value, overrides)
}

/// Generates a random valid CPF.
pub fn generate(format: bool, prefix: Option<&str>) -> Result<String, GeneratorError> {
    let mut overrides = GeneratorOverrides::new().format(format);
    if let Some(prefix) = prefix {
        overrides = overrides.prefix(prefix);
    }
    CpfGenerator::default().generate_with(&overrides)
}

pub fn is_valid(value: &str) -> bool {
    CpfValidator::default().is_valid(value)
}
