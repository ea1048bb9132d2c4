// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod check_digits;
pub mod cnpj;
mod config;
pub mod cpf;
mod digits;
mod document;
mod error;
mod formatter;
mod generator;
mod observability;
mod utils;
mod validation;

// This is the public API of the br-utils library
pub use check_digits::{calculate, CheckDigits, CheckDigitsError};
pub use cnpj::{Cnpj, CnpjFormatter, CnpjGenerator, CnpjUtils, CnpjValidator};
pub use config::{BrUtilsConfig, DocumentConfig};
pub use cpf::{Cpf, CpfFormatter, CpfGenerator, CpfUtils, CpfValidator};
pub use digits::DigitInput;
pub use document::{Document, DocumentKind, Separator};
pub use error::BrUtilsError;
pub use formatter::{
    error::FormatterError, options::FormatterOptions, options::FormatterOverrides,
    options::OnFail, Formatter,
};
pub use generator::{
    error::GeneratorError, options::GeneratorOptions, options::GeneratorOverrides, Generator,
};
pub use observability::labels::Labels;
pub use utils::{BrUtils, DocumentUtils};
pub use validation::{DocumentValidator, Validator};
