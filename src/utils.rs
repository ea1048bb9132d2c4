use crate::config::{BrUtilsConfig, DocumentConfig};
use crate::document::Document;
use crate::error::BrUtilsError;
use crate::formatter::error::FormatterError;
use crate::formatter::options::{FormatterOptions, FormatterOverrides};
use crate::formatter::Formatter;
use crate::generator::error::GeneratorError;
use crate::generator::options::{GeneratorOptions, GeneratorOverrides};
use crate::generator::Generator;
use crate::observability::labels::{Labels, NO_LABEL};
use crate::observability::metrics::ValidationMetrics;
use crate::validation::{DocumentValidator, Validator};
use crate::{CnpjUtils, CpfUtils};

/// Formatting, generation and validation of one document type.
#[derive(Clone)]
pub struct DocumentUtils<D: Document> {
    formatter: Formatter<D>,
    generator: Generator<D>,
    validator: DocumentValidator<D>,
    metrics: ValidationMetrics,
}

impl<D: Document> Default for DocumentUtils<D> {
    fn default() -> Self {
        DocumentUtils::new(FormatterOptions::default(), GeneratorOptions::default(), &NO_LABEL)
    }
}

impl<D: Document> DocumentUtils<D> {
    pub fn new(
        formatter_options: FormatterOptions<D>,
        generator_options: GeneratorOptions<D>,
        labels: &Labels,
    ) -> Self {
        Self {
            formatter: Formatter::with_labels(formatter_options, labels),
            generator: Generator::with_labels(generator_options, labels),
            validator: DocumentValidator::new(),
            metrics: ValidationMetrics::new::<D>(labels),
        }
    }

    pub fn from_config(config: &DocumentConfig, labels: &Labels) -> Result<Self, BrUtilsError> {
        Ok(DocumentUtils::new(
            FormatterOptions::new(&config.formatter)?,
            GeneratorOptions::new(&config.generator)?,
            labels,
        ))
    }

    pub fn formatter(&self) -> &Formatter<D> {
        &self.formatter
    }

    pub fn generator(&self) -> &Generator<D> {
        &self.generator
    }

    pub fn format(
        &self,
        value: &str,
        overrides: &FormatterOverrides,
    ) -> Result<String, FormatterError> {
        self.formatter.format_with(value, overrides)
    }

    pub fn generate(&self, overrides: &GeneratorOverrides) -> Result<String, GeneratorError> {
        self.generator.generate_with(overrides)
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.metrics.validated.increment(1);
        let valid = self.validator.is_valid(value);
        if !valid {
            self.metrics.invalid.increment(1);
        }
        valid
    }
}

/// CPF and CNPJ utilities side by side.
#[derive(Clone, Default)]
pub struct BrUtils {
    pub cpf: CpfUtils,
    pub cnpj: CnpjUtils,
}

impl BrUtils {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the utilities with the configured defaults. Every configured
    /// option is validated up front.
    pub fn from_config(config: &BrUtilsConfig) -> Result<Self, BrUtilsError> {
        Self::from_config_with_labels(config, &NO_LABEL)
    }

    pub fn from_config_with_labels(
        config: &BrUtilsConfig,
        labels: &Labels,
    ) -> Result<Self, BrUtilsError> {
        Ok(Self {
            cpf: DocumentUtils::from_config(&config.cpf, labels)?,
            cnpj: DocumentUtils::from_config(&config.cnpj, labels)?,
        })
    }
}
