pub mod error;
pub mod options;

use crate::check_digits::calculate;
use crate::digits::{all_identical, digits_of, render_digits};
use crate::document::Document;
use crate::formatter::layout;
use crate::formatter::options::FormatterOptions;
use crate::generator::error::GeneratorError;
use crate::generator::options::{GeneratorOptions, GeneratorOverrides};
use crate::observability::labels::{Labels, NO_LABEL};
use crate::observability::metrics::GeneratorMetrics;
use rand::Rng;

/// Produces random `D` documents with valid check digits.
#[derive(Clone)]
pub struct Generator<D: Document> {
    options: GeneratorOptions<D>,
    /// Default layout used when `format` is set
    layout_options: FormatterOptions<D>,
    metrics: GeneratorMetrics,
}

impl<D: Document> Default for Generator<D> {
    fn default() -> Self {
        Generator::new(GeneratorOptions::default())
    }
}

impl<D: Document> Generator<D> {
    pub fn new(options: GeneratorOptions<D>) -> Self {
        Generator::with_labels(options, &NO_LABEL)
    }

    pub fn with_labels(options: GeneratorOptions<D>, labels: &Labels) -> Self {
        Self {
            options,
            layout_options: FormatterOptions::default(),
            metrics: GeneratorMetrics::new::<D>(labels),
        }
    }

    pub fn from_overrides(overrides: &GeneratorOverrides) -> Result<Self, GeneratorError> {
        Ok(Generator::new(GeneratorOptions::new(overrides)?))
    }

    pub fn options(&self) -> &GeneratorOptions<D> {
        &self.options
    }

    pub fn generate(&self) -> Result<String, GeneratorError> {
        self.generate_with_options(&self.options, &mut rand::thread_rng())
    }

    /// Same as [Generator::generate], with `overrides` applied on top of the
    /// options of this generator for this call only.
    pub fn generate_with(&self, overrides: &GeneratorOverrides) -> Result<String, GeneratorError> {
        let options = self.options.with_overrides(overrides)?;
        self.generate_with_options(&options, &mut rand::thread_rng())
    }

    /// Generates using the given source of randomness.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, GeneratorError> {
        self.generate_with_options(&self.options, rng)
    }

    fn generate_with_options<R: Rng + ?Sized>(
        &self,
        options: &GeneratorOptions<D>,
        rng: &mut R,
    ) -> Result<String, GeneratorError> {
        let prefix = digits_of(options.prefix());

        // The prefix was checked when the options were built, so a prefix
        // covering the whole base is always accepted on the first pass.
        let mut digits = loop {
            let mut base = Vec::with_capacity(D::LENGTH);
            base.extend_from_slice(&prefix);
            while base.len() < D::BASE_LENGTH {
                base.push(rng.gen_range(0..10));
            }
            if !all_identical(&base) && D::is_generatable(&base) {
                break base;
            }
            self.metrics.retries.increment(1);
        };

        let first_digit = calculate::<D>(&digits)?;
        digits.push(first_digit);
        let second_digit = calculate::<D>(&digits)?;
        digits.push(second_digit);

        self.metrics.generated.increment(1);

        let document = render_digits(&digits);
        if options.format() {
            Ok(layout(&document, &self.layout_options))
        } else {
            Ok(document)
        }
    }
}
