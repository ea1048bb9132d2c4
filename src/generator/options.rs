use crate::digits::{all_identical, digits_of, sanitize};
use crate::document::Document;
use crate::generator::error::GeneratorError;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Per-call changes to a [GeneratorOptions]. Unset fields keep the current
/// value.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GeneratorOverrides {
    pub format: Option<bool>,
    pub prefix: Option<String>,
}

impl GeneratorOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(&self, format: bool) -> Self {
        self.mutate_clone(|x| x.format = Some(format))
    }

    pub fn prefix(&self, prefix: &str) -> Self {
        self.mutate_clone(|x| x.prefix = Some(prefix.to_owned()))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorOptions<D: Document> {
    format: bool,
    prefix: String,
    document: PhantomData<D>,
}

impl<D: Document> Default for GeneratorOptions<D> {
    fn default() -> Self {
        Self {
            format: false,
            prefix: String::new(),
            document: PhantomData,
        }
    }
}

impl<D: Document> GeneratorOptions<D> {
    pub fn new(overrides: &GeneratorOverrides) -> Result<Self, GeneratorError> {
        Self::default().with_overrides(overrides)
    }

    /// Returns a copy of these options with every set override applied. A new
    /// prefix is reduced to its digits and checked.
    pub fn with_overrides(&self, overrides: &GeneratorOverrides) -> Result<Self, GeneratorError> {
        let prefix = match &overrides.prefix {
            Some(prefix) => Self::check_prefix(prefix)?,
            None => self.prefix.clone(),
        };
        Ok(Self {
            format: overrides.format.unwrap_or(self.format),
            prefix,
            document: PhantomData,
        })
    }

    fn check_prefix(prefix: &str) -> Result<String, GeneratorError> {
        let digits = sanitize(prefix);

        if digits.len() > D::BASE_LENGTH {
            return Err(GeneratorError::PrefixLength {
                found: digits.len(),
                max: D::BASE_LENGTH,
            });
        }

        D::check_prefix(&digits)?;

        // a prefix covering the whole base leaves nothing to randomize
        if digits.len() == D::BASE_LENGTH && all_identical(&digits_of(&digits)) {
            return Err(GeneratorError::PrefixNotValid { prefix: digits });
        }

        Ok(digits)
    }

    pub fn format(&self) -> bool {
        self.format
    }

    /// Digits every generated document starts with.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
