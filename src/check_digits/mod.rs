mod error;

pub use crate::check_digits::error::CheckDigitsError;

use crate::digits::{all_identical, render_digits, DigitInput};
use crate::document::Document;
use std::fmt;
use std::marker::PhantomData;

/// Computes one check digit of a `D` document.
///
/// The sequence must hold either the base digits (first check digit) or the
/// base digits followed by the first check digit (second check digit).
pub fn calculate<D: Document>(sequence: &[u8]) -> Result<u8, CheckDigitsError> {
    let length = sequence.len();
    if length != D::BASE_LENGTH && length != D::BASE_LENGTH + 1 {
        return Err(CheckDigitsError::SequenceLength {
            document: D::KIND,
            sequence: render_digits(sequence),
            length,
            min: D::BASE_LENGTH,
            max: D::BASE_LENGTH + 1,
        });
    }
    Ok(D::compute_check_digit(sequence))
}

/// The base digits of a document together with both check digits.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CheckDigits<D: Document> {
    base: Vec<u8>,
    first_digit: u8,
    second_digit: u8,
    document: PhantomData<D>,
}

impl<D: Document> CheckDigits<D> {
    /// Accepts between `BASE_LENGTH` and `LENGTH` digits; anything past the
    /// base digits is ignored.
    pub fn new(input: impl DigitInput) -> Result<Self, CheckDigitsError> {
        let digits = input.to_digits();

        if digits.len() < D::BASE_LENGTH || digits.len() > D::LENGTH {
            return Err(CheckDigitsError::InputLength {
                document: D::KIND,
                input: input.render(),
                digits: render_digits(&digits),
                min: D::BASE_LENGTH,
                max: D::LENGTH,
            });
        }

        let mut base = digits;
        base.truncate(D::BASE_LENGTH);

        if all_identical(&base) {
            return Err(CheckDigitsError::RepeatedDigits {
                document: D::KIND,
                input: input.render(),
            });
        }

        let first_digit = calculate::<D>(&base)?;
        base.push(first_digit);
        let second_digit = calculate::<D>(&base)?;
        base.pop();

        Ok(Self {
            base,
            first_digit,
            second_digit,
            document: PhantomData,
        })
    }

    pub fn first_digit(&self) -> u8 {
        self.first_digit
    }

    pub fn second_digit(&self) -> u8 {
        self.second_digit
    }

    pub fn base(&self) -> &[u8] {
        &self.base
    }

    /// The complete document: base digits followed by both check digits.
    pub fn to_digits(&self) -> Vec<u8> {
        let mut digits = Vec::with_capacity(D::LENGTH);
        digits.extend_from_slice(&self.base);
        digits.push(self.first_digit);
        digits.push(self.second_digit);
        digits
    }
}

impl<D: Document> fmt::Display for CheckDigits<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_digits(&self.to_digits()))
    }
}
