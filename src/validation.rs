use crate::check_digits::CheckDigits;
use crate::digits::digits_of;
use crate::document::{Document, DocumentKind};
use crate::{Cnpj, Cpf};
use std::marker::PhantomData;

pub trait Validator: Send + Sync {
    /// Whether `input` holds a document with matching check digits. Any
    /// character other than a digit is ignored.
    fn is_valid(&self, input: &str) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DocumentValidator<D: Document>(PhantomData<D>);

impl<D: Document> DocumentValidator<D> {
    pub fn new() -> Self {
        DocumentValidator(PhantomData)
    }
}

impl<D: Document> Validator for DocumentValidator<D> {
    fn is_valid(&self, input: &str) -> bool {
        let digits = digits_of(input);
        if digits.len() != D::LENGTH {
            return false;
        }

        let (base, actual) = digits.split_at(D::BASE_LENGTH);
        match CheckDigits::<D>::new(base) {
            Ok(expected) => {
                expected.first_digit() == actual[0] && expected.second_digit() == actual[1]
            }
            // repeated digits
            Err(_) => false,
        }
    }
}

impl Validator for DocumentKind {
    fn is_valid(&self, input: &str) -> bool {
        match self {
            DocumentKind::Cpf => DocumentValidator::<Cpf>::new().is_valid(input),
            DocumentKind::Cnpj => DocumentValidator::<Cnpj>::new().is_valid(input),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_validator_by_kind() {
        let test_cases = vec![
            (DocumentKind::Cpf, "529.982.247-25", true),
            (DocumentKind::Cpf, "529.982.247-52", false),
            (DocumentKind::Cpf, "11.222.333/0001-81", false),
            (DocumentKind::Cnpj, "11.222.333/0001-81", true),
            (DocumentKind::Cnpj, "11.222.333/0001-18", false),
            (DocumentKind::Cnpj, "529.982.247-25", false),
        ];
        for (kind, input, expected) in test_cases {
            assert_eq!(kind.is_valid(input), expected, "{kind} {input}");
        }
    }

    #[test]
    fn test_only_check_digits_change() {
        // every wrong pair of check digits is rejected
        let validator = DocumentValidator::<Cpf>::new();
        for candidate in 0..100 {
            let cpf = format!("529982247{candidate:02}");
            assert_eq!(validator.is_valid(&cpf), candidate == 25, "{cpf}");
        }
    }

    #[test]
    fn test_validators_as_trait_objects() {
        let validators: Vec<Box<dyn Validator>> = vec![
            Box::new(DocumentValidator::<Cpf>::new()),
            Box::new(DocumentKind::Cnpj),
        ];
        assert!(validators[0].is_valid("52998224725"));
        assert!(validators[1].is_valid("11222333000181"));
        assert!(!validators[0].is_valid("not a document"));
    }
}
