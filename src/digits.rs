use std::fmt::Debug;

/// Anything a digit sequence can be extracted from.
///
/// Strings keep only their ASCII digits. Lists of string fragments are
/// sanitized one by one and concatenated. Lists of integers are expanded into
/// the decimal digits of each absolute value, in order.
pub trait DigitInput: Debug {
    fn to_digits(&self) -> Vec<u8>;

    /// Representation of the original input used in error messages.
    fn render(&self) -> String {
        format!("{self:?}")
    }
}

/// Removes every non-digit character from the input.
pub fn sanitize(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

pub fn digits_of(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

pub fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}

/// True when the sequence is non-empty and every digit is the same.
pub fn all_identical(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

fn expand_number(number: u64, digits: &mut Vec<u8>) {
    digits.extend(number.to_string().bytes().map(|b| b - b'0'));
}

impl DigitInput for str {
    fn to_digits(&self) -> Vec<u8> {
        digits_of(self)
    }
}

impl DigitInput for String {
    fn to_digits(&self) -> Vec<u8> {
        digits_of(self)
    }
}

impl DigitInput for [&str] {
    fn to_digits(&self) -> Vec<u8> {
        self.iter().flat_map(|fragment| digits_of(fragment)).collect()
    }
}

impl DigitInput for [String] {
    fn to_digits(&self) -> Vec<u8> {
        self.iter().flat_map(|fragment| digits_of(fragment)).collect()
    }
}

impl DigitInput for [u32] {
    fn to_digits(&self) -> Vec<u8> {
        let mut digits = Vec::with_capacity(self.len());
        for number in self {
            expand_number(u64::from(*number), &mut digits);
        }
        digits
    }
}

impl DigitInput for [i64] {
    fn to_digits(&self) -> Vec<u8> {
        let mut digits = Vec::with_capacity(self.len());
        for number in self {
            expand_number(number.unsigned_abs(), &mut digits);
        }
        digits
    }
}

impl DigitInput for [u8] {
    fn to_digits(&self) -> Vec<u8> {
        let mut digits = Vec::with_capacity(self.len());
        for number in self {
            expand_number(u64::from(*number), &mut digits);
        }
        digits
    }
}

impl<T> DigitInput for Vec<T>
where
    T: Debug,
    [T]: DigitInput,
{
    fn to_digits(&self) -> Vec<u8> {
        self.as_slice().to_digits()
    }
}

impl<T, const N: usize> DigitInput for [T; N]
where
    T: Debug,
    [T]: DigitInput,
{
    fn to_digits(&self) -> Vec<u8> {
        self.as_slice().to_digits()
    }
}

impl<T: DigitInput + ?Sized> DigitInput for &T {
    fn to_digits(&self) -> Vec<u8> {
        (**self).to_digits()
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_sanitize() {
        let test_cases = vec![
            ("123.456.789-10", "12345678910"),
            (" 123 456 789 10 ", "12345678910"),
            ("12.345.678/0001-95", "12345678000195"),
            ("abc", ""),
            ("1a2b3c", "123"),
            ("ñô١٢٣4", "4"),
        ];
        for (input, expected) in test_cases {
            assert_eq!(sanitize(input), expected);
        }
    }

    #[test]
    fn test_string_fragments_are_concatenated() {
        let fragments = vec!["529.", "982.", "247"];
        assert_eq!(fragments.to_digits(), vec![5, 2, 9, 9, 8, 2, 2, 4, 7]);

        let owned = vec!["52".to_string(), "99-82".to_string()];
        assert_eq!(owned.to_digits(), vec![5, 2, 9, 9, 8, 2]);
    }

    #[test]
    fn test_numbers_are_flattened() {
        assert_eq!([529u32, 982, 247].to_digits(), vec![5, 2, 9, 9, 8, 2, 2, 4, 7]);
        assert_eq!(vec![-52i64, 99].to_digits(), vec![5, 2, 9, 9]);
        // leading zeros of an integer cannot survive
        assert_eq!([0u32, 7].to_digits(), vec![0, 7]);
    }

    #[test]
    fn test_all_identical() {
        assert!(all_identical(&[1, 1, 1]));
        assert!(all_identical(&[0]));
        assert!(!all_identical(&[1, 1, 2]));
        assert!(!all_identical(&[]));
    }

    #[test]
    fn test_render() {
        assert_eq!("12a".render(), "\"12a\"");
        assert_eq!(vec![1u32, 2].render(), "[1, 2]");
        assert_eq!(render_digits(&[0, 4, 9]), "049");
    }
}
