pub mod error;
mod escape;
pub mod options;

use crate::digits::sanitize;
use crate::document::Document;
use crate::formatter::error::FormatterError;
use crate::formatter::escape::escape_html;
use crate::formatter::options::{FormatterOptions, FormatterOverrides};
use crate::observability::metrics::FormatterMetrics;
use crate::observability::labels::{Labels, NO_LABEL};

/// Pretty-prints `D` documents.
#[derive(Clone)]
pub struct Formatter<D: Document> {
    options: FormatterOptions<D>,
    metrics: FormatterMetrics,
}

impl<D: Document> Default for Formatter<D> {
    fn default() -> Self {
        Formatter::new(FormatterOptions::default())
    }
}

impl<D: Document> Formatter<D> {
    pub fn new(options: FormatterOptions<D>) -> Self {
        Formatter::with_labels(options, &NO_LABEL)
    }

    pub fn with_labels(options: FormatterOptions<D>, labels: &Labels) -> Self {
        Self {
            options,
            metrics: FormatterMetrics::new::<D>(labels),
        }
    }

    pub fn from_overrides(overrides: &FormatterOverrides) -> Result<Self, FormatterError> {
        Ok(Formatter::new(FormatterOptions::new(overrides)?))
    }

    pub fn options(&self) -> &FormatterOptions<D> {
        &self.options
    }

    /// Formats `value` with the options of this formatter.
    ///
    /// Input that does not hold exactly `D::LENGTH` digits is handed to the
    /// `on_fail` callback and its result is returned as is.
    pub fn format(&self, value: &str) -> String {
        self.format_with_options(value, &self.options)
    }

    /// Same as [Formatter::format], with `overrides` applied on top of the
    /// options of this formatter for this call only.
    pub fn format_with(
        &self,
        value: &str,
        overrides: &FormatterOverrides,
    ) -> Result<String, FormatterError> {
        let options = self.options.with_overrides(overrides)?;
        Ok(self.format_with_options(value, &options))
    }

    fn format_with_options(&self, value: &str, options: &FormatterOptions<D>) -> String {
        self.metrics.formatted.increment(1);

        let digits = sanitize(value);
        let found = digits.chars().count();
        if found != D::LENGTH {
            self.metrics.fallbacks.increment(1);
            let error = FormatterError::InputLength {
                document: D::KIND,
                input: value.to_string(),
                expected: D::LENGTH,
                found,
            };
            return options.on_fail().call(value, &error);
        }

        layout(&digits, options)
    }
}

/// Lays out exactly `D::LENGTH` digits with the separators, mask and escaping
/// of `options`.
pub(crate) fn layout<D: Document>(digits: &str, options: &FormatterOptions<D>) -> String {
    let mut pretty = String::with_capacity(D::LENGTH + 2 * D::SEPARATORS.len());
    let mut separators = D::SEPARATORS.iter().peekable();
    for (index, digit) in digits.chars().enumerate() {
        while let Some((_, separator)) = separators.next_if(|(position, _)| *position == index) {
            pretty.push_str(options.separator_key(*separator));
        }
        if options.is_hidden_index(index) {
            pretty.push_str(options.hidden_key());
        } else {
            pretty.push(digit);
        }
    }

    if options.is_escaped() {
        escape_html(&pretty)
    } else {
        pretty
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Cnpj, CnpjFormatter, CpfFormatter};
    use std::sync::{Arc, Mutex};

    fn format_cpf(value: &str, overrides: FormatterOverrides) -> String {
        CpfFormatter::default().format_with(value, &overrides).unwrap()
    }

    fn format_cnpj(value: &str, overrides: FormatterOverrides) -> String {
        CnpjFormatter::default().format_with(value, &overrides).unwrap()
    }

    #[test]
    fn test_cpf_noise_is_removed() {
        let inputs = vec![
            "123.456.789-10",
            "12345678910",
            "123-456-789-10",
            "123 456 789 10",
            "12345678910 ",
            " 12345678910",
            "1.2.3.4.5.6.7.8.9.1.0",
            "1-2-3-4-5-6-7-8-9-1-0",
            "1 2 3 4 5 6 7 8 9 1 0",
            "123a456b789c10",
            "123/456/789/10",
            "123 / 456 / 789 / 10",
        ];
        for input in inputs {
            assert_eq!(CpfFormatter::default().format(input), "123.456.789-10", "{input}");
        }
    }

    #[test]
    fn test_cpf_custom_delimiters() {
        let cpf = "12345678910";
        assert_eq!(
            format_cpf(cpf, FormatterOverrides::new().dot_key("")),
            "123456789-10"
        );
        assert_eq!(
            format_cpf(cpf, FormatterOverrides::new().dash_key(" dv ")),
            "123.456.789 dv 10"
        );
        assert_eq!(
            format_cpf(cpf, FormatterOverrides::new().dot_key("").dash_key("")),
            "12345678910"
        );
        // the slash slot does not exist in a CPF
        assert_eq!(
            format_cpf(cpf, FormatterOverrides::new().slash_key("|")),
            "123.456.789-10"
        );
    }

    #[test]
    fn test_cpf_escape() {
        assert_eq!(
            format_cpf(
                "12345678910",
                FormatterOverrides::new()
                    .dot_key("&")
                    .dash_key("<>")
                    .escape(true)
            ),
            "123&amp;456&amp;789&lt;&gt;10"
        );
    }

    #[test]
    fn test_multi_char_hidden_key_repeats_per_digit() {
        let hidden = FormatterOverrides::new()
            .hidden(true)
            .hidden_key("<x>")
            .hidden_range(0, 1);
        assert_eq!(
            format_cpf("12345678901", hidden.escape(true)),
            "&lt;x&gt;&lt;x&gt;3.456.789-01"
        );
        assert_eq!(format_cpf("12345678901", hidden.clone()), "<x><x>3.456.789-01");
        assert_eq!(
            format_cnpj("11222333000181", hidden.hidden_key("ab").hidden_range(12, 13)),
            "11.222.333/0001-abab"
        );
    }

    #[test]
    fn test_cpf_hidden() {
        let cpf = "12345678910";
        let hidden = FormatterOverrides::new().hidden(true);
        let test_cases = vec![
            (hidden.clone(), "123.***.***-**"),
            (hidden.hidden_start(9), "123.456.789-**"),
            (hidden.hidden_end(8), "123.***.***-10"),
            (hidden.hidden_range(0, 8), "***.***.***-10"),
            (hidden.hidden_range(8, 3), "123.***.***-10"),
            (hidden.hidden_key("#"), "123.###.###-##"),
            (hidden.hidden_key("#").hidden_start(9), "123.456.789-##"),
            (hidden.hidden_range(0, 10), "***.***.***-**"),
            (hidden.hidden(false), "123.456.789-10"),
        ];
        for (overrides, expected) in test_cases {
            assert_eq!(format_cpf(cpf, overrides), expected);
        }
    }

    #[test]
    fn test_cpf_hidden_range_errors() {
        let formatter = CpfFormatter::default();
        for overrides in [
            FormatterOverrides::new().hidden(true).hidden_start(-1),
            FormatterOverrides::new().hidden(true).hidden_start(11),
            FormatterOverrides::new().hidden(true).hidden_end(-1),
            FormatterOverrides::new().hidden(true).hidden_end(11),
        ] {
            assert!(matches!(
                formatter.format_with("12345678910", &overrides),
                Err(FormatterError::HiddenRange { .. })
            ));
        }
    }

    #[test]
    fn test_cnpj_default() {
        assert_eq!(
            CnpjFormatter::default().format("91415732000793"),
            "91.415.732/0007-93"
        );
        assert_eq!(
            CnpjFormatter::default().format("91.415.732/0007-93"),
            "91.415.732/0007-93"
        );
    }

    #[test]
    fn test_cnpj_options() {
        let cnpj = "03603568000195";
        let test_cases = vec![
            (FormatterOverrides::new(), "03.603.568/0001-95"),
            (FormatterOverrides::new().hidden(true), "03.603.***/****-**"),
            (
                FormatterOverrides::new().hidden(true).hidden_range(0, 1),
                "**.603.568/0001-95",
            ),
            (
                FormatterOverrides::new().hidden(true).hidden_range(8, 11),
                "03.603.568/****-95",
            ),
            (
                FormatterOverrides::new().dot_key("").slash_key("").dash_key(""),
                "03603568000195",
            ),
            (
                FormatterOverrides::new().dot_key(" ").slash_key(" | ").dash_key(" dv "),
                "03 603 568 | 0001 dv 95",
            ),
            (
                FormatterOverrides::new().slash_key("<\"'>").escape(true),
                "03.603.568&lt;&quot;&#x27;&gt;0001-95",
            ),
        ];
        for (overrides, expected) in test_cases {
            assert_eq!(format_cnpj(cnpj, overrides), expected);
        }
    }

    #[test]
    fn test_on_fail_receives_original_input() {
        let seen = Arc::new(Mutex::new(vec![]));
        let seen_clone = seen.clone();
        let formatter = CnpjFormatter::from_overrides(&FormatterOverrides::new().on_fail(
            move |input, error| {
                seen_clone.lock().unwrap().push(error.clone());
                format!("invalid: {input}")
            },
        ))
        .unwrap();

        assert_eq!(formatter.format("12.345-abc"), "invalid: 12.345-abc");
        assert_eq!(
            seen.lock().unwrap().as_slice(),
            &[FormatterError::InputLength {
                document: Cnpj::KIND,
                input: "12.345-abc".to_string(),
                expected: 14,
                found: 5,
            }]
        );
        // valid input never reaches the callback
        assert_eq!(formatter.format("91415732000793"), "91.415.732/0007-93");
        assert_eq!(seen.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_default_on_fail_is_passthrough() {
        assert_eq!(CpfFormatter::default().format("ABC"), "ABC");
        assert_eq!(CpfFormatter::default().format(""), "");
        assert_eq!(CpfFormatter::default().format("123456789101"), "123456789101");
        let message = CpfFormatter::default()
            .format_with(
                "1234",
                &FormatterOverrides::new().on_fail(|_, error| error.to_string()),
            )
            .unwrap();
        assert_eq!(
            message,
            "Parameter \"1234\" does not contain 11 digits. Found 4 digit(s)."
        );
    }

    #[test]
    fn test_per_call_overrides_do_not_stick() {
        let formatter = CpfFormatter::default();
        let masked = formatter
            .format_with("12345678910", &FormatterOverrides::new().hidden(true))
            .unwrap();
        assert_eq!(masked, "123.***.***-**");
        assert_eq!(formatter.format("12345678910"), "123.456.789-10");
        assert!(!formatter.options().is_hidden());
    }

    #[test]
    fn test_format_is_idempotent() {
        let overrides = FormatterOverrides::new().dot_key(" ").dash_key("/");
        let once = format_cpf("52998224725", overrides.clone());
        assert_eq!(format_cpf(&once, overrides), once);

        let once = CnpjFormatter::default().format("11222333000181");
        assert_eq!(CnpjFormatter::default().format(&once), once);
    }
}
