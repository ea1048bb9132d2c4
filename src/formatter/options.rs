use crate::document::{Document, Separator};
use crate::formatter::error::FormatterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

const DEFAULT_HIDDEN_KEY: &str = "*";
const DEFAULT_DOT_KEY: &str = ".";
const DEFAULT_DASH_KEY: &str = "-";
const DEFAULT_SLASH_KEY: &str = "/";

type OnFailFn = dyn Fn(&str, &FormatterError) -> String + Send + Sync;

/// Callback deciding what `format` returns for input that does not hold a
/// whole document. Receives the original, unsanitized input.
#[derive(Clone)]
pub struct OnFail(Arc<OnFailFn>);

impl OnFail {
    pub fn new(
        callback: impl Fn(&str, &FormatterError) -> String + Send + Sync + 'static,
    ) -> Self {
        OnFail(Arc::new(callback))
    }

    /// Returns the input unchanged.
    pub fn passthrough() -> Self {
        OnFail::new(|input, _| input.to_string())
    }

    pub fn call(&self, input: &str, error: &FormatterError) -> String {
        (self.0)(input, error)
    }
}

impl Default for OnFail {
    fn default() -> Self {
        OnFail::passthrough()
    }
}

impl fmt::Debug for OnFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnFail")
    }
}

/// Per-call changes to a [FormatterOptions]. Unset fields keep the current
/// value.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct FormatterOverrides {
    pub hidden: Option<bool>,
    pub hidden_key: Option<String>,
    pub hidden_start: Option<i64>,
    pub hidden_end: Option<i64>,
    pub dot_key: Option<String>,
    pub dash_key: Option<String>,
    pub slash_key: Option<String>,
    pub escape: Option<bool>,
    #[serde(skip)]
    pub on_fail: Option<OnFail>,
}

impl FormatterOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hidden(&self, hidden: bool) -> Self {
        self.mutate_clone(|x| x.hidden = Some(hidden))
    }

    pub fn hidden_key(&self, hidden_key: &str) -> Self {
        self.mutate_clone(|x| x.hidden_key = Some(hidden_key.to_owned()))
    }

    pub fn hidden_start(&self, hidden_start: i64) -> Self {
        self.mutate_clone(|x| x.hidden_start = Some(hidden_start))
    }

    pub fn hidden_end(&self, hidden_end: i64) -> Self {
        self.mutate_clone(|x| x.hidden_end = Some(hidden_end))
    }

    pub fn hidden_range(&self, start: i64, end: i64) -> Self {
        self.mutate_clone(|x| {
            x.hidden_start = Some(start);
            x.hidden_end = Some(end);
        })
    }

    pub fn dot_key(&self, dot_key: &str) -> Self {
        self.mutate_clone(|x| x.dot_key = Some(dot_key.to_owned()))
    }

    pub fn dash_key(&self, dash_key: &str) -> Self {
        self.mutate_clone(|x| x.dash_key = Some(dash_key.to_owned()))
    }

    pub fn slash_key(&self, slash_key: &str) -> Self {
        self.mutate_clone(|x| x.slash_key = Some(slash_key.to_owned()))
    }

    pub fn escape(&self, escape: bool) -> Self {
        self.mutate_clone(|x| x.escape = Some(escape))
    }

    pub fn on_fail(
        &self,
        on_fail: impl Fn(&str, &FormatterError) -> String + Send + Sync + 'static,
    ) -> Self {
        let on_fail = OnFail::new(on_fail);
        self.mutate_clone(|x| x.on_fail = Some(on_fail))
    }

    fn mutate_clone(&self, modify: impl FnOnce(&mut Self)) -> Self {
        let mut clone = self.clone();
        modify(&mut clone);
        clone
    }
}

/// Complete, validated formatting options of a `D` document.
#[derive(Clone, Debug)]
pub struct FormatterOptions<D: Document> {
    hidden: bool,
    hidden_key: String,
    hidden_start: usize,
    hidden_end: usize,
    dot_key: String,
    dash_key: String,
    slash_key: String,
    escape: bool,
    on_fail: OnFail,
    document: PhantomData<D>,
}

impl<D: Document> Default for FormatterOptions<D> {
    fn default() -> Self {
        Self {
            hidden: false,
            hidden_key: DEFAULT_HIDDEN_KEY.to_string(),
            hidden_start: D::DEFAULT_HIDDEN_START,
            hidden_end: D::DEFAULT_HIDDEN_END,
            dot_key: DEFAULT_DOT_KEY.to_string(),
            dash_key: DEFAULT_DASH_KEY.to_string(),
            slash_key: DEFAULT_SLASH_KEY.to_string(),
            escape: false,
            on_fail: OnFail::default(),
            document: PhantomData,
        }
    }
}

impl<D: Document> FormatterOptions<D> {
    /// Default options with `overrides` applied.
    pub fn new(overrides: &FormatterOverrides) -> Result<Self, FormatterError> {
        Self::default().with_overrides(overrides)
    }

    /// Returns a copy of these options with every set override applied. The
    /// hidden range is validated and put back in order when reversed.
    pub fn with_overrides(&self, overrides: &FormatterOverrides) -> Result<Self, FormatterError> {
        let hidden_start = match overrides.hidden_start {
            Some(value) => Self::check_hidden_bound("hidden_start", value)?,
            None => self.hidden_start,
        };
        let hidden_end = match overrides.hidden_end {
            Some(value) => Self::check_hidden_bound("hidden_end", value)?,
            None => self.hidden_end,
        };
        let (hidden_start, hidden_end) = if hidden_start > hidden_end {
            (hidden_end, hidden_start)
        } else {
            (hidden_start, hidden_end)
        };

        Ok(Self {
            hidden: overrides.hidden.unwrap_or(self.hidden),
            hidden_key: override_or(&overrides.hidden_key, &self.hidden_key),
            hidden_start,
            hidden_end,
            dot_key: override_or(&overrides.dot_key, &self.dot_key),
            dash_key: override_or(&overrides.dash_key, &self.dash_key),
            slash_key: override_or(&overrides.slash_key, &self.slash_key),
            escape: overrides.escape.unwrap_or(self.escape),
            on_fail: overrides
                .on_fail
                .clone()
                .unwrap_or_else(|| self.on_fail.clone()),
            document: PhantomData,
        })
    }

    fn check_hidden_bound(option: &'static str, value: i64) -> Result<usize, FormatterError> {
        let max = D::LENGTH - 1;
        usize::try_from(value)
            .ok()
            .filter(|bound| *bound <= max)
            .ok_or(FormatterError::HiddenRange {
                option,
                value,
                min: 0,
                max,
            })
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn hidden_key(&self) -> &str {
        &self.hidden_key
    }

    pub fn hidden_start(&self) -> usize {
        self.hidden_start
    }

    pub fn hidden_end(&self) -> usize {
        self.hidden_end
    }

    pub fn dot_key(&self) -> &str {
        &self.dot_key
    }

    pub fn dash_key(&self) -> &str {
        &self.dash_key
    }

    /// Only CNPJ layouts have a slash slot.
    pub fn slash_key(&self) -> &str {
        &self.slash_key
    }

    pub fn is_escaped(&self) -> bool {
        self.escape
    }

    pub fn on_fail(&self) -> &OnFail {
        &self.on_fail
    }

    pub fn separator_key(&self, separator: Separator) -> &str {
        match separator {
            Separator::Dot => &self.dot_key,
            Separator::Slash => &self.slash_key,
            Separator::Dash => &self.dash_key,
        }
    }

    pub fn is_hidden_index(&self, index: usize) -> bool {
        self.hidden && (self.hidden_start..=self.hidden_end).contains(&index)
    }
}

fn override_or(value: &Option<String>, current: &str) -> String {
    value.as_deref().unwrap_or(current).to_string()
}
