//! Style values and the explicit resolution context.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::theme::{ColorMode, Theme};

/// Everything a style computation may read: the active theme and color
/// mode. Passed explicitly down the whole resolution chain.
#[derive(Debug, Clone, Copy)]
pub struct StyleContext<'a> {
    pub theme: &'a Theme,
    pub color_mode: ColorMode,
}

impl<'a> StyleContext<'a> {
    pub fn new(theme: &'a Theme, color_mode: ColorMode) -> Self {
        Self { theme, color_mode }
    }

    /// A context in the theme's configured initial color mode.
    pub fn initial(theme: &'a Theme) -> Self {
        Self::new(theme, theme.config().initial_color_mode())
    }

    /// The same theme in another color mode.
    pub fn with_color_mode(self, color_mode: ColorMode) -> Self {
        Self { color_mode, ..self }
    }
}

/// A style value computed from the context at resolution time.
#[derive(Clone)]
pub struct StyleFn(Arc<dyn Fn(&StyleContext<'_>) -> Value + Send + Sync>);

impl StyleFn {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&StyleContext<'_>) -> Value + Send + Sync + 'static,
    {
        StyleFn(Arc::new(f))
    }

    pub fn call(&self, ctx: &StyleContext<'_>) -> Value {
        (self.0)(ctx)
    }
}

impl fmt::Debug for StyleFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("StyleFn(..)")
    }
}

/// The value of one style prop.
///
/// `Value` covers literals as well as responsive arrays and objects; a JSON
/// object under a pseudo-selector key is a nested style block.
#[derive(Debug, Clone)]
pub enum StyleValue {
    Value(Value),
    Function(StyleFn),
    Nested(StyleProps),
}

impl StyleValue {
    /// Evaluates functions against the context; other variants are returned
    /// as they are.
    pub(crate) fn evaluate(&self, ctx: &StyleContext<'_>) -> EvaluatedValue<'_> {
        match self {
            StyleValue::Value(value) => EvaluatedValue::Value(std::borrow::Cow::Borrowed(value)),
            StyleValue::Function(f) => EvaluatedValue::Value(std::borrow::Cow::Owned(f.call(ctx))),
            StyleValue::Nested(props) => EvaluatedValue::Nested(props),
        }
    }
}

pub(crate) enum EvaluatedValue<'a> {
    Value(std::borrow::Cow<'a, Value>),
    Nested(&'a StyleProps),
}

/// Picks `light` or `dark` depending on the context's color mode.
///
/// ```rust
/// use beae_styled::{css, mode, ColorMode, StyleContext, StyleProps, Theme};
/// use serde_json::json;
///
/// let theme = Theme::default_theme();
/// let props = StyleProps::new().with("bg", mode("white", "gray.800"));
///
/// let dark = css(&props, &StyleContext::new(&theme, ColorMode::Dark)).unwrap();
/// assert_eq!(dark["background"], json!("#1A202C"));
/// ```
pub fn mode(light: impl Into<Value>, dark: impl Into<Value>) -> StyleValue {
    let (light, dark) = (light.into(), dark.into());
    StyleValue::Function(StyleFn::new(move |ctx| match ctx.color_mode {
        ColorMode::Light => light.clone(),
        ColorMode::Dark => dark.clone(),
    }))
}

impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        StyleValue::Value(value)
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Value(Value::String(value.to_string()))
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Value(Value::String(value))
    }
}

impl From<i64> for StyleValue {
    fn from(value: i64) -> Self {
        StyleValue::Value(Value::from(value))
    }
}

impl From<i32> for StyleValue {
    fn from(value: i32) -> Self {
        StyleValue::Value(Value::from(value))
    }
}

impl From<f64> for StyleValue {
    fn from(value: f64) -> Self {
        StyleValue::Value(Value::from(value))
    }
}

impl From<bool> for StyleValue {
    fn from(value: bool) -> Self {
        StyleValue::Value(Value::Bool(value))
    }
}

impl From<StyleFn> for StyleValue {
    fn from(value: StyleFn) -> Self {
        StyleValue::Function(value)
    }
}

impl From<StyleProps> for StyleValue {
    fn from(value: StyleProps) -> Self {
        StyleValue::Nested(value)
    }
}

/// Style props in declaration order. Later props win over earlier ones
/// that write the same CSS property.
#[derive(Debug, Clone, Default)]
pub struct StyleProps {
    entries: Vec<(String, StyleValue)>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a prop, returning the props for chaining.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.push(name, value);
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        self.entries.push((name.into(), value.into()));
    }

    /// The last value declared for `name`.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts a JSON object into props, keeping key order. Non-objects
    /// yield empty props.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from(map),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for StyleProps {
    fn from(map: Map<String, Value>) -> Self {
        Self {
            entries: map
                .into_iter()
                .map(|(k, v)| (k, StyleValue::Value(v)))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<StyleValue>> FromIterator<(K, V)> for StyleProps {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl IntoIterator for StyleProps {
    type Item = (String, StyleValue);
    type IntoIter = std::vec::IntoIter<(String, StyleValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Extend<(String, StyleValue)> for StyleProps {
    fn extend<T: IntoIterator<Item = (String, StyleValue)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}
