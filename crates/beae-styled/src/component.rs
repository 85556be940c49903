//! Component style configs from `theme.components`.
//!
//! A component config looks like:
//!
//! ```json
//! {
//!   "baseStyle": { "fontWeight": "semibold" },
//!   "sizes": { "md": { "h": 10, "px": 4 } },
//!   "variants": { "solid": { "bg": "colorScheme.500" } },
//!   "defaultProps": { "size": "md", "variant": "solid", "colorScheme": "gray" }
//! }
//! ```
//!
//! String values starting with `colorScheme.` are rewritten to the active
//! color scheme before resolution, so `colorScheme.500` with scheme `red`
//! reads the `red.500` token.

use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::style::{css_value, StyleObject};
use crate::theme::{deep_merge, Theme};
use crate::value::StyleContext;

const COLOR_SCHEME_PREFIX: &str = "colorScheme.";

/// The props a component forwards to its style config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentProps {
    pub variant: Option<String>,
    pub size: Option<String>,
    pub color_scheme: Option<String>,
}

impl ComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn color_scheme(mut self, color_scheme: impl Into<String>) -> Self {
        self.color_scheme = Some(color_scheme.into());
        self
    }
}

/// A borrowed view of `theme.components.<name>`.
#[derive(Debug, Clone, Copy)]
pub struct StyleConfig<'a> {
    base_style: Option<&'a Map<String, Value>>,
    variants: Option<&'a Map<String, Value>>,
    sizes: Option<&'a Map<String, Value>>,
    default_props: Option<&'a Map<String, Value>>,
}

impl<'a> StyleConfig<'a> {
    pub fn from_theme(theme: &'a Theme, name: &str) -> Option<Self> {
        let config = theme.raw().get("components")?.get(name)?.as_object()?;
        let section = |key: &str| config.get(key).and_then(Value::as_object);
        Some(Self {
            base_style: section("baseStyle"),
            variants: section("variants"),
            sizes: section("sizes"),
            default_props: section("defaultProps"),
        })
    }

    /// Fills the props the caller left out from `defaultProps`.
    pub fn with_defaults(&self, props: &ComponentProps) -> ComponentProps {
        let default = |key: &str| {
            self.default_props
                .and_then(|defaults| defaults.get(key))
                .and_then(Value::as_str)
                .map(String::from)
        };
        ComponentProps {
            variant: props.variant.clone().or_else(|| default("variant")),
            size: props.size.clone().or_else(|| default("size")),
            color_scheme: props.color_scheme.clone().or_else(|| default("colorScheme")),
        }
    }

    /// Base style, then the size, then the variant, deep-merged so later
    /// sections win. Unknown sizes or variants contribute nothing.
    pub fn merged_style(&self, props: &ComponentProps) -> Map<String, Value> {
        let props = self.with_defaults(props);
        let pick = |section: Option<&Map<String, Value>>, key: &Option<String>| {
            key.as_deref()
                .and_then(|key| section.and_then(|s| s.get(key)))
                .cloned()
        };

        let mut merged = Value::Object(self.base_style.cloned().unwrap_or_default());
        for part in [pick(self.sizes, &props.size), pick(self.variants, &props.variant)]
            .into_iter()
            .flatten()
        {
            deep_merge(&mut merged, part);
        }
        if let Some(scheme) = &props.color_scheme {
            apply_color_scheme(&mut merged, scheme);
        }
        match merged {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }
}

fn apply_color_scheme(value: &mut Value, scheme: &str) {
    match value {
        Value::String(s) => {
            if let Some(rest) = s.strip_prefix(COLOR_SCHEME_PREFIX) {
                *s = format!("{scheme}.{rest}");
            }
        }
        Value::Array(items) => items.iter_mut().for_each(|v| apply_color_scheme(v, scheme)),
        Value::Object(map) => map.values_mut().for_each(|v| apply_color_scheme(v, scheme)),
        _ => {}
    }
}

/// Resolves the style of component `name` for `props`.
///
/// A component missing from the theme has an empty style.
///
/// ```rust
/// use beae_styled::{use_style_config, ColorMode, ComponentProps, StyleContext, Theme};
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({
///     "colors": { "red": { "500": "#e53e3e" } },
///     "space": { "4": "1rem" },
///     "components": {
///         "Button": {
///             "baseStyle": { "px": 4 },
///             "variants": { "solid": { "bg": "colorScheme.500" } },
///             "defaultProps": { "variant": "solid" },
///         },
///     },
/// })).unwrap();
/// let ctx = StyleContext::new(&theme, ColorMode::Light);
///
/// let style = use_style_config("Button", &ComponentProps::new().color_scheme("red"), &ctx).unwrap();
/// assert_eq!(style["paddingInline"], json!("1rem"));
/// assert_eq!(style["background"], json!("#e53e3e"));
/// ```
pub fn use_style_config(
    name: &str,
    props: &ComponentProps,
    ctx: &StyleContext<'_>,
) -> Result<StyleObject, StyleError> {
    let Some(config) = StyleConfig::from_theme(ctx.theme, name) else {
        tracing::trace!(component = name, "no style config in theme");
        return Ok(StyleObject::new());
    };
    css_value(&config.merged_style(props), ctx)
}
