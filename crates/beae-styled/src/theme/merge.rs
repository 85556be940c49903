//! Theme extension: deep-merging partial themes and applying scripted
//! transforms.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::theme::Theme;
use crate::css_var::{CSS_MAP_KEY, CSS_VARS_KEY};
use crate::error::StyleError;

type ThemeTransform = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// One step of a theme extension pipeline.
///
/// A partial theme is deep-merged into the running theme; a transform
/// receives the running theme tree and returns the next one.
#[derive(Clone)]
pub enum Extension {
    Partial(Value),
    Transform(ThemeTransform),
}

impl Extension {
    pub fn partial(value: Value) -> Self {
        Extension::Partial(value)
    }

    pub fn transform<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Extension::Transform(Arc::new(f))
    }

    fn apply(&self, theme: Value) -> Value {
        match self {
            Extension::Partial(overrides) => {
                let mut theme = theme;
                deep_merge(&mut theme, overrides.clone());
                theme
            }
            Extension::Transform(f) => f(theme),
        }
    }
}

impl fmt::Debug for Extension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extension::Partial(value) => f.debug_tuple("Partial").field(value).finish(),
            Extension::Transform(_) => f.write_str("Transform(..)"),
        }
    }
}

impl From<Value> for Extension {
    fn from(value: Value) -> Self {
        Extension::Partial(value)
    }
}

/// Applies `extensions` in order on top of `base`, returning a new theme.
///
/// `base` is left untouched. Its cached projection is dropped, so the
/// result carries no CSS variables until
/// [`Theme::with_css_vars`] is called on it.
pub fn merge_themes<I>(base: &Theme, extensions: I) -> Result<Theme, StyleError>
where
    I: IntoIterator<Item = Extension>,
{
    let mut tree = Value::Object(base.raw().clone());
    strip_annotations(&mut tree);
    let mut steps = 0usize;
    let merged = extensions.into_iter().fold(tree, |theme, extension| {
        steps += 1;
        let mut next = extension.apply(theme);
        strip_annotations(&mut next);
        next
    });
    tracing::debug!(steps, "extended theme");
    Ok(Theme::from_value(merged)?)
}

/// Extends the built-in theme with `overrides`, then applies `extensions`.
///
/// ```rust
/// use beae_styled::{extend_theme, with_default_color_scheme};
/// use serde_json::json;
///
/// let theme = extend_theme(
///     json!({ "colors": { "brand": { "500": "#ff0080" } } }),
///     [with_default_color_scheme("brand", Some(&["Button"]))],
/// ).unwrap();
///
/// assert_eq!(theme.token("colors", "brand.500"), Some(&json!("#ff0080")));
/// assert_eq!(theme.token("colors", "red.500"), Some(&json!("#E53E3E")));
/// assert_eq!(
///     theme.get("components.Button.defaultProps.colorScheme"),
///     Some(&json!("brand"))
/// );
/// ```
pub fn extend_theme<I>(overrides: impl Into<Extension>, extensions: I) -> Result<Theme, StyleError>
where
    I: IntoIterator<Item = Extension>,
{
    extend_theme_from(&Theme::default_theme(), overrides, extensions)
}

/// Like [`extend_theme`] but on top of a caller-supplied base, which must be
/// a complete theme.
pub fn extend_theme_from<I>(
    base: &Theme,
    overrides: impl Into<Extension>,
    extensions: I,
) -> Result<Theme, StyleError>
where
    I: IntoIterator<Item = Extension>,
{
    base.validate()?;
    merge_themes(base, std::iter::once(overrides.into()).chain(extensions))
}

/// Merges `source` into `target`.
///
/// Objects merge key by key; every other value, arrays included, replaces
/// the target wholesale.
pub fn deep_merge(target: &mut Value, source: Value) {
    match (target, source) {
        (Value::Object(target), Value::Object(source)) => merge_maps(target, source),
        (target, source) => *target = source,
    }
}

pub(crate) fn merge_maps(target: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(&key) {
            Some(existing) if existing.is_object() && value.is_object() => {
                deep_merge(existing, value)
            }
            _ => {
                target.insert(key, value);
            }
        }
    }
}

fn strip_annotations(theme: &mut Value) {
    if let Some(map) = theme.as_object_mut() {
        map.remove(CSS_VARS_KEY);
        map.remove(CSS_MAP_KEY);
    }
}

/// Sets `defaultProps.colorScheme` on the named components, or on every
/// component in the theme when `components` is `None`.
pub fn with_default_color_scheme(color_scheme: &str, components: Option<&[&str]>) -> Extension {
    with_default_prop("colorScheme", color_scheme, components)
}

/// Sets `defaultProps.size` on the named components.
pub fn with_default_size(size: &str, components: Option<&[&str]>) -> Extension {
    with_default_prop("size", size, components)
}

/// Sets `defaultProps.variant` on the named components.
pub fn with_default_variant(variant: &str, components: Option<&[&str]>) -> Extension {
    with_default_prop("variant", variant, components)
}

/// Merges an arbitrary `defaultProps` object into the named components.
pub fn with_default_props(default_props: Value, components: Option<&[&str]>) -> Extension {
    let names = components.map(|names| names.iter().map(|n| n.to_string()).collect::<Vec<_>>());
    Extension::transform(move |mut theme| {
        let Some(root) = theme.as_object_mut() else {
            return theme;
        };
        let components = root
            .entry("components")
            .or_insert_with(|| Value::Object(Map::new()));
        let Some(components) = components.as_object_mut() else {
            return theme;
        };
        let targets: Vec<String> = match &names {
            Some(names) => names.clone(),
            None => components.keys().cloned().collect(),
        };
        for name in targets {
            let component = components
                .entry(name)
                .or_insert_with(|| Value::Object(Map::new()));
            deep_merge(
                component,
                Value::Object(Map::from_iter([(
                    "defaultProps".to_string(),
                    default_props.clone(),
                )])),
            );
        }
        theme
    })
}

fn with_default_prop(key: &str, value: &str, components: Option<&[&str]>) -> Extension {
    with_default_props(
        Value::Object(Map::from_iter([(
            key.to_string(),
            Value::String(value.to_string()),
        )])),
        components,
    )
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn merge_never_mutates_base(
            key in "[a-z]{1,6}",
            value in "[a-z0-9#]{1,8}",
        ) {
            let base = Theme::from_value(json!({ "colors": { "a": "1" } })).unwrap();
            let before = base.clone();
            let merged = merge_themes(
                &base,
                [Extension::partial(json!({ "colors": { key.clone(): value.clone() } }))],
            ).unwrap();
            prop_assert_eq!(&base, &before);
            let expected = json!(value);
            prop_assert_eq!(merged.token("colors", &key), Some(&expected));
        }
    }
}
