//! The immutable theme value consumed by the resolution pipeline.

use std::sync::Arc;

use serde_json::{Map, Value};

use super::breakpoints::Breakpoints;
use super::config::ThemeConfig;
use super::foundations;
use super::validate::validate_theme_shape;
use crate::css_var::{project_theme, CssProjection, CSS_MAP_KEY, CSS_VARS_KEY};
use crate::error::{StyleError, ThemeShapeError};

/// A design theme: token categories, semantic tokens, component styles,
/// global styles and config.
///
/// A `Theme` is never mutated after construction. Extending it
/// ([`extend_theme`](crate::extend_theme)) and projecting it to CSS
/// variables ([`Theme::with_css_vars`]) both return new values, so one
/// theme can be shared by any number of renders.
///
/// # Example
///
/// ```rust
/// use beae_styled::Theme;
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({
///     "breakpoints": { "base": "0em", "sm": "30em" },
///     "colors": { "red": { "500": "#e53e3e" } },
///     "space": { "4": "1rem" },
/// })).unwrap();
///
/// assert_eq!(theme.token("colors", "red.500"), Some(&json!("#e53e3e")));
/// assert_eq!(theme.breakpoints().names(), vec!["base", "sm"]);
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    raw: Map<String, Value>,
    config: ThemeConfig,
    breakpoints: Breakpoints,
    projection: Option<Arc<CssProjection>>,
}

impl Theme {
    /// Builds a theme from a JSON tree.
    ///
    /// Any `__cssVars` / `__cssMap` annotations left over from a previous
    /// projection are discarded; call [`Theme::with_css_vars`] to project
    /// again.
    pub fn from_value(value: Value) -> Result<Self, ThemeShapeError> {
        let mut raw = match value {
            Value::Object(map) => map,
            _ => {
                return Err(ThemeShapeError::NotAnObject {
                    key: "theme".to_string(),
                })
            }
        };
        raw.remove(CSS_VARS_KEY);
        raw.remove(CSS_MAP_KEY);

        let config = ThemeConfig::from_value(raw.get("config"))?;
        let breakpoints = match raw.get("breakpoints") {
            Some(bps) => Breakpoints::from_value(bps)?,
            None => Breakpoints::default(),
        };
        Ok(Self {
            raw,
            config,
            breakpoints,
            projection: None,
        })
    }

    /// Assembles a theme from parts that are already known to be
    /// well-formed, such as the built-in foundations.
    pub(crate) fn from_parts(
        raw: Map<String, Value>,
        config: ThemeConfig,
        breakpoints: Breakpoints,
    ) -> Self {
        Self {
            raw,
            config,
            breakpoints,
            projection: None,
        }
    }

    /// Parses a theme from JSON text.
    pub fn from_json_str(source: &str) -> Result<Self, ThemeShapeError> {
        let value: Value = serde_json::from_str(source).map_err(|e| ThemeShapeError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Parses a theme from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self, ThemeShapeError> {
        let value: Value = serde_yaml::from_str(source).map_err(|e| ThemeShapeError::Parse {
            message: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// The built-in theme with every foundation category populated.
    pub fn default_theme() -> Self {
        foundations::DEFAULT_THEME.clone()
    }

    /// The theme tree without projection annotations.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Builds a custom property name with this theme's prefix.
    pub fn css_var(&self, name: &str) -> String {
        self.config.css_var(name)
    }

    /// A token category such as `colors` or `space`. Nested scales are
    /// addressed by dotted path (`transition.duration`).
    pub fn category(&self, name: &str) -> Option<&Map<String, Value>> {
        lookup_in(&self.raw, name).and_then(Value::as_object)
    }

    /// Semantic tokens of a category (`semanticTokens.<name>`).
    pub fn semantic_category(&self, name: &str) -> Option<&Map<String, Value>> {
        self.raw
            .get("semanticTokens")
            .and_then(|tokens| lookup_path(tokens, name))
            .and_then(Value::as_object)
    }

    /// Looks up a literal token by dotted path, e.g. `token("colors", "red.500")`.
    pub fn token(&self, category: &str, path: &str) -> Option<&Value> {
        self.category(category).and_then(|c| lookup_in(c, path))
    }

    /// Looks up any value in the theme tree by dotted path.
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup_in(&self.raw, path)
    }

    /// The cached CSS variable projection, present after
    /// [`Theme::with_css_vars`].
    pub fn css_projection(&self) -> Option<&CssProjection> {
        self.projection.as_deref()
    }

    pub fn is_projected(&self) -> bool {
        self.projection.is_some()
    }

    /// Returns a copy of this theme annotated with its CSS variable
    /// projection.
    ///
    /// The projection is always recomputed from the un-annotated tree, so
    /// calling this on an already projected theme yields an identical
    /// projection.
    pub fn with_css_vars(&self) -> Result<Self, StyleError> {
        let projection = project_theme(self)?;
        Ok(Self {
            raw: self.raw.clone(),
            config: self.config.clone(),
            breakpoints: self.breakpoints.clone(),
            projection: Some(Arc::new(projection)),
        })
    }

    /// Returns a copy of this theme without its projection.
    pub fn without_css_vars(&self) -> Self {
        Self {
            projection: None,
            ..self.clone()
        }
    }

    /// Serializes the theme, including `__cssVars` / `__cssMap` when
    /// projected.
    pub fn to_value(&self) -> Value {
        let mut raw = self.raw.clone();
        if let Some(projection) = &self.projection {
            raw.insert(CSS_VARS_KEY.to_string(), projection.css_vars_value());
            raw.insert(CSS_MAP_KEY.to_string(), projection.css_map_value());
        }
        Value::Object(raw)
    }

    /// Checks that every required token category is present.
    pub fn validate(&self) -> Result<(), ThemeShapeError> {
        validate_theme_shape(&self.raw)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

/// Theme equality ignores the cached projection, which is derived from the
/// tree.
impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

/// Walks a dotted path through nested objects.
///
/// Keys may themselves contain dots (`space."0.5"`), so at each level the
/// whole remaining path is tried before splitting off a head segment.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    lookup_in(value.as_object()?, path)
}

pub(crate) fn lookup_in<'a>(map: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    if let Some(found) = map.get(path) {
        return Some(found);
    }
    path.match_indices('.').find_map(|(idx, _)| {
        let (head, tail) = (&path[..idx], &path[idx + 1..]);
        map.get(head).and_then(|next| lookup_path(next, tail))
    })
}
