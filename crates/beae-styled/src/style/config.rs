//! Prop config entries and the assembled prop table.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use super::groups;
use crate::error::{ConfigError, StyleError};
use crate::value::StyleContext;

/// Converts a token-resolved value into its final CSS value.
///
/// A transform may return an object, which is spread as several
/// declarations, or `null` to emit nothing.
pub type Transform = fn(Value, &StyleContext<'_>) -> Result<Value, StyleError>;

/// Fixed declarations emitted next to the prop's own value.
pub type StaticStyle = fn(&StyleContext<'_>) -> Map<String, Value>;

/// How one style prop maps onto CSS.
#[derive(Clone, Copy)]
pub struct PropConfig {
    /// CSS properties receiving the value. Custom properties are written
    /// without prefix (`--ring-color`) and flagged with `is_css_var`.
    pub properties: &'static [&'static str],
    /// Token category consulted before transforming.
    pub scale: Option<&'static str>,
    pub transform: Option<Transform>,
    /// `properties` name custom properties that get the theme prefix.
    pub is_css_var: bool,
    pub static_style: Option<StaticStyle>,
    /// The transform returns style props that are resolved again.
    pub process_result: bool,
}

impl PropConfig {
    /// A plain CSS property with no token lookup.
    pub const fn prop(properties: &'static [&'static str]) -> Self {
        Self {
            properties,
            scale: None,
            transform: None,
            is_css_var: false,
            static_style: None,
            process_result: false,
        }
    }

    /// Properties whose values are looked up in `scale`.
    pub const fn token(properties: &'static [&'static str], scale: &'static str) -> Self {
        Self {
            scale: Some(scale),
            ..Self::prop(properties)
        }
    }

    /// An entry whose transform produces all declarations.
    pub const fn expand(transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..Self::prop(&[])
        }
    }

    pub const fn with_transform(self, transform: Transform) -> Self {
        Self {
            transform: Some(transform),
            ..self
        }
    }

    pub const fn css_var(self) -> Self {
        Self {
            is_css_var: true,
            ..self
        }
    }

    pub const fn with_static(self, static_style: StaticStyle) -> Self {
        Self {
            static_style: Some(static_style),
            ..self
        }
    }

    pub const fn processed(self) -> Self {
        Self {
            process_result: true,
            ..self
        }
    }
}

impl fmt::Debug for PropConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropConfig")
            .field("properties", &self.properties)
            .field("scale", &self.scale)
            .field("transform", &self.transform.is_some())
            .field("is_css_var", &self.is_css_var)
            .field("static_style", &self.static_style.is_some())
            .field("process_result", &self.process_result)
            .finish()
    }
}

/// A named group of related props, e.g. `color` or `flexbox`.
#[derive(Debug, Clone)]
pub struct PropGroup {
    pub name: &'static str,
    pub props: Vec<(&'static str, PropConfig)>,
}

impl PropGroup {
    pub fn new(name: &'static str, props: Vec<(&'static str, PropConfig)>) -> Self {
        Self { name, props }
    }
}

/// The flat prop-name → config table.
#[derive(Debug, Clone, Default)]
pub struct PropConfigTable {
    entries: HashMap<&'static str, (PropConfig, &'static str)>,
}

impl PropConfigTable {
    /// Merges `groups` into one table, failing on the first prop name that
    /// two groups both define.
    pub fn assemble(groups: Vec<PropGroup>) -> Result<Self, ConfigError> {
        let mut entries: HashMap<&'static str, (PropConfig, &'static str)> = HashMap::new();
        for group in groups {
            for (name, config) in group.props {
                if let Some((_, first)) = entries.get(name) {
                    return Err(ConfigError::DuplicateProp {
                        name: name.to_string(),
                        first: *first,
                        second: group.name,
                    });
                }
                entries.insert(name, (config, group.name));
            }
        }
        Ok(Self { entries })
    }

    fn assemble_unchecked(groups: Vec<PropGroup>) -> Self {
        let entries = groups
            .into_iter()
            .flat_map(|group| {
                let name = group.name;
                group
                    .props
                    .into_iter()
                    .map(move |(prop, config)| (prop, (config, name)))
            })
            .collect();
        Self { entries }
    }

    pub fn lookup(&self, name: &str) -> Option<&PropConfig> {
        self.entries.get(name).map(|(config, _)| config)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// The group that defined `name`.
    pub fn group_of(&self, name: &str) -> Option<&'static str> {
        self.entries.get(name).map(|(_, group)| *group)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Collisions are an authoring error caught by the tests below, so the
// shared table is built without re-checking on every start.
static PROP_TABLE: Lazy<PropConfigTable> =
    Lazy::new(|| PropConfigTable::assemble_unchecked(groups::all()));

/// The process-wide prop table built from every built-in group.
pub fn prop_table() -> &'static PropConfigTable {
    &PROP_TABLE
}

/// Looks up a style prop in the built-in table.
pub fn lookup(name: &str) -> Option<&'static PropConfig> {
    PROP_TABLE.lookup(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_groups_do_not_collide() {
        let table = PropConfigTable::assemble(groups::all());
        assert!(table.is_ok(), "{:?}", table.err());
    }

    #[test]
    fn collision_is_reported_with_both_groups() {
        let err = PropConfigTable::assemble(vec![
            PropGroup::new("color", vec![("color", PropConfig::token(&["color"], "colors"))]),
            PropGroup::new("typography", vec![("color", PropConfig::prop(&["color"]))]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::DuplicateProp {
                name: "color".to_string(),
                first: "color",
                second: "typography",
            }
        );
    }

    #[test]
    fn lookup_common_props() {
        let color = lookup("color").unwrap();
        assert_eq!(color.properties, &["color"]);
        assert_eq!(color.scale, Some("colors"));

        let px = lookup("px").unwrap();
        assert_eq!(px.properties, &["paddingInline"]);
        assert_eq!(px.scale, Some("space"));

        assert!(lookup("notAProp").is_none());
        assert_eq!(prop_table().group_of("ringColor"), Some("ring"));
    }

    #[test]
    fn builders_compose() {
        let config = PropConfig::token(&["--ring-color"], "colors").css_var();
        assert!(config.is_css_var);
        assert_eq!(config.scale, Some("colors"));
        assert!(!config.process_result);
    }
}
