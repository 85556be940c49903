//! Responsive value expansion.
//!
//! A prop value is either a scalar, a mobile-first array indexed by
//! breakpoint rank, or an object keyed by breakpoint name. Expansion turns
//! all three into `(breakpoint, scalar)` pairs in ascending breakpoint
//! order, so media queries are emitted smallest first.

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::theme::{Breakpoint, Breakpoints, BASE};

/// A classified prop value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponsiveValue<'a> {
    Scalar(&'a Value),
    Array(&'a [Value]),
    Object(&'a Map<String, Value>),
}

impl<'a> ResponsiveValue<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Array(items) => ResponsiveValue::Array(items),
            Value::Object(map) => ResponsiveValue::Object(map),
            other => ResponsiveValue::Scalar(other),
        }
    }
}

/// One expanded value. `breakpoint` is `None` for the base style.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expanded<'a> {
    pub breakpoint: Option<&'a Breakpoint>,
    pub value: &'a Value,
}

impl Expanded<'_> {
    /// The breakpoint's name, `None` for base.
    pub fn name(&self) -> Option<&str> {
        self.breakpoint.map(|bp| bp.name.as_str())
    }

    /// The media query this value is emitted under.
    pub fn media_query(&self) -> Option<String> {
        self.breakpoint.and_then(Breakpoint::media_query)
    }
}

/// Expands `value` across `breakpoints`.
///
/// `null` slots are skipped rather than emitted, so `[null, "red"]` styles
/// only `sm` and up. Object keys are emitted in breakpoint rank order
/// whatever order they were written in.
///
/// # Errors
///
/// - [`ConfigError::TooManyResponsiveValues`] if an array has more slots
///   than there are breakpoints.
/// - [`ConfigError::UnknownBreakpoint`] for an object key that names no
///   breakpoint.
///
/// ```rust
/// use beae_styled::{expand, Breakpoints};
/// use serde_json::json;
///
/// let bps = Breakpoints::from_value(&json!({
///     "base": "0em", "sm": "30em", "md": "48em", "lg": "62em", "xl": "80em",
/// })).unwrap();
/// let value = json!(["red", null, "blue"]);
/// let expanded = expand(&value, &bps).unwrap();
/// let pairs: Vec<_> = expanded
///     .iter()
///     .map(|e| (e.name(), e.value.clone()))
///     .collect();
/// assert_eq!(pairs, vec![(None, json!("red")), (Some("md"), json!("blue"))]);
/// ```
pub fn expand<'a>(
    value: &'a Value,
    breakpoints: &'a Breakpoints,
) -> Result<Vec<Expanded<'a>>, ConfigError> {
    match ResponsiveValue::classify(value) {
        ResponsiveValue::Scalar(Value::Null) => Ok(Vec::new()),
        ResponsiveValue::Scalar(value) => Ok(vec![Expanded {
            breakpoint: None,
            value,
        }]),
        ResponsiveValue::Array(items) => expand_array(items, breakpoints),
        ResponsiveValue::Object(map) => expand_object(map, breakpoints),
    }
}

fn expand_array<'a>(
    items: &'a [Value],
    breakpoints: &'a Breakpoints,
) -> Result<Vec<Expanded<'a>>, ConfigError> {
    if items.len() > breakpoints.len() {
        return Err(ConfigError::TooManyResponsiveValues {
            len: items.len(),
            max: breakpoints.len(),
        });
    }
    Ok(items
        .iter()
        .enumerate()
        .filter(|(_, value)| !value.is_null())
        .map(|(index, value)| Expanded {
            breakpoint: base_as_none(breakpoints.at(index)),
            value,
        })
        .collect())
}

fn expand_object<'a>(
    map: &'a Map<String, Value>,
    breakpoints: &'a Breakpoints,
) -> Result<Vec<Expanded<'a>>, ConfigError> {
    let mut ranked = Vec::with_capacity(map.len());
    for (key, value) in map {
        let rank = breakpoints
            .rank(key)
            .ok_or_else(|| ConfigError::UnknownBreakpoint {
                key: key.clone(),
                available: breakpoints.names().into_iter().map(String::from).collect(),
            })?;
        if value.is_null() {
            continue;
        }
        ranked.push((rank, value));
    }
    ranked.sort_by_key(|(rank, _)| *rank);
    Ok(ranked
        .into_iter()
        .map(|(rank, value)| Expanded {
            breakpoint: base_as_none(breakpoints.at(rank)),
            value,
        })
        .collect())
}

fn base_as_none(breakpoint: Option<&Breakpoint>) -> Option<&Breakpoint> {
    breakpoint.filter(|bp| bp.name != BASE)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn expansion_is_rank_ordered_and_null_free(
            slots in prop::collection::vec(prop::option::of(0i64..100), 0..=5),
        ) {
            let bps = Breakpoints::from_value(&json!({
                "base": "0em", "sm": "30em", "md": "48em", "lg": "62em", "xl": "80em",
            })).unwrap();
            let value = Value::Array(
                slots.iter().map(|s| s.map(Value::from).unwrap_or(Value::Null)).collect(),
            );
            let expanded = expand(&value, &bps).unwrap();

            prop_assert_eq!(expanded.len(), slots.iter().filter(|s| s.is_some()).count());
            prop_assert!(expanded.iter().all(|e| !e.value.is_null()));

            let ranks: Vec<usize> = expanded
                .iter()
                .map(|e| e.name().and_then(|n| bps.rank(n)).unwrap_or(0))
                .collect();
            prop_assert!(ranks.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
