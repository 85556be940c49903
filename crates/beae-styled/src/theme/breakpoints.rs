//! Breakpoint ranking and media query generation.

use serde_json::{Map, Value};

use crate::error::ThemeShapeError;

/// Name of the implicit smallest breakpoint.
pub const BASE: &str = "base";

const PX_PER_EM: f64 = 16.0;

/// A named viewport-width threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoint {
    pub name: String,
    /// The width as written in the theme, e.g. `"30em"`.
    pub min_width: String,
    /// The width in pixels, used for ranking.
    pub px: f64,
}

impl Breakpoint {
    /// The media query that activates this breakpoint, or `None` for `base`.
    pub fn media_query(&self) -> Option<String> {
        if self.name == BASE {
            None
        } else {
            Some(format!("@media screen and (min-width: {})", self.min_width))
        }
    }
}

/// Breakpoints of a theme, sorted by ascending width with `base` first.
///
/// ```rust
/// use beae_styled::Breakpoints;
/// use serde_json::json;
///
/// let bps = Breakpoints::from_value(&json!({
///     "base": "0em", "md": "48em", "sm": "30em",
/// })).unwrap();
/// assert_eq!(bps.names(), vec!["base", "sm", "md"]);
/// assert_eq!(bps.rank("md"), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    ranked: Vec<Breakpoint>,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            ranked: vec![Breakpoint {
                name: BASE.to_string(),
                min_width: "0em".to_string(),
                px: 0.0,
            }],
        }
    }
}

impl Breakpoints {
    /// Reads the theme's `breakpoints` object.
    ///
    /// A missing `base` entry is added with a zero width; a `base` with a
    /// non-zero width is rejected, as is any width that is not a plain
    /// number or a `px`/`em`/`rem` length.
    pub fn from_value(value: &Value) -> Result<Self, ThemeShapeError> {
        let map = value.as_object().ok_or_else(|| ThemeShapeError::NotAnObject {
            key: "breakpoints".to_string(),
        })?;
        Self::from_map(map)
    }

    fn from_map(map: &Map<String, Value>) -> Result<Self, ThemeShapeError> {
        let mut ranked = Vec::with_capacity(map.len() + 1);
        for (name, raw) in map {
            let min_width = match raw {
                Value::String(s) => s.clone(),
                Value::Number(n) => format!("{n}px"),
                other => {
                    return Err(ThemeShapeError::InvalidBreakpoint {
                        name: name.clone(),
                        value: other.to_string(),
                    })
                }
            };
            let px = parse_width(&min_width).ok_or_else(|| ThemeShapeError::InvalidBreakpoint {
                name: name.clone(),
                value: min_width.clone(),
            })?;
            if name == BASE && px != 0.0 {
                return Err(ThemeShapeError::MissingBaseBreakpoint);
            }
            ranked.push(Breakpoint {
                name: name.clone(),
                min_width,
                px,
            });
        }
        if !ranked.iter().any(|bp| bp.name == BASE) {
            ranked.push(Breakpoint {
                name: BASE.to_string(),
                min_width: "0em".to_string(),
                px: 0.0,
            });
        }
        // Stable sort: equal widths keep theme order, base stays ahead of
        // any other zero-width entry.
        ranked.sort_by(|a, b| {
            a.px.total_cmp(&b.px)
                .then_with(|| (b.name == BASE).cmp(&(a.name == BASE)))
        });
        Ok(Self { ranked })
    }

    /// Breakpoints in ascending order, `base` first.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.ranked.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.ranked.iter().map(|bp| bp.name.as_str()).collect()
    }

    /// Number of breakpoints including `base`.
    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.ranked.iter().find(|bp| bp.name == name)
    }

    /// Position of `name` in ascending order (`base` is 0).
    pub fn rank(&self, name: &str) -> Option<usize> {
        self.ranked.iter().position(|bp| bp.name == name)
    }

    /// The breakpoint at a responsive-array index.
    pub fn at(&self, index: usize) -> Option<&Breakpoint> {
        self.ranked.get(index)
    }

    /// Rank of the breakpoint owning a generated media query, if any.
    pub fn rank_of_media_query(&self, query: &str) -> Option<usize> {
        self.ranked
            .iter()
            .position(|bp| bp.media_query().as_deref() == Some(query))
    }
}

/// Parses a width into pixels. Unitless numbers count as pixels.
fn parse_width(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let (number, scale) = if let Some(n) = raw.strip_suffix("rem") {
        (n, PX_PER_EM)
    } else if let Some(n) = raw.strip_suffix("em") {
        (n, PX_PER_EM)
    } else if let Some(n) = raw.strip_suffix("px") {
        (n, 1.0)
    } else {
        (raw, 1.0)
    };
    let value: f64 = number.trim().parse().ok()?;
    value.is_finite().then_some(value * scale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ranks_by_width_not_insertion() {
        let bps = Breakpoints::from_value(&json!({
            "xl": "80em", "base": "0em", "sm": "480px", "md": "48em"
        }))
        .unwrap();
        assert_eq!(bps.names(), vec!["base", "sm", "md", "xl"]);
    }

    #[test]
    fn base_is_added_when_missing() {
        let bps = Breakpoints::from_value(&json!({ "sm": "30em" })).unwrap();
        assert_eq!(bps.names(), vec!["base", "sm"]);
        assert_eq!(bps.len(), 2);
    }

    #[test]
    fn media_queries() {
        let bps = Breakpoints::from_value(&json!({ "base": "0em", "sm": "30em" })).unwrap();
        assert_eq!(bps.get("base").unwrap().media_query(), None);
        assert_eq!(
            bps.get("sm").unwrap().media_query().unwrap(),
            "@media screen and (min-width: 30em)"
        );
        assert_eq!(
            bps.rank_of_media_query("@media screen and (min-width: 30em)"),
            Some(1)
        );
    }

    #[test]
    fn numeric_widths_are_pixels() {
        let bps = Breakpoints::from_value(&json!({ "sm": 480 })).unwrap();
        assert_eq!(bps.get("sm").unwrap().min_width, "480px");
    }

    #[test]
    fn rejects_bad_widths() {
        let err = Breakpoints::from_value(&json!({ "sm": "wide" })).unwrap_err();
        assert!(matches!(err, ThemeShapeError::InvalidBreakpoint { .. }));

        let err = Breakpoints::from_value(&json!({ "base": "10em" })).unwrap_err();
        assert_eq!(err, ThemeShapeError::MissingBaseBreakpoint);

        let err = Breakpoints::from_value(&json!(["30em"])).unwrap_err();
        assert!(matches!(err, ThemeShapeError::NotAnObject { .. }));
    }

    #[test]
    fn parse_width_units() {
        assert_eq!(parse_width("30em"), Some(480.0));
        assert_eq!(parse_width("2rem"), Some(32.0));
        assert_eq!(parse_width("100px"), Some(100.0));
        assert_eq!(parse_width("12"), Some(12.0));
        assert_eq!(parse_width("12vw"), None);
    }
}
