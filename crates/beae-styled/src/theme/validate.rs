//! Theme shape validation.

use serde_json::{Map, Value};

use crate::error::ThemeShapeError;

/// Token categories every full theme must define.
pub const REQUIRED_CATEGORIES: &[&str] = &[
    "breakpoints",
    "colors",
    "space",
    "sizes",
    "fontSizes",
    "fontWeights",
    "lineHeights",
    "letterSpacings",
    "radii",
    "shadows",
    "zIndices",
    "transition",
];

/// Keys that are optional but must be objects when present.
const OBJECT_KEYS: &[&str] = &["components", "semanticTokens", "styles", "config"];

/// Checks that `theme` has every required category and that category
/// values are objects.
pub fn validate_theme_shape(theme: &Map<String, Value>) -> Result<(), ThemeShapeError> {
    for category in REQUIRED_CATEGORIES {
        match theme.get(*category) {
            None => {
                return Err(ThemeShapeError::MissingCategory {
                    category: category.to_string(),
                })
            }
            Some(Value::Object(_)) => {}
            Some(_) => {
                return Err(ThemeShapeError::NotAnObject {
                    key: category.to_string(),
                })
            }
        }
    }
    for key in OBJECT_KEYS {
        if let Some(value) = theme.get(*key) {
            if !value.is_object() {
                return Err(ThemeShapeError::NotAnObject {
                    key: key.to_string(),
                });
            }
        }
    }
    Ok(())
}

/// Returns `true` if `value` looks like a complete theme.
pub fn is_theme(value: &Value) -> bool {
    value
        .as_object()
        .is_some_and(|map| validate_theme_shape(map).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn complete() -> Map<String, Value> {
        REQUIRED_CATEGORIES
            .iter()
            .map(|c| (c.to_string(), json!({})))
            .collect()
    }

    #[test]
    fn accepts_complete_theme() {
        assert!(validate_theme_shape(&complete()).is_ok());
        assert!(is_theme(&Value::Object(complete())));
    }

    #[test]
    fn reports_first_missing_category() {
        let mut theme = complete();
        theme.remove("radii");
        assert_eq!(
            validate_theme_shape(&theme),
            Err(ThemeShapeError::MissingCategory {
                category: "radii".to_string()
            })
        );
    }

    #[test]
    fn rejects_non_object_category() {
        let mut theme = complete();
        theme.insert("colors".to_string(), json!(["red"]));
        assert!(matches!(
            validate_theme_shape(&theme),
            Err(ThemeShapeError::NotAnObject { .. })
        ));

        let mut theme = complete();
        theme.insert("components".to_string(), json!("nope"));
        assert!(validate_theme_shape(&theme).is_err());
    }

    #[test]
    fn partial_theme_is_not_a_theme() {
        assert!(!is_theme(&json!({ "colors": {} })));
        assert!(!is_theme(&json!("theme")));
    }
}
