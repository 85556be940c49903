//! Theme-level configuration read from the theme's `config` key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::color_mode::{ColorMode, ColorModePreference};
use crate::error::ThemeShapeError;

/// Prefix used for generated CSS custom properties when none is configured.
pub const DEFAULT_CSS_VAR_PREFIX: &str = "beae";

/// Recognized theme options.
///
/// ```rust
/// use beae_styled::{ColorModePreference, ThemeConfig};
///
/// let config: ThemeConfig = serde_json::from_value(serde_json::json!({
///     "initialColorMode": "dark",
///     "cssVarPrefix": "acme",
/// })).unwrap();
/// assert_eq!(config.initial_color_mode, ColorModePreference::Dark);
/// assert_eq!(config.css_var_prefix, "acme");
/// assert!(!config.use_system_color_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub initial_color_mode: ColorModePreference,
    pub use_system_color_mode: bool,
    pub css_var_prefix: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial_color_mode: ColorModePreference::Light,
            use_system_color_mode: false,
            css_var_prefix: DEFAULT_CSS_VAR_PREFIX.to_string(),
        }
    }
}

impl ThemeConfig {
    /// Reads the config from a theme's `config` value. A missing key yields
    /// the defaults.
    pub fn from_value(value: Option<&Value>) -> Result<Self, ThemeShapeError> {
        match value {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                ThemeShapeError::InvalidConfig {
                    message: e.to_string(),
                }
            }),
        }
    }

    /// The mode to start rendering in.
    ///
    /// `useSystemColorMode` takes precedence over `initialColorMode`.
    pub fn initial_color_mode(&self) -> ColorMode {
        if self.use_system_color_mode {
            ColorModePreference::System.resolve()
        } else {
            self.initial_color_mode.resolve()
        }
    }

    /// Builds a custom property name under this config's prefix.
    ///
    /// An empty prefix yields `--name`.
    pub fn css_var(&self, name: &str) -> String {
        css_var_name(&self.css_var_prefix, name)
    }
}

/// Builds `--{prefix}-{name}`, dropping the prefix segment when empty and
/// any leading dashes on `name`.
pub fn css_var_name(prefix: &str, name: &str) -> String {
    let name = name.trim_start_matches('-');
    if prefix.is_empty() {
        format!("--{name}")
    } else {
        format!("--{prefix}-{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::set_color_mode_detector;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    fn missing_config_uses_defaults() {
        let config = ThemeConfig::from_value(None).unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.css_var_prefix, "beae");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = ThemeConfig::from_value(Some(&json!({ "cssVarPrefix": "x" }))).unwrap();
        assert_eq!(config.css_var_prefix, "x");
        assert_eq!(config.initial_color_mode, ColorModePreference::Light);
    }

    #[test]
    fn invalid_mode_is_rejected() {
        let err = ThemeConfig::from_value(Some(&json!({ "initialColorMode": "sepia" })));
        assert!(matches!(err, Err(ThemeShapeError::InvalidConfig { .. })));
    }

    #[test]
    fn css_var_names() {
        let config = ThemeConfig::default();
        assert_eq!(config.css_var("ring-color"), "--beae-ring-color");
        assert_eq!(config.css_var("--ring-color"), "--beae-ring-color");
        assert_eq!(css_var_name("", "line-clamp"), "--line-clamp");
    }

    #[test]
    #[serial]
    fn system_flag_overrides_initial_mode() {
        set_color_mode_detector(|| ColorMode::Dark);
        let config = ThemeConfig {
            initial_color_mode: ColorModePreference::Light,
            use_system_color_mode: true,
            ..ThemeConfig::default()
        };
        assert_eq!(config.initial_color_mode(), ColorMode::Dark);
        set_color_mode_detector(|| ColorMode::Light);
    }
}
