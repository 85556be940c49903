//! Color modes and system color-mode detection.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// The active color mode used to pick semantic token values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// The semantic token key holding this mode's value (`_light` / `_dark`).
    pub fn token_key(self) -> &'static str {
        match self {
            ColorMode::Light => "_light",
            ColorMode::Dark => "_dark",
        }
    }

    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The color mode a theme asks for at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModePreference {
    #[default]
    Light,
    Dark,
    /// Follow the operating system setting.
    System,
}

impl ColorModePreference {
    /// Resolves the preference to a concrete mode, consulting the system
    /// detector for [`ColorModePreference::System`].
    pub fn resolve(self) -> ColorMode {
        match self {
            ColorModePreference::Light => ColorMode::Light,
            ColorModePreference::Dark => ColorMode::Dark,
            ColorModePreference::System => detect_color_mode(),
        }
    }
}

type ColorModeDetector = fn() -> ColorMode;

static COLOR_MODE_DETECTOR: Lazy<Mutex<ColorModeDetector>> =
    Lazy::new(|| Mutex::new(os_color_mode_detector));

/// Overrides the detector used when a theme asks for the system color mode.
///
/// This is useful for testing or when the host already knows the mode.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    *COLOR_MODE_DETECTOR.lock() = detector;
}

/// Returns the system color mode as reported by the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = *COLOR_MODE_DETECTOR.lock();
    detector()
}

fn os_color_mode_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}
