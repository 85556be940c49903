//! Themes: token categories, configuration, color modes and extension.
//!
//! This module provides:
//!
//! - [`Theme`]: the immutable theme value with dotted-path token lookup
//! - [`ThemeConfig`]: `config` options (color mode defaults, variable prefix)
//! - [`Breakpoints`]: ranked breakpoints and their media queries
//! - [`ColorMode`] / [`ColorModePreference`]: light/dark selection with
//!   optional system detection
//! - [`extend_theme`] / [`merge_themes`] and the `with_default_*`
//!   [`Extension`] helpers
//!
//! Themes never change after construction; extension builds a new tree and
//! re-parses it.

mod breakpoints;
mod color_mode;
mod config;
pub mod foundations;
mod merge;
#[allow(clippy::module_inception)]
mod theme;
mod validate;

pub use breakpoints::{Breakpoint, Breakpoints, BASE};
pub use color_mode::{detect_color_mode, set_color_mode_detector, ColorMode, ColorModePreference};
pub use config::{css_var_name, ThemeConfig, DEFAULT_CSS_VAR_PREFIX};
pub use merge::{
    deep_merge, extend_theme, extend_theme_from, merge_themes, with_default_color_scheme,
    with_default_props, with_default_size, with_default_variant, Extension,
};
pub(crate) use merge::merge_maps;
pub(crate) use theme::lookup_in;
pub use theme::{lookup_path, Theme};
pub use validate::{is_theme, validate_theme_shape, REQUIRED_CATEGORIES};
