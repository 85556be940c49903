//! # beae-styled - style props resolution for themeable components
//!
//! `beae-styled` turns a component's style props plus a theme into one
//! nested style object, ready for a CSS-in-JS style serializer.
//!
//! ```rust
//! use beae_styled::{css, ColorMode, StyleContext, StyleProps, Theme};
//! use serde_json::json;
//!
//! let theme = Theme::default_theme();
//! let ctx = StyleContext::new(&theme, ColorMode::Light);
//!
//! let props = StyleProps::from_value(json!({
//!     "px": [2, 4],
//!     "color": "red.500",
//!     "_hover": { "color": "red.700" },
//! }));
//! let style = css(&props, &ctx).unwrap();
//!
//! assert_eq!(style["paddingInline"], json!("0.5rem"));
//! assert_eq!(style["color"], json!("#E53E3E"));
//! ```
//!
//! ## Pipeline
//!
//! 1. [`Theme`]: token categories, semantic tokens, breakpoints and config,
//!    extended with [`extend_theme`]
//! 2. [`PropConfigTable`]: maps each style prop to CSS properties, a token
//!    scale and a transform
//! 3. [`expand`]: scalar, array and object responsive values to
//!    per-breakpoint values
//! 4. [`resolve`]: token lookup with dotted paths, negation and
//!    color-mode-dependent semantic aliases
//! 5. [`flatten`]: nests declarations by selector and media query,
//!    later props winning
//!
//! ## CSS variables
//!
//! [`Theme::with_css_vars`] projects every token into a custom property.
//! Styles resolved against a projected theme reference `var(--…)` instead of
//! literals, so switching color mode only reassigns the semantic variables
//! held by a [`RootScope`].
//!
//! ## Errors
//!
//! Token misses fall back to the raw value and never fail. Unknown
//! breakpoint keys, cyclic aliases and malformed themes return a
//! [`StyleError`].

#![recursion_limit = "512"]

pub mod component;
pub mod css_var;
pub mod error;
pub mod render;
pub mod style;
pub mod theme;
pub mod value;

pub use component::{use_style_config, ComponentProps, StyleConfig};
pub use css_var::{project_theme, CssProjection, CssVar, RootScope};
pub use error::{ConfigError, CyclicAliasError, StyleError, ThemeShapeError};
pub use render::{is_style_prop, render_with, split_props, styled, RenderBoundary, StyledElement};
pub use style::{
    css, css_value, expand, flatten, global_styles, lookup, negate, prop_table, resolve,
    PropConfig, PropConfigTable, PropGroup, StyleEntry, StyleObject, MAX_ALIAS_DEPTH,
};
pub use theme::{
    detect_color_mode, extend_theme, extend_theme_from, merge_themes, set_color_mode_detector,
    with_default_color_scheme, with_default_props, with_default_size, with_default_variant,
    Breakpoint, Breakpoints, ColorMode, ColorModePreference, Extension, Theme, ThemeConfig,
};
pub use value::{mode, StyleContext, StyleFn, StyleProps, StyleValue};
