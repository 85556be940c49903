//! Error types for style resolution.
//!
//! Resolution degrades gracefully on token misses, so none of these is
//! raised for an unknown token. They cover authoring mistakes that would
//! otherwise silently drop styles: responsive keys that name no breakpoint,
//! alias chains that never terminate, and themes missing required
//! categories.

use thiserror::Error;

/// Errors in how styles or the prop table are authored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A responsive object used a key that is not a configured breakpoint.
    #[error("unknown breakpoint '{key}' (expected one of: {})", available.join(", "))]
    UnknownBreakpoint {
        /// The offending key.
        key: String,
        /// Breakpoint names configured in the theme, in rank order.
        available: Vec<String>,
    },
    /// A responsive array had more slots than there are breakpoints.
    #[error("responsive array has {len} values but only {max} breakpoints are configured")]
    TooManyResponsiveValues { len: usize, max: usize },
    /// Two prop groups registered the same prop name.
    #[error("style prop '{name}' is defined by both '{first}' and '{second}'")]
    DuplicateProp {
        name: String,
        first: &'static str,
        second: &'static str,
    },
}

/// A semantic token whose alias chain does not terminate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cycle detected in token aliases: {}", path.join(" -> "))]
pub struct CyclicAliasError {
    /// Every alias visited, ending with the one that closed the loop.
    pub path: Vec<String>,
}

/// A theme value that does not have the shape the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeShapeError {
    #[error("theme is missing required token category '{category}'")]
    MissingCategory { category: String },
    #[error("theme key '{key}' must be an object")]
    NotAnObject { key: String },
    #[error("breakpoint '{name}' has an unsupported width '{value}'")]
    InvalidBreakpoint { name: String, value: String },
    #[error("breakpoints must define 'base' with a zero width")]
    MissingBaseBreakpoint,
    #[error("invalid theme config: {message}")]
    InvalidConfig { message: String },
    #[error("failed to parse theme: {message}")]
    Parse { message: String },
}

/// Any error the resolution pipeline can surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    CyclicAlias(#[from] CyclicAliasError),
    #[error(transparent)]
    ThemeShape(#[from] ThemeShapeError),
}
