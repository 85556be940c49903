//! Style props: the prop table, token resolution and the `css` pipeline.
//!
//! This module provides:
//!
//! - [`PropConfigTable`]: prop name → CSS properties, token scale and
//!   transform, assembled from the built-in [`groups`]
//! - [`expand`]: responsive values to per-breakpoint values
//! - [`resolve`]: token lookup with semantic aliases and negation
//! - [`flatten`]: per-prop declarations to one nested [`StyleObject`]
//! - [`css`] / [`global_styles`]: the whole pipeline
//!
//! Everything here is a pure function of its inputs and the
//! [`StyleContext`](crate::StyleContext).

mod config;
mod css;
mod flatten;
pub mod groups;
mod pseudo;
mod responsive;
mod token;
pub mod transforms;

pub use config::{lookup, prop_table, PropConfig, PropConfigTable, PropGroup, StaticStyle, Transform};
pub use css::{css, css_value, global_styles};
pub use flatten::{flatten, order_media_queries, StyleEntry, StyleObject};
pub use pseudo::{is_raw_selector, pseudo_selector, selector_for};
pub use responsive::{expand, Expanded, ResponsiveValue};
pub use token::{negate, resolve, MAX_ALIAS_DEPTH};
pub(crate) use token::{is_mode_map, pick_mode_value};
