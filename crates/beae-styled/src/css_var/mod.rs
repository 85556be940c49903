//! CSS variable projection.
//!
//! [`project_theme`] turns every token into a `--{prefix}-{category}-{path}`
//! custom property and records, per token path, the `var(..)` reference
//! consumers should use. Semantic tokens get one value per color mode, so a
//! mode switch only reassigns those variables in the [`RootScope`].

mod project;
mod root;

pub use project::{
    baseline_vars, flatten_tokens, project, project_theme, token_var_name, var_segment, CssProjection, CssVar,
    FlatToken, CSS_MAP_KEY, CSS_VARS_KEY, PROJECTED_CATEGORIES,
};
pub use root::{RootAssignments, RootScope};
