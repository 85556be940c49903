//! Theme tokens to CSS custom properties.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::style::{is_mode_map, negate, pick_mode_value, pseudo_selector, resolve};
use crate::theme::{css_var_name, ColorMode, Theme};
use crate::value::StyleContext;

/// Theme key holding the serialized variable assignments.
pub const CSS_VARS_KEY: &str = "__cssVars";
/// Theme key holding the token path → variable dictionary.
pub const CSS_MAP_KEY: &str = "__cssMap";

/// Token categories turned into variables. Breakpoints stay literal since
/// media queries cannot read custom properties.
pub const PROJECTED_CATEGORIES: &[&str] = &[
    "colors",
    "space",
    "sizes",
    "fonts",
    "fontSizes",
    "fontWeights",
    "lineHeights",
    "letterSpacings",
    "radii",
    "shadows",
    "zIndices",
    "blur",
    "borders",
    "borderWidths",
    "borderStyles",
    "gradients",
    "transition",
];

/// One leaf token, literal or semantic.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatToken {
    pub category: String,
    /// Dotted path inside the category, e.g. `red.500`.
    pub path: String,
    pub value: Value,
    pub semantic: bool,
}

impl FlatToken {
    /// The `category.path` key used in the css map.
    pub fn key(&self) -> String {
        format!("{}.{}", self.category, self.path)
    }
}

/// A token's variable name and the reference consumers use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssVar {
    pub variable: String,
    #[serde(rename = "value")]
    pub reference: String,
}

impl CssVar {
    fn new(variable: String) -> Self {
        let reference = format!("var({variable})");
        Self {
            variable,
            reference,
        }
    }
}

/// The variables of a projected theme.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CssProjection {
    /// Assignments that do not depend on the color mode.
    pub css_vars: BTreeMap<String, Value>,
    /// Semantic token assignments per color mode.
    pub light: BTreeMap<String, Value>,
    pub dark: BTreeMap<String, Value>,
    /// `category.path` → variable.
    pub css_map: BTreeMap<String, CssVar>,
}

impl CssProjection {
    /// The variable backing token `key` of `category`, if projected.
    pub fn lookup(&self, category: &str, key: &str) -> Option<&CssVar> {
        self.css_map.get(&format!("{category}.{key}"))
    }

    fn mode_vars(&self, mode: ColorMode) -> &BTreeMap<String, Value> {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Every assignment the root scope needs in `mode`.
    pub fn root_assignments(&self, mode: ColorMode) -> Map<String, Value> {
        self.css_vars
            .iter()
            .chain(self.mode_vars(mode))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Number of variables whose value depends on the color mode.
    pub fn semantic_len(&self) -> usize {
        self.light.len().max(self.dark.len())
    }

    /// Serialized form stored under `__cssVars`: base and light values at
    /// the top level, dark values nested under the `_dark` selector.
    pub fn css_vars_value(&self) -> Value {
        let mut out: Map<String, Value> = self.root_assignments(ColorMode::Light);
        if !self.dark.is_empty() {
            let dark: Map<String, Value> = self
                .dark
                .iter()
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            let selector = pseudo_selector("_dark").unwrap_or("_dark");
            out.insert(selector.to_string(), Value::Object(dark));
        }
        Value::Object(out)
    }

    /// Serialized form stored under `__cssMap`.
    pub fn css_map_value(&self) -> Value {
        serde_json::to_value(&self.css_map).unwrap_or(Value::Null)
    }
}

/// Sanitizes a token path for use in a variable name: dots become dashes,
/// as does anything outside `[A-Za-z0-9_-]`.
pub fn var_segment(path: &str) -> String {
    path.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// `--{prefix}-{category}-{path}`.
pub fn token_var_name(prefix: &str, category: &str, path: &str) -> String {
    css_var_name(prefix, &format!("{}-{}", var_segment(category), var_segment(path)))
}

/// Collects the leaf tokens of every projected category, literal tokens
/// first, then semantic tokens. [`project`] does not depend on the order.
pub fn flatten_tokens(raw: &Map<String, Value>) -> Vec<FlatToken> {
    let mut out = Vec::new();
    for category in PROJECTED_CATEGORIES {
        if let Some(Value::Object(tokens)) = raw.get(*category) {
            walk(category, "", tokens, false, &mut out);
        }
    }
    if let Some(Value::Object(semantic)) = raw.get("semanticTokens") {
        for (category, tokens) in semantic {
            if let Value::Object(tokens) = tokens {
                walk(category, "", tokens, true, &mut out);
            }
        }
    }
    out
}

fn walk(
    category: &str,
    prefix: &str,
    tokens: &Map<String, Value>,
    semantic: bool,
    out: &mut Vec<FlatToken>,
) {
    for (key, value) in tokens {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) if !(semantic && is_mode_map(value)) => {
                walk(category, &path, nested, semantic, out);
            }
            Value::String(_) | Value::Number(_) | Value::Object(_) => out.push(FlatToken {
                category: category.to_string(),
                path,
                value: value.clone(),
                semantic,
            }),
            _ => {}
        }
    }
}

/// Defaults for the variables read by ring and shadow compositions.
///
/// Seeded into every root scope, projected or not, so those compositions
/// never read an undefined variable.
pub fn baseline_vars(prefix: &str) -> BTreeMap<String, Value> {
    let empty = format!("var({},/*!*/ /*!*/)", css_var_name(prefix, "empty"));
    [
        ("ring-inset", empty),
        ("ring-offset-width", "0px".to_string()),
        ("ring-offset-color", "#fff".to_string()),
        ("ring-color", "rgba(66, 153, 225, 0.6)".to_string()),
        ("ring-offset-shadow", "0 0 #0000".to_string()),
        ("ring-shadow", "0 0 #0000".to_string()),
        ("space-x-reverse", "0".to_string()),
        ("space-y-reverse", "0".to_string()),
    ]
    .into_iter()
    .map(|(name, value)| (css_var_name(prefix, name), Value::String(value)))
    .collect()
}

/// Projects flat tokens into variables.
///
/// Semantic values that name another token of the same category become
/// references to that token's variable, so a mode switch only reassigns
/// the semantic variables. A semantic token shadows a literal token with
/// the same path, matching [`resolve`]. For a mode the semantic token has
/// no value for, its variable gets what an unprojected lookup returns: the
/// shadowed literal, else the token path itself.
pub fn project(tokens: &[FlatToken], prefix: &str) -> CssProjection {
    let mut projection = CssProjection {
        css_vars: baseline_vars(prefix),
        ..CssProjection::default()
    };
    // variable -> token key that claimed it
    let mut taken: HashMap<String, String> = HashMap::new();
    let mut shadowed: HashMap<String, &Value> = HashMap::new();
    let mut accepted = Vec::with_capacity(tokens.len());
    let semantic_first = tokens
        .iter()
        .filter(|t| t.semantic)
        .chain(tokens.iter().filter(|t| !t.semantic));
    for token in semantic_first {
        let variable = token_var_name(prefix, &token.category, &token.path);
        let key = token.key();
        match taken.get(&variable) {
            Some(owner) if *owner == key && !token.semantic => {
                tracing::debug!(token = %key, "literal token shadowed by a semantic token");
                shadowed.insert(key, &token.value);
                continue;
            }
            Some(owner) => {
                tracing::warn!(
                    token = %key,
                    owner = %owner,
                    variable = %variable,
                    "token path collides with an earlier variable name, skipped"
                );
                continue;
            }
            None => {}
        }
        taken.insert(variable.clone(), key.clone());
        projection.css_map.insert(key, CssVar::new(variable.clone()));
        accepted.push((token, variable));
    }

    for (token, variable) in accepted {
        if !token.semantic {
            projection.css_vars.insert(variable, token.value.clone());
            continue;
        }
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let value = match pick_mode_value(&token.value, mode) {
                Some(picked) => alias_reference(&projection, &token.category, picked)
                    .unwrap_or_else(|| picked.clone()),
                None => {
                    tracing::warn!(
                        token = %token.key(),
                        mode = %mode,
                        "semantic token has no value for this color mode, projecting its fallback"
                    );
                    shadowed
                        .get(&token.key())
                        .map(|value| (*value).clone())
                        .unwrap_or_else(|| Value::String(token.path.clone()))
                }
            };
            match mode {
                ColorMode::Light => projection.light.insert(variable.clone(), value),
                ColorMode::Dark => projection.dark.insert(variable.clone(), value),
            };
        }
    }

    tracing::debug!(
        variables = projection.css_vars.len(),
        semantic = projection.semantic_len(),
        "projected theme tokens to css variables"
    );
    projection
}

/// The variable reference for a semantic value naming another token, with
/// `-<token>` negated the way [`resolve`] does.
fn alias_reference(projection: &CssProjection, category: &str, picked: &Value) -> Option<Value> {
    let key = match picked {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    let reference = |key: &str| {
        projection
            .lookup(category, key)
            .map(|var| Value::String(var.reference.clone()))
    };
    reference(&key).or_else(|| {
        key.strip_prefix('-')
            .and_then(|magnitude| reference(magnitude))
            .map(|found| negate(&found))
    })
}

/// Projects a theme, checking first that every semantic token terminates
/// in both color modes.
///
/// The projection is computed from the tree alone; a cached projection on
/// `theme` is ignored, so projecting twice gives the same result.
pub fn project_theme(theme: &Theme) -> Result<CssProjection, StyleError> {
    let plain = theme.without_css_vars();
    let tokens = flatten_tokens(plain.raw());
    for token in tokens.iter().filter(|t| t.semantic) {
        for mode in [ColorMode::Light, ColorMode::Dark] {
            let ctx = StyleContext::new(&plain, mode);
            resolve(Some(&token.category), &Value::String(token.path.clone()), &ctx)?;
        }
    }
    Ok(project(&tokens, &plain.config().css_var_prefix))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    proptest! {
        #[test]
        fn projection_is_idempotent(
            colors in prop::collection::btree_map("[a-z]{1,6}", "#[0-9a-f]{6}", 0..8),
            prefix in "[a-z]{0,4}",
        ) {
            let theme = Theme::from_value(json!({
                "colors": colors,
                "config": { "cssVarPrefix": prefix },
            })).unwrap();
            let once = theme.with_css_vars().unwrap();
            let twice = once.with_css_vars().unwrap();
            prop_assert_eq!(once.css_projection(), twice.css_projection());
            prop_assert_eq!(
                once.css_projection().map(|p| p.css_map.len()),
                Some(colors.len())
            );
        }
    }
}
