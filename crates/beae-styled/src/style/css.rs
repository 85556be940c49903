//! The resolution pipeline: style props in, nested style object out.
//!
//! For every prop in declaration order:
//!
//! 1. functions are evaluated against the [`StyleContext`]
//! 2. pseudo props and raw selectors open a nested scope
//! 3. responsive values are expanded per breakpoint
//! 4. table props resolve their token, then run their transform
//! 5. the declarations are collected as [`StyleEntry`] values
//!
//! and [`flatten`] assembles the entries at the end.

use serde_json::{Map, Value};

use super::config::{prop_table, PropConfig, PropConfigTable};
use super::flatten::{flatten, StyleEntry, StyleObject};
use super::pseudo::selector_for;
use super::responsive::expand;
use super::token::{resolve, MAX_ALIAS_DEPTH};
use crate::css_var::baseline_vars;
use crate::error::{CyclicAliasError, StyleError};
use crate::theme::{css_var_name, Breakpoints};
use crate::value::{EvaluatedValue, StyleContext, StyleProps};

/// Keys whose object value is merged into the current scope.
const STYLE_OBJECT_KEYS: &[&str] = &["sx", "__css"];

/// Resolves style props into a nested style object.
///
/// ```rust
/// use beae_styled::{css, ColorMode, StyleContext, StyleProps, Theme};
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({
///     "breakpoints": { "base": "0em", "sm": "30em" },
///     "colors": { "red": { "500": "#e53e3e", "700": "#c53030" } },
///     "space": { "2": "0.5rem", "4": "1rem" },
/// })).unwrap();
/// let ctx = StyleContext::new(&theme, ColorMode::Light);
/// let props = StyleProps::from_value(json!({
///     "px": [2, 4],
///     "color": "red.500",
///     "_hover": { "color": "red.700" },
/// }));
///
/// let style = css(&props, &ctx).unwrap();
/// assert_eq!(style["paddingInline"], json!("0.5rem"));
/// assert_eq!(style["color"], json!("#e53e3e"));
/// assert_eq!(style["@media screen and (min-width: 30em)"]["paddingInline"], json!("1rem"));
/// assert_eq!(style["&:hover, &[data-hover]"]["color"], json!("#c53030"));
/// ```
///
/// Pseudo props are keyed by the selector they expand to, not by their prop
/// name: `_hover` lands under `"&:hover, &[data-hover]"`, so look blocks up
/// with [`pseudo_selector`](crate::style::pseudo_selector) rather than
/// `style["_hover"]`.
///
/// # Errors
///
/// Unknown breakpoint keys and over-long responsive arrays
/// ([`ConfigError`](crate::ConfigError)), and cyclic semantic tokens or
/// self-referencing `textStyle`/`layerStyle`/`apply` blocks
/// ([`CyclicAliasError`]).
pub fn css(props: &StyleProps, ctx: &StyleContext<'_>) -> Result<StyleObject, StyleError> {
    let mut collector = Collector::new(ctx);
    collector.props(props, &Scope::default())?;
    Ok(collector.finish())
}

/// Resolves a plain JSON style object, e.g. a component style block.
pub fn css_value(style: &Map<String, Value>, ctx: &StyleContext<'_>) -> Result<StyleObject, StyleError> {
    let mut collector = Collector::new(ctx);
    collector.object(style, &Scope::default())?;
    Ok(collector.finish())
}

/// Resolves the theme's `styles.global` block into selector-keyed styles.
///
/// The result always opens with a `:root` block seeding the ring and shadow
/// baseline variables. A projected theme adds every token variable for the
/// context's color mode to it.
pub fn global_styles(ctx: &StyleContext<'_>) -> Result<StyleObject, StyleError> {
    let mut root: Map<String, Value> = baseline_vars(&ctx.theme.config().css_var_prefix)
        .into_iter()
        .collect();
    if let Some(projection) = ctx.theme.css_projection() {
        root.extend(projection.root_assignments(ctx.color_mode));
    }
    let mut out = StyleObject::new();
    out.insert(":root".to_string(), Value::Object(root));
    if let Some(Value::Object(global)) = ctx.theme.get("styles.global") {
        let mut collector = Collector::new(ctx);
        for (selector, block) in global {
            match block {
                Value::Object(block) => {
                    collector.object(block, &Scope::default().enter(selector))?;
                }
                other => {
                    tracing::trace!(selector = %selector, value = %other, "ignoring non-object global style");
                }
            }
        }
        out.extend(collector.finish());
    }
    Ok(out)
}

/// Where declarations land: selector path plus an optional media query.
#[derive(Debug, Clone, Default)]
struct Scope {
    path: Vec<String>,
    media: Option<String>,
    /// `textStyle:h1`-style references being expanded, for cycle reports.
    processing: Vec<String>,
}

impl Scope {
    fn enter(&self, selector: &str) -> Self {
        let mut next = self.clone();
        if let Some(media) = next.media.take() {
            next.path.push(media);
        }
        next.path.push(selector.to_string());
        next
    }

    fn at_media(&self, media: Option<String>) -> Self {
        let mut next = self.clone();
        if let Some(media) = media {
            if let Some(outer) = next.media.take() {
                next.path.push(outer);
            }
            next.media = Some(media);
        }
        next
    }
}

struct Collector<'c, 't> {
    ctx: &'c StyleContext<'t>,
    table: &'static PropConfigTable,
    entries: Vec<StyleEntry>,
}

impl<'c, 't> Collector<'c, 't> {
    fn new(ctx: &'c StyleContext<'t>) -> Self {
        Self {
            ctx,
            table: prop_table(),
            entries: Vec::new(),
        }
    }

    fn breakpoints(&self) -> &'t Breakpoints {
        self.ctx.theme.breakpoints()
    }

    fn finish(self) -> StyleObject {
        flatten(self.entries, self.ctx.theme.breakpoints())
    }

    fn props(&mut self, props: &StyleProps, scope: &Scope) -> Result<(), StyleError> {
        for (name, value) in props.iter() {
            match value.evaluate(self.ctx) {
                EvaluatedValue::Nested(nested) => {
                    if STYLE_OBJECT_KEYS.contains(&name) {
                        self.props(nested, scope)?;
                    } else {
                        let selector = selector_for(name).unwrap_or(name);
                        self.props(nested, &scope.enter(selector))?;
                    }
                }
                EvaluatedValue::Value(value) => self.prop(name, &value, scope)?,
            }
        }
        Ok(())
    }

    fn object(&mut self, map: &Map<String, Value>, scope: &Scope) -> Result<(), StyleError> {
        for (name, value) in map {
            self.prop(name, value, scope)?;
        }
        Ok(())
    }

    fn prop(&mut self, name: &str, value: &Value, scope: &Scope) -> Result<(), StyleError> {
        if value.is_null() {
            return Ok(());
        }
        if STYLE_OBJECT_KEYS.contains(&name) {
            if let Value::Object(map) = value {
                return self.object(map, scope);
            }
        }
        if let Some(selector) = selector_for(name) {
            let Value::Object(block) = value else {
                tracing::trace!(prop = name, "selector prop without a style block, skipped");
                return Ok(());
            };
            return self.object(block, &scope.enter(selector));
        }

        let config = self.table.lookup(name);
        if config.is_none() {
            if let Value::Object(block) = value {
                if !self.is_responsive_object(block) {
                    return self.object(block, &scope.enter(name));
                }
            }
        }

        let breakpoints = self.breakpoints();
        for expanded in expand(value, breakpoints)? {
            let scope = scope.at_media(expanded.media_query());
            match config {
                Some(config) => self.configured(name, config, expanded.value, &scope)?,
                None => {
                    let mut declarations = Map::new();
                    declarations.insert(name.to_string(), expanded.value.clone());
                    self.push(name, declarations, &scope);
                }
            }
        }
        Ok(())
    }

    fn configured(
        &mut self,
        name: &str,
        config: &PropConfig,
        raw: &Value,
        scope: &Scope,
    ) -> Result<(), StyleError> {
        let mut value = resolve(config.scale, raw, self.ctx)?;
        if let Some(transform) = config.transform {
            value = transform(value, self.ctx)?;
        }
        if value.is_null() {
            return Ok(());
        }

        if config.process_result {
            let Value::Object(block) = value else {
                return Ok(());
            };
            let reference = format!("{name}:{}", super::transforms::css_string(raw));
            if scope.processing.contains(&reference) || scope.processing.len() >= MAX_ALIAS_DEPTH {
                let mut path = scope.processing.clone();
                path.push(reference);
                return Err(CyclicAliasError { path }.into());
            }
            let mut inner = scope.clone();
            inner.processing.push(reference);
            return self.object(&block, &inner);
        }

        let mut declarations = Map::new();
        if let Some(static_style) = config.static_style {
            declarations.extend(static_style(self.ctx));
        }
        match value {
            Value::Object(spread) => declarations.extend(spread),
            value => {
                let prefix = &self.ctx.theme.config().css_var_prefix;
                for property in config.properties {
                    let key = if config.is_css_var {
                        css_var_name(prefix, property)
                    } else {
                        (*property).to_string()
                    };
                    declarations.insert(key, value.clone());
                }
            }
        }
        self.push(name, declarations, scope);
        Ok(())
    }

    fn push(&mut self, name: &str, declarations: Map<String, Value>, scope: &Scope) {
        self.entries.push(StyleEntry {
            prop: name.to_string(),
            pseudo_path: scope.path.clone(),
            media: scope.media.clone(),
            declarations,
        });
    }

    /// An object under an unknown key is a responsive value only when every
    /// key names a breakpoint; otherwise it is a nested selector block.
    fn is_responsive_object(&self, map: &Map<String, Value>) -> bool {
        let breakpoints = self.breakpoints();
        !map.is_empty() && map.keys().all(|key| breakpoints.rank(key).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::theme::{ColorMode, Theme};
    use crate::value::mode;
    use serde_json::json;

    fn theme() -> Theme {
        Theme::from_value(json!({
            "breakpoints": { "base": "0em", "sm": "30em", "md": "48em" },
            "colors": {
                "red": { "500": "#e53e3e", "700": "#c53030" },
                "white": "#fff",
                "gray": { "800": "#1A202C" },
            },
            "space": { "1": "0.25rem", "2": "0.5rem", "4": "1rem", "8": "2rem" },
            "sizes": { "full": "100%" },
            "fontSizes": { "lg": "1.125rem", "4xl": "2.25rem" },
            "fontWeights": { "bold": 700 },
            "semanticTokens": {
                "colors": { "surface": { "_light": "white", "_dark": "gray.800" } },
            },
            "textStyles": {
                "h1": { "fontSize": "4xl", "fontWeight": "bold" },
                "loop": { "textStyle": "loop" },
            },
        }))
        .unwrap()
    }

    fn run(props: Value) -> Result<Value, StyleError> {
        let theme = theme();
        let ctx = StyleContext::new(&theme, ColorMode::Light);
        css(&StyleProps::from_value(props), &ctx).map(Value::Object)
    }

    #[test]
    fn resolves_tokens_and_units() {
        let out = run(json!({ "m": 4, "w": 0.5, "h": "full", "fontSize": 13 })).unwrap();
        assert_eq!(
            out,
            json!({ "margin": "1rem", "width": "50%", "height": "100%", "fontSize": "13px" })
        );
    }

    #[test]
    fn zero_is_not_absent() {
        let out = run(json!({ "p": 0, "opacity": 0 })).unwrap();
        assert_eq!(out, json!({ "padding": "0", "opacity": 0 }));
    }

    #[test]
    fn negative_space_tokens() {
        let out = run(json!({ "mt": -4, "ml": "-2" })).unwrap();
        assert_eq!(out, json!({ "marginTop": "-1rem", "marginLeft": "-0.5rem" }));
    }

    #[test]
    fn shorthand_then_longhand() {
        let out = run(json!({ "margin": "4", "marginTop": "8" })).unwrap();
        assert_eq!(out["margin"], json!("1rem"));
        assert_eq!(out["marginTop"], json!("2rem"));
    }

    #[test]
    fn multi_property_entries() {
        let out = run(json!({ "py": 2, "mx": "auto" })).unwrap();
        assert_eq!(
            out,
            json!({ "paddingTop": "0.5rem", "paddingBottom": "0.5rem", "marginInline": "auto" })
        );
    }

    #[test]
    fn unknown_keys_are_literal_css() {
        let out = run(json!({ "WebkitTapHighlightColor": "transparent" })).unwrap();
        assert_eq!(out, json!({ "WebkitTapHighlightColor": "transparent" }));
    }

    #[test]
    fn unknown_breakpoint_fails_the_computation() {
        let err = run(json!({ "color": { "base": "red", "xx": "blue" } })).unwrap_err();
        assert!(matches!(
            err,
            StyleError::Config(ConfigError::UnknownBreakpoint { ref key, .. }) if key == "xx"
        ));
    }

    #[test]
    fn responsive_inside_pseudo() {
        let out = run(json!({ "_hover": { "color": ["red.500", "red.700"] } })).unwrap();
        let hover = &out["&:hover, &[data-hover]"];
        assert_eq!(hover["color"], json!("#e53e3e"));
        assert_eq!(
            hover["@media screen and (min-width: 30em)"]["color"],
            json!("#c53030")
        );
    }

    #[test]
    fn nested_pseudo_paths_compose() {
        let out = run(json!({ "_hover": { "_focusVisible": { "color": "red.500" } } })).unwrap();
        assert_eq!(
            out["&:hover, &[data-hover]"]["&:focus-visible, &[data-focus-visible]"]["color"],
            json!("#e53e3e")
        );
    }

    #[test]
    fn raw_selectors_and_sx() {
        let out = run(json!({
            "sx": { "& > p": { "mt": 2 } },
            "__css": { "color": "white" },
        }))
        .unwrap();
        assert_eq!(out["& > p"]["marginTop"], json!("0.5rem"));
        assert_eq!(out["color"], json!("#fff"));
    }

    #[test]
    fn truncation_and_line_clamp() {
        let out = run(json!({ "isTruncated": true, "noOfLines": 2 })).unwrap();
        assert_eq!(out["textOverflow"], json!("ellipsis"));
        assert_eq!(out["whiteSpace"], json!("nowrap"));
        assert_eq!(out["WebkitLineClamp"], json!("var(--beae-line-clamp)"));
        assert_eq!(out["--beae-line-clamp"], json!(2));
        assert_eq!(out["display"], json!("-webkit-box"));
    }

    #[test]
    fn css_var_props_get_the_prefix() {
        let out = run(json!({ "ringColor": "red.500", "ringOffset": 2 })).unwrap();
        assert_eq!(out["--beae-ring-color"], json!("#e53e3e"));
        assert_eq!(out["--beae-ring-offset-width"], json!("2px"));
    }

    #[test]
    fn text_style_is_resolved_again() {
        let out = run(json!({ "textStyle": "h1" })).unwrap();
        assert_eq!(out, json!({ "fontSize": "2.25rem", "fontWeight": 700 }));
        assert_eq!(run(json!({ "textStyle": "missing" })).unwrap(), json!({}));
    }

    #[test]
    fn self_referencing_text_style_is_cyclic() {
        let err = run(json!({ "textStyle": "loop" })).unwrap_err();
        let StyleError::CyclicAlias(err) = err else {
            panic!("expected a cycle, got {err:?}");
        };
        assert_eq!(err.path, vec!["textStyle:loop", "textStyle:loop"]);
    }

    #[test]
    fn semantic_tokens_follow_the_mode() {
        let theme = theme();
        let props = StyleProps::new().with("bg", "surface");
        let light = css(&props, &StyleContext::new(&theme, ColorMode::Light)).unwrap();
        let dark = css(&props, &StyleContext::new(&theme, ColorMode::Dark)).unwrap();
        assert_eq!(light["background"], json!("#fff"));
        assert_eq!(dark["background"], json!("#1A202C"));
    }

    #[test]
    fn functions_and_nested_props() {
        let theme = theme();
        let ctx = StyleContext::new(&theme, ColorMode::Dark);
        let props = StyleProps::new()
            .with("color", mode("red.500", "red.700"))
            .with("_hover", StyleProps::new().with("color", mode("white", "gray.800")));
        let out = css(&props, &ctx).unwrap();
        assert_eq!(out["color"], json!("#c53030"));
        assert_eq!(out["&:hover, &[data-hover]"]["color"], json!("#1A202C"));
    }

    #[test]
    fn global_styles_nest_selectors() {
        let theme = Theme::from_value(json!({
            "colors": { "gray": { "800": "#1A202C" } },
            "styles": { "global": { "body": { "color": "gray.800", "m": 0 } } },
        }))
        .unwrap();
        let out = global_styles(&StyleContext::new(&theme, ColorMode::Light)).unwrap();
        assert_eq!(out["body"], json!({ "color": "#1A202C", "margin": "0" }));
        assert!(out[":root"].get("--beae-colors-gray-800").is_none());

        let projected = theme.with_css_vars().unwrap();
        let out = global_styles(&StyleContext::new(&projected, ColorMode::Light)).unwrap();
        assert_eq!(out.keys().next().map(String::as_str), Some(":root"));
        assert_eq!(out["body"]["color"], json!("var(--beae-colors-gray-800)"));
    }

    /// Names of `var(--x)` references that have no fallback.
    fn bare_var_references(text: &str) -> Vec<String> {
        text.split("var(")
            .skip(1)
            .filter_map(|rest| {
                let name: String = rest.chars().take_while(|c| *c != ')' && *c != ',').collect();
                rest[name.len()..].starts_with(')').then_some(name)
            })
            .collect()
    }

    #[test]
    fn ring_reads_only_defined_variables_without_projection() {
        let theme = Theme::from_value(json!({ "colors": {} })).unwrap();
        let ctx = StyleContext::new(&theme, ColorMode::Light);
        let style = css(&StyleProps::new().with("ring", 2), &ctx).unwrap();
        let global = global_styles(&ctx).unwrap();
        let root = global[":root"].as_object().unwrap();
        assert_eq!(root["--beae-ring-offset-width"], json!("0px"));

        let text = Value::Object(style.clone()).to_string();
        let references = bare_var_references(&text);
        assert!(references.contains(&"--beae-ring-color".to_string()));
        for name in references {
            assert!(
                style.contains_key(&name) || root.contains_key(&name),
                "{name} is never assigned"
            );
        }
    }

    #[test]
    fn root_block_uses_the_theme_prefix() {
        let theme = Theme::from_value(json!({ "config": { "cssVarPrefix": "app" } })).unwrap();
        let global = global_styles(&StyleContext::new(&theme, ColorMode::Dark)).unwrap();
        assert_eq!(global[":root"]["--app-ring-color"], json!("rgba(66, 153, 225, 0.6)"));
        assert!(global[":root"].get("--beae-ring-color").is_none());
    }
}
