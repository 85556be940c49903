//! Token resolution: raw prop values to concrete theme values.

use serde_json::Value;

use crate::error::{CyclicAliasError, StyleError};
use crate::theme::{lookup_in, ColorMode};
use crate::value::StyleContext;

/// Longest semantic alias chain followed before giving up as cyclic.
pub const MAX_ALIAS_DEPTH: usize = 8;

/// Resolves `raw` against the theme's `category` tokens.
///
/// - No category: `raw` is returned unchanged.
/// - Semantic tokens are consulted first and follow the active color mode,
///   then literal tokens by dotted path.
/// - `-<token>` resolves the token and negates the result.
/// - Anything that does not name a token is returned unchanged.
///
/// When the theme carries a CSS variable projection the result is a
/// `var(--…)` reference instead of the literal, so it no longer depends on
/// the color mode.
///
/// ```rust
/// use beae_styled::{resolve, ColorMode, StyleContext, Theme};
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({
///     "colors": { "red": { "500": "#e53e3e" } },
///     "space": { "4": "1rem" },
/// })).unwrap();
/// let ctx = StyleContext::new(&theme, ColorMode::Light);
///
/// assert_eq!(resolve(Some("colors"), &json!("red.500"), &ctx).unwrap(), json!("#e53e3e"));
/// assert_eq!(resolve(Some("colors"), &json!("#fff"), &ctx).unwrap(), json!("#fff"));
/// assert_eq!(resolve(Some("space"), &json!(-4), &ctx).unwrap(), json!("-1rem"));
/// ```
pub fn resolve(
    category: Option<&str>,
    raw: &Value,
    ctx: &StyleContext<'_>,
) -> Result<Value, StyleError> {
    let Some(category) = category else {
        return Ok(raw.clone());
    };
    let Some(key) = token_key(raw) else {
        return Ok(raw.clone());
    };

    if let Some(found) = lookup_signed(category, &key, ctx, &mut Vec::new())? {
        return Ok(found);
    }
    tracing::trace!(category, key = %key, "token miss, using raw value");
    Ok(raw.clone())
}

/// The lookup key for a raw value. Only strings and numbers name tokens.
fn token_key(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Looks `key` up, falling back to `-<token>`: strip the sign, resolve,
/// negate. Used for the prop value and for every alias hop.
fn lookup_signed(
    category: &str,
    key: &str,
    ctx: &StyleContext<'_>,
    chain: &mut Vec<String>,
) -> Result<Option<Value>, StyleError> {
    if let Some(found) = lookup_token(category, key, ctx, chain)? {
        return Ok(Some(found));
    }
    match key.strip_prefix('-') {
        Some(magnitude) => Ok(lookup_token(category, magnitude, ctx, chain)?.map(|found| negate(&found))),
        None => Ok(None),
    }
}

fn lookup_token(
    category: &str,
    key: &str,
    ctx: &StyleContext<'_>,
    chain: &mut Vec<String>,
) -> Result<Option<Value>, StyleError> {
    if let Some(projection) = ctx.theme.css_projection() {
        if let Some(var) = projection.lookup(category, key) {
            return Ok(Some(Value::String(var.reference.clone())));
        }
    }
    if let Some(found) = lookup_semantic(category, key, ctx, chain)? {
        return Ok(Some(found));
    }
    Ok(ctx
        .theme
        .token(category, key)
        .filter(|value| is_scalar(value))
        .cloned())
}

fn lookup_semantic(
    category: &str,
    key: &str,
    ctx: &StyleContext<'_>,
    chain: &mut Vec<String>,
) -> Result<Option<Value>, StyleError> {
    let Some(entry) = ctx
        .theme
        .semantic_category(category)
        .and_then(|tokens| lookup_in(tokens, key))
    else {
        return Ok(None);
    };

    if chain.iter().any(|seen| seen == key) || chain.len() >= MAX_ALIAS_DEPTH {
        chain.push(key.to_string());
        return Err(CyclicAliasError {
            path: std::mem::take(chain),
        }
        .into());
    }
    chain.push(key.to_string());

    let Some(picked) = pick_mode_value(entry, ctx.color_mode) else {
        if !entry.is_object() || is_mode_map(entry) {
            tracing::warn!(
                category,
                token = key,
                mode = %ctx.color_mode,
                "semantic token has no value for the active color mode"
            );
        }
        chain.pop();
        return Ok(None);
    };

    let resolved = match token_key(picked) {
        Some(next) => lookup_signed(category, &next, ctx, chain)?,
        None => None,
    };
    tracing::trace!(category, token = key, "followed semantic alias");
    chain.pop();
    Ok(Some(resolved.unwrap_or_else(|| picked.clone())))
}

/// True for objects keyed by color-mode conditions (`_light`, `_dark`,
/// `default`), as opposed to groups of nested tokens.
pub(crate) fn is_mode_map(value: &Value) -> bool {
    value.as_object().is_some_and(|map| {
        !map.is_empty()
            && map
                .keys()
                .all(|k| k == "default" || (k.starts_with('_') && k.len() > 1))
    })
}

/// Picks the value of a semantic token for `mode`, descending through
/// nested condition maps. Plain aliases apply to every mode.
pub(crate) fn pick_mode_value(value: &Value, mode: ColorMode) -> Option<&Value> {
    let mut current = value;
    for _ in 0..MAX_ALIAS_DEPTH {
        if !current.is_object() {
            return Some(current);
        }
        if !is_mode_map(current) {
            return None;
        }
        current = current
            .get(mode.token_key())
            .or_else(|| current.get("default"))?;
    }
    None
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_))
}

/// Negates a resolved token value: numbers and plain lengths flip sign,
/// anything else is wrapped in `calc(.. * -1)`.
pub fn negate(value: &Value) -> Value {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(-i)
            } else {
                n.as_f64().map(|f| Value::from(-f)).unwrap_or(Value::Null)
            }
        }
        Value::String(s) => {
            let s = s.trim();
            if let Some(positive) = s.strip_prefix('-') {
                Value::String(positive.to_string())
            } else if s.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                Value::String(format!("-{s}"))
            } else {
                Value::String(format!("calc({s} * -1)"))
            }
        }
        other => other.clone(),
    }
}
