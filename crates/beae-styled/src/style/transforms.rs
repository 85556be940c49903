//! Value transforms applied after token lookup.
//!
//! Every transform has the [`Transform`](super::Transform) signature. Most
//! return a single CSS value; the composite ones (ring, truncation, filter
//! templates) return an object that is spread as several declarations.

use serde_json::{json, Map, Value};

use super::token::resolve;
use crate::error::StyleError;
use crate::value::StyleContext;

type Output = Result<Value, StyleError>;

/// Renders a scalar as CSS text.
pub(crate) fn css_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

fn with_unit(value: Value, unit: &str) -> Value {
    match as_number(&value) {
        Some(n) if n == 0.0 => Value::String("0".to_string()),
        Some(_) => Value::String(format!("{}{unit}", css_string(&value))),
        None => value,
    }
}

/// Unitless numbers become pixels; zero stays `"0"`.
pub fn px(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(with_unit(value, "px"))
}

/// Numbers up to 1 become percentages, larger numbers pixels.
pub fn fraction(value: Value, ctx: &StyleContext<'_>) -> Output {
    match &value {
        Value::Number(n) => match n.as_f64() {
            Some(f) if f != 0.0 && f.abs() <= 1.0 => Ok(Value::String(format!("{}%", f * 100.0))),
            _ => px(value, ctx),
        },
        _ => px(value, ctx),
    }
}

/// Unitless numbers become degrees.
pub fn degree(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(with_unit(value, "deg"))
}

fn wrap(function: &str, value: Value) -> Value {
    if value.is_null() {
        return value;
    }
    Value::String(format!("{function}({})", css_string(&value)))
}

pub fn blur(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("blur", value))
}

pub fn brightness(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("brightness", value))
}

pub fn contrast(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("contrast", value))
}

pub fn grayscale(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("grayscale", value))
}

pub fn invert(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("invert", value))
}

pub fn saturate(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("saturate", value))
}

pub fn sepia(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("sepia", value))
}

pub fn drop_shadow(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("drop-shadow", value))
}

pub fn hue_rotate(value: Value, ctx: &StyleContext<'_>) -> Output {
    Ok(wrap("hue-rotate", degree(value, ctx)?))
}

/// `var(--{prefix}-empty,/*!*/ /*!*/)`, a reference that computes to
/// nothing so composed templates stay valid when a part is unset.
pub(crate) fn empty_var(ctx: &StyleContext<'_>) -> String {
    format!("var({},/*!*/ /*!*/)", ctx.theme.css_var("empty"))
}

const FILTER_PARTS: &[&str] = &[
    "blur",
    "brightness",
    "contrast",
    "grayscale",
    "hue-rotate",
    "invert",
    "saturate",
    "sepia",
    "drop-shadow",
];

fn filter_template(ctx: &StyleContext<'_>, prefix: &str, property: &str) -> Value {
    let mut out = Map::new();
    let empty = empty_var(ctx);
    let mut refs = Vec::with_capacity(FILTER_PARTS.len());
    for part in FILTER_PARTS {
        let var = ctx.theme.css_var(&format!("{prefix}{part}"));
        refs.push(format!("var({var})"));
        out.insert(var, Value::String(empty.clone()));
    }
    out.insert(property.to_string(), Value::String(refs.join(" ")));
    Value::Object(out)
}

/// `filter: "auto"` composes the individual filter variables.
pub fn filter(value: Value, ctx: &StyleContext<'_>) -> Output {
    if value.as_str() == Some("auto") {
        return Ok(filter_template(ctx, "", "filter"));
    }
    Ok(value)
}

/// `backdropFilter: "auto"` composes the backdrop filter variables.
pub fn backdrop_filter(value: Value, ctx: &StyleContext<'_>) -> Output {
    if value.as_str() == Some("auto") {
        return Ok(filter_template(ctx, "backdrop-", "backdropFilter"));
    }
    Ok(value)
}

/// `transform: "auto"` / `"auto-gpu"` composes the transform variables.
pub fn transform(value: Value, ctx: &StyleContext<'_>) -> Output {
    let var = |name: &str, fallback: &str| format!("var({}, {fallback})", ctx.theme.css_var(name));
    let template = match value.as_str() {
        Some("auto") => format!(
            "translateX({}) translateY({})",
            var("translate-x", "0"),
            var("translate-y", "0")
        ),
        Some("auto-gpu") => format!(
            "translate3d({}, {}, 0)",
            var("translate-x", "0"),
            var("translate-y", "0")
        ),
        _ => return Ok(value),
    };
    Ok(Value::String(format!(
        "{template} rotate({}) scaleX({}) scaleY({}) skewX({}) skewY({})",
        var("rotate", "0"),
        var("scale-x", "1"),
        var("scale-y", "1"),
        var("skew-x", "0"),
        var("skew-y", "0"),
    )))
}

/// Expands a ring width into the ring box-shadow composition.
pub fn ring(value: Value, ctx: &StyleContext<'_>) -> Output {
    if value.is_null() {
        return Ok(value);
    }
    let v = |name: &str| format!("var({})", ctx.theme.css_var(name));
    let mut out = Map::new();
    out.insert(
        ctx.theme.css_var("ring-offset-shadow"),
        Value::String(format!(
            "{} 0 0 0 {} {}",
            v("ring-inset"),
            v("ring-offset-width"),
            v("ring-offset-color")
        )),
    );
    out.insert(
        ctx.theme.css_var("ring-shadow"),
        Value::String(format!(
            "{} 0 0 0 calc({} + {}) {}",
            v("ring-inset"),
            v("ring-width"),
            v("ring-offset-width"),
            v("ring-color")
        )),
    );
    out.insert(ctx.theme.css_var("ring-width"), px(value, ctx)?);
    out.insert(
        "boxShadow".to_string(),
        Value::String(format!(
            "{}, {}, var({}, 0 0 #0000)",
            v("ring-offset-shadow"),
            v("ring-shadow"),
            ctx.theme.css_var("shadow")
        )),
    );
    Ok(Value::Object(out))
}

/// `ringInset: true` switches the ring to an inset shadow.
pub fn ring_inset(value: Value, ctx: &StyleContext<'_>) -> Output {
    Ok(match value {
        Value::Bool(true) => json!("inset"),
        Value::String(s) if s == "inset" => json!("inset"),
        Value::Bool(false) => Value::String(empty_var(ctx)),
        other => other,
    })
}

pub fn bg_clip(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(if value.as_str() == Some("text") {
        json!({ "backgroundClip": "text", "color": "transparent" })
    } else {
        json!({ "backgroundClip": value })
    })
}

const CSS_WIDE_KEYWORDS: &[&str] = &["none", "inherit", "initial", "unset", "revert"];

/// Bare image paths are wrapped in `url(..)`.
pub fn bg_image(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(match value {
        Value::String(s) if !s.contains('(') && !CSS_WIDE_KEYWORDS.contains(&s.as_str()) => {
            Value::String(format!("url({s})"))
        }
        other => other,
    })
}

fn gradient_direction(value: &str) -> Option<&'static str> {
    Some(match value {
        "to-t" => "to top",
        "to-tr" => "to top right",
        "to-r" => "to right",
        "to-br" => "to bottom right",
        "to-b" => "to bottom",
        "to-bl" => "to bottom left",
        "to-l" => "to left",
        "to-tl" => "to top left",
        _ => return None,
    })
}

/// Expands `linear(to-r, red.500, blue.500 80%)` shorthand into a CSS
/// gradient with color tokens resolved.
pub fn gradient(value: Value, ctx: &StyleContext<'_>) -> Output {
    let Some(source) = value.as_str() else {
        return Ok(value);
    };
    let Some((kind, rest)) = source.split_once('(') else {
        return Ok(value);
    };
    let Some(args) = rest.strip_suffix(')') else {
        return Ok(value);
    };
    let kind = kind.trim();
    if kind != "linear" && kind != "radial" {
        return Ok(value);
    }

    let mut parts = Vec::new();
    for (index, arg) in args.split(',').map(str::trim).enumerate() {
        if index == 0 {
            if let Some(direction) = gradient_direction(arg) {
                parts.push(direction.to_string());
                continue;
            }
            if arg.starts_with("to ") || arg.ends_with("deg") || arg.starts_with("circle") {
                parts.push(arg.to_string());
                continue;
            }
        }
        let (color, stop) = match arg.split_once(' ') {
            Some((color, stop)) => (color, Some(stop.trim())),
            None => (arg, None),
        };
        let resolved = css_string(&resolve(
            Some("colors"),
            &Value::String(color.to_string()),
            ctx,
        )?);
        parts.push(match stop {
            Some(stop) => format!("{resolved} {stop}"),
            None => resolved,
        });
    }
    Ok(Value::String(format!("{kind}-gradient({})", parts.join(", "))))
}

/// `isTruncated: true` clips text to one line with an ellipsis.
pub fn truncated(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(if value.as_bool() == Some(true) {
        json!({
            "overflow": "hidden",
            "textOverflow": "ellipsis",
            "whiteSpace": "nowrap",
        })
    } else {
        Value::Null
    })
}

/// Declarations shared by every `noOfLines` value.
pub fn line_clamp_static(ctx: &StyleContext<'_>) -> Map<String, Value> {
    let mut out = Map::new();
    out.insert("overflow".to_string(), json!("hidden"));
    out.insert("textOverflow".to_string(), json!("ellipsis"));
    out.insert("display".to_string(), json!("-webkit-box"));
    out.insert("WebkitBoxOrient".to_string(), json!("vertical"));
    out.insert(
        "WebkitLineClamp".to_string(),
        Value::String(format!("var({})", ctx.theme.css_var("line-clamp"))),
    );
    out
}

/// `outline: 0` / `"none"` becomes an accessible transparent outline.
pub fn outline(value: Value, _ctx: &StyleContext<'_>) -> Output {
    let reset = matches!(css_string(&value).as_str(), "0" | "none");
    Ok(if reset {
        json!({ "outline": "2px solid transparent", "outlineOffset": "2px" })
    } else {
        json!({ "outline": value })
    })
}

/// Visually hides an element while keeping it available to assistive
/// technology. `"focusable"` reveals it again while focused.
pub fn sr_only(value: Value, _ctx: &StyleContext<'_>) -> Output {
    let hidden = json!({
        "border": "0px",
        "clip": "rect(0, 0, 0, 0)",
        "width": "1px",
        "height": "1px",
        "margin": "-1px",
        "padding": "0px",
        "overflow": "hidden",
        "whiteSpace": "nowrap",
        "position": "absolute",
    });
    Ok(match value {
        Value::Bool(true) => hidden,
        Value::String(s) if s == "focusable" => {
            json!({ "&:not(:focus):not(:focus-within)": hidden })
        }
        _ => Value::Null,
    })
}

fn theme_style(ctx: &StyleContext<'_>, path: String) -> Value {
    match ctx.theme.get(&path) {
        Some(Value::Object(map)) => Value::Object(map.clone()),
        _ => {
            tracing::trace!(path = %path, "style reference not found in theme");
            Value::Null
        }
    }
}

/// `textStyle: "h1"` pulls `textStyles.h1` from the theme.
pub fn text_style(value: Value, ctx: &StyleContext<'_>) -> Output {
    Ok(theme_style(ctx, format!("textStyles.{}", css_string(&value))))
}

/// `layerStyle: "card"` pulls `layerStyles.card` from the theme.
pub fn layer_style(value: Value, ctx: &StyleContext<'_>) -> Output {
    Ok(theme_style(ctx, format!("layerStyles.{}", css_string(&value))))
}

/// `apply: "components.Card.baseStyle"` pulls any style block by path.
pub fn apply(value: Value, ctx: &StyleContext<'_>) -> Output {
    Ok(theme_style(ctx, css_string(&value)))
}

fn breakpoint_width(value: &Value, ctx: &StyleContext<'_>) -> String {
    let name = css_string(value);
    ctx.theme
        .breakpoints()
        .get(&name)
        .map(|bp| bp.min_width.clone())
        .unwrap_or(name)
}

/// Hides the element from the given breakpoint upwards.
pub fn hide_from(value: Value, ctx: &StyleContext<'_>) -> Output {
    let width = breakpoint_width(&value, ctx);
    let mut out = Map::new();
    out.insert(
        format!("@media screen and (min-width: {width})"),
        json!({ "display": "none" }),
    );
    Ok(Value::Object(out))
}

/// Hides the element below the given breakpoint.
pub fn hide_below(value: Value, ctx: &StyleContext<'_>) -> Output {
    let width = breakpoint_width(&value, ctx);
    let split = width
        .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-'))
        .unwrap_or(width.len());
    let (number, unit) = width.split_at(split);
    let max = match number.parse::<f64>() {
        Ok(n) => format!("{}{unit}", ((n - 0.02) * 100.0).round() / 100.0),
        Err(_) => width.clone(),
    };
    let mut out = Map::new();
    out.insert(
        format!("@media screen and (max-width: {max})"),
        json!({ "display": "none" }),
    );
    Ok(Value::Object(out))
}

/// Short flex direction aliases: `col` and `col-reverse`.
pub fn flex_direction(value: Value, _ctx: &StyleContext<'_>) -> Output {
    Ok(match value.as_str() {
        Some("col") => json!("column"),
        Some("col-reverse") => json!("column-reverse"),
        Some("row-rev") => json!("row-reverse"),
        _ => value,
    })
}

/// Margins, paddings and gaps. Negative tokens are already negated by the
/// resolver, so only unitless numbers need a unit here.
pub fn space(value: Value, ctx: &StyleContext<'_>) -> Output {
    px(value, ctx)
}
