//! The render boundary: resolved styles handed to a host renderer.
//!
//! The engine does not serialize CSS. [`styled`] splits an element's props
//! into style props and passthrough attributes, resolves the style, and
//! returns a [`StyledElement`]; a host implements [`RenderBoundary`] to turn
//! that into class names and markup.

use serde_json::{Map, Value};

use crate::error::StyleError;
use crate::style::{css, prop_table, selector_for, StyleObject};
use crate::value::{StyleContext, StyleProps, StyleValue};

/// Props that carry style objects rather than single values.
const STYLE_OBJECT_PROPS: &[&str] = &["sx", "__css"];

/// True if `name` is consumed by the style engine.
pub fn is_style_prop(name: &str) -> bool {
    STYLE_OBJECT_PROPS.contains(&name) || selector_for(name).is_some() || prop_table().contains(name)
}

/// Splits props into style props and passthrough attributes, keeping
/// declaration order in both.
///
/// Attributes are forwarded untouched. Only literal values can be forwarded;
/// functions and nested blocks under a non-style name are evaluated or
/// dropped by [`styled`].
pub fn split_props(props: StyleProps) -> (StyleProps, StyleProps) {
    props
        .into_iter()
        .partition(|(name, _)| is_style_prop(name))
}

/// An element ready for the host renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledElement {
    pub tag: String,
    pub style: StyleObject,
    pub attributes: Map<String, Value>,
}

/// Resolves `props` for an element with tag `tag`.
///
/// ```rust
/// use beae_styled::{styled, ColorMode, StyleContext, StyleProps, Theme};
/// use serde_json::json;
///
/// let theme = Theme::from_value(json!({ "space": { "4": "1rem" } })).unwrap();
/// let ctx = StyleContext::new(&theme, ColorMode::Light);
/// let props = StyleProps::new().with("p", 4).with("id", "main").with("aria-label", "Main");
///
/// let element = styled("section", props, &ctx).unwrap();
/// assert_eq!(element.style["padding"], json!("1rem"));
/// assert_eq!(element.attributes["id"], json!("main"));
/// assert_eq!(element.attributes["aria-label"], json!("Main"));
/// ```
///
/// Style sources merge in the order `__css` (component defaults), then
/// style props, then `sx`, whatever order they were declared in.
pub fn styled(
    tag: impl Into<String>,
    props: StyleProps,
    ctx: &StyleContext<'_>,
) -> Result<StyledElement, StyleError> {
    let (style_props, passthrough) = split_props(props);

    let (mut ordered, mut sx) = (StyleProps::new(), StyleProps::new());
    let mut plain = StyleProps::new();
    for (name, value) in style_props {
        match name.as_str() {
            "__css" => ordered.push(name, value),
            "sx" => sx.push(name, value),
            _ => plain.push(name, value),
        }
    }
    ordered.extend(plain);
    ordered.extend(sx);

    let mut attributes = Map::new();
    for (name, value) in passthrough {
        match value {
            StyleValue::Value(value) => {
                attributes.insert(name, value);
            }
            StyleValue::Function(f) => {
                attributes.insert(name, f.call(ctx));
            }
            StyleValue::Nested(_) => {
                tracing::trace!(attribute = %name, "nested style block under a non-style prop, dropped");
            }
        }
    }

    Ok(StyledElement {
        tag: tag.into(),
        style: css(&ordered, ctx)?,
        attributes,
    })
}

/// Serializes and attaches a [`StyledElement`]. Implemented by hosts.
pub trait RenderBoundary {
    type Output;

    fn render(&self, element: StyledElement) -> Self::Output;
}

/// Resolves `props` and hands the element to `boundary`.
pub fn render_with<B: RenderBoundary>(
    boundary: &B,
    tag: impl Into<String>,
    props: StyleProps,
    ctx: &StyleContext<'_>,
) -> Result<B::Output, StyleError> {
    Ok(boundary.render(styled(tag, props, ctx)?))
}
