use crate::style::config::{PropConfig as C, PropGroup};

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "border",
        vec![
            ("border", C::token(&["border"], "borders")),
            ("borderWidth", C::token(&["borderWidth"], "borderWidths")),
            ("borderStyle", C::token(&["borderStyle"], "borderStyles")),
            ("borderColor", C::token(&["borderColor"], "colors")),
            ("borderRadius", C::token(&["borderRadius"], "radii")),
            ("rounded", C::token(&["borderRadius"], "radii")),
            ("borderTop", C::token(&["borderTop"], "borders")),
            ("borderRight", C::token(&["borderRight"], "borders")),
            ("borderBottom", C::token(&["borderBottom"], "borders")),
            ("borderLeft", C::token(&["borderLeft"], "borders")),
            ("borderX", C::token(&["borderLeft", "borderRight"], "borders")),
            ("borderY", C::token(&["borderTop", "borderBottom"], "borders")),
            ("borderStart", C::token(&["borderInlineStart"], "borders")),
            ("borderEnd", C::token(&["borderInlineEnd"], "borders")),
            ("borderTopWidth", C::token(&["borderTopWidth"], "borderWidths")),
            ("borderBottomWidth", C::token(&["borderBottomWidth"], "borderWidths")),
            ("borderLeftWidth", C::token(&["borderLeftWidth"], "borderWidths")),
            ("borderRightWidth", C::token(&["borderRightWidth"], "borderWidths")),
            ("borderTopColor", C::token(&["borderTopColor"], "colors")),
            ("borderBottomColor", C::token(&["borderBottomColor"], "colors")),
            ("borderLeftColor", C::token(&["borderLeftColor"], "colors")),
            ("borderRightColor", C::token(&["borderRightColor"], "colors")),
            ("roundedTop", C::token(&["borderTopLeftRadius", "borderTopRightRadius"], "radii")),
            (
                "roundedBottom",
                C::token(&["borderBottomLeftRadius", "borderBottomRightRadius"], "radii"),
            ),
            ("roundedLeft", C::token(&["borderTopLeftRadius", "borderBottomLeftRadius"], "radii")),
            (
                "roundedRight",
                C::token(&["borderTopRightRadius", "borderBottomRightRadius"], "radii"),
            ),
            ("roundedTopLeft", C::token(&["borderTopLeftRadius"], "radii")),
            ("roundedTopRight", C::token(&["borderTopRightRadius"], "radii")),
            ("roundedBottomLeft", C::token(&["borderBottomLeftRadius"], "radii")),
            ("roundedBottomRight", C::token(&["borderBottomRightRadius"], "radii")),
            (
                "roundedStart",
                C::token(&["borderStartStartRadius", "borderEndStartRadius"], "radii"),
            ),
            ("roundedEnd", C::token(&["borderStartEndRadius", "borderEndEndRadius"], "radii")),
        ],
    )
}
