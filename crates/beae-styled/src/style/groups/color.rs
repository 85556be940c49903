use crate::style::config::{PropConfig as C, PropGroup};

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "color",
        vec![
            ("color", C::token(&["color"], "colors")),
            ("textColor", C::token(&["color"], "colors")),
            ("fill", C::token(&["fill"], "colors")),
            ("stroke", C::token(&["stroke"], "colors")),
            ("caretColor", C::token(&["caretColor"], "colors")),
            ("accentColor", C::token(&["accentColor"], "colors")),
        ],
    )
}
