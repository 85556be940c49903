use crate::style::config::{PropConfig as C, PropGroup};

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "textDecoration",
        vec![
            ("textDecorationColor", C::token(&["textDecorationColor"], "colors")),
            ("textDecoration", C::prop(&["textDecoration"])),
            ("textDecor", C::prop(&["textDecoration"])),
            ("textDecorationLine", C::prop(&["textDecorationLine"])),
            ("textDecorationStyle", C::prop(&["textDecorationStyle"])),
            ("textDecorationThickness", C::prop(&["textDecorationThickness"])),
            ("textUnderlineOffset", C::prop(&["textUnderlineOffset"])),
            ("textShadow", C::token(&["textShadow"], "shadows")),
        ],
    )
}
