use crate::style::config::{PropConfig as C, PropGroup};

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "effect",
        vec![
            ("boxShadow", C::token(&["boxShadow"], "shadows")),
            ("shadow", C::token(&["boxShadow"], "shadows")),
            ("opacity", C::prop(&["opacity"])),
            ("mixBlendMode", C::prop(&["mixBlendMode"])),
            ("blendMode", C::prop(&["mixBlendMode"])),
        ],
    )
}
