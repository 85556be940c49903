use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "interactivity",
        vec![
            ("appearance", C::prop(&["appearance"])),
            ("userSelect", C::prop(&["userSelect"])),
            ("pointerEvents", C::prop(&["pointerEvents"])),
            ("resize", C::prop(&["resize"])),
            ("cursor", C::prop(&["cursor"])),
            ("outline", C::expand(t::outline)),
            ("outlineOffset", C::prop(&["outlineOffset"]).with_transform(t::px)),
            ("outlineColor", C::token(&["outlineColor"], "colors")),
        ],
    )
}
