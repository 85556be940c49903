use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

const fn space(properties: &'static [&'static str]) -> C {
    C::token(properties, "space").with_transform(t::space)
}

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "space",
        vec![
            ("margin", space(&["margin"])),
            ("m", space(&["margin"])),
            ("marginTop", space(&["marginTop"])),
            ("mt", space(&["marginTop"])),
            ("marginRight", space(&["marginRight"])),
            ("mr", space(&["marginRight"])),
            ("marginBottom", space(&["marginBottom"])),
            ("mb", space(&["marginBottom"])),
            ("marginLeft", space(&["marginLeft"])),
            ("ml", space(&["marginLeft"])),
            ("marginX", space(&["marginInline"])),
            ("mx", space(&["marginInline"])),
            ("marginInline", space(&["marginInline"])),
            ("marginY", space(&["marginTop", "marginBottom"])),
            ("my", space(&["marginTop", "marginBottom"])),
            ("marginStart", space(&["marginInlineStart"])),
            ("ms", space(&["marginInlineStart"])),
            ("marginEnd", space(&["marginInlineEnd"])),
            ("me", space(&["marginInlineEnd"])),
            ("padding", space(&["padding"])),
            ("p", space(&["padding"])),
            ("paddingTop", space(&["paddingTop"])),
            ("pt", space(&["paddingTop"])),
            ("paddingRight", space(&["paddingRight"])),
            ("pr", space(&["paddingRight"])),
            ("paddingBottom", space(&["paddingBottom"])),
            ("pb", space(&["paddingBottom"])),
            ("paddingLeft", space(&["paddingLeft"])),
            ("pl", space(&["paddingLeft"])),
            ("paddingX", space(&["paddingInline"])),
            ("px", space(&["paddingInline"])),
            ("paddingInline", space(&["paddingInline"])),
            ("paddingY", space(&["paddingTop", "paddingBottom"])),
            ("py", space(&["paddingTop", "paddingBottom"])),
            ("paddingStart", space(&["paddingInlineStart"])),
            ("ps", space(&["paddingInlineStart"])),
            ("paddingEnd", space(&["paddingInlineEnd"])),
            ("pe", space(&["paddingInlineEnd"])),
        ],
    )
}
