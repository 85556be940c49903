use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

const fn offset(properties: &'static [&'static str]) -> C {
    C::token(properties, "space").with_transform(t::space)
}

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "position",
        vec![
            ("position", C::prop(&["position"])),
            ("pos", C::prop(&["position"])),
            ("zIndex", C::token(&["zIndex"], "zIndices")),
            ("inset", offset(&["inset"])),
            ("insetX", offset(&["left", "right"])),
            ("insetY", offset(&["top", "bottom"])),
            ("insetStart", offset(&["insetInlineStart"])),
            ("insetEnd", offset(&["insetInlineEnd"])),
            ("top", offset(&["top"])),
            ("bottom", offset(&["bottom"])),
            ("left", offset(&["left"])),
            ("right", offset(&["right"])),
        ],
    )
}
