use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "list",
        vec![
            ("listStyleType", C::prop(&["listStyleType"])),
            ("listStylePosition", C::prop(&["listStylePosition"])),
            ("listStylePos", C::prop(&["listStylePosition"])),
            ("listStyleImage", C::prop(&["listStyleImage"]).with_transform(t::bg_image)),
            ("listStyleImg", C::prop(&["listStyleImage"]).with_transform(t::bg_image)),
        ],
    )
}
