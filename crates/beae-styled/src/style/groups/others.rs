use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "others",
        vec![
            ("srOnly", C::expand(t::sr_only)),
            ("textStyle", C::expand(t::text_style).processed()),
            ("layerStyle", C::expand(t::layer_style).processed()),
            ("apply", C::expand(t::apply).processed()),
            ("scrollBehavior", C::prop(&["scrollBehavior"])),
            ("scrollSnapAlign", C::prop(&["scrollSnapAlign"])),
            ("scrollSnapType", C::prop(&["scrollSnapType"])),
            ("scrollMargin", C::token(&["scrollMargin"], "space").with_transform(t::space)),
            ("scrollPadding", C::token(&["scrollPadding"], "space").with_transform(t::space)),
            ("content", C::prop(&["content"])),
        ],
    )
}
