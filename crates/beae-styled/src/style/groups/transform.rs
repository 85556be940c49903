use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "transform",
        vec![
            ("transform", C::prop(&["transform"]).with_transform(t::transform)),
            ("transformOrigin", C::prop(&["transformOrigin"])),
            ("translateX", C::token(&["--translate-x"], "space").with_transform(t::space).css_var()),
            ("translateY", C::token(&["--translate-y"], "space").with_transform(t::space).css_var()),
            ("rotate", C::prop(&["--rotate"]).with_transform(t::degree).css_var()),
            ("scale", C::prop(&["--scale-x", "--scale-y"]).css_var()),
            ("scaleX", C::prop(&["--scale-x"]).css_var()),
            ("scaleY", C::prop(&["--scale-y"]).css_var()),
            ("skewX", C::prop(&["--skew-x"]).with_transform(t::degree).css_var()),
            ("skewY", C::prop(&["--skew-y"]).with_transform(t::degree).css_var()),
        ],
    )
}
