use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "ring",
        vec![
            ("ring", C::expand(t::ring)),
            ("ringColor", C::token(&["--ring-color"], "colors").css_var()),
            ("ringOffset", C::prop(&["--ring-offset-width"]).with_transform(t::px).css_var()),
            ("ringOffsetColor", C::token(&["--ring-offset-color"], "colors").css_var()),
            ("ringInset", C::prop(&["--ring-inset"]).with_transform(t::ring_inset).css_var()),
        ],
    )
}
