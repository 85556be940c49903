use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "flexbox",
        vec![
            ("alignItems", C::prop(&["alignItems"])),
            ("alignContent", C::prop(&["alignContent"])),
            ("alignSelf", C::prop(&["alignSelf"])),
            ("justifyItems", C::prop(&["justifyItems"])),
            ("justifyContent", C::prop(&["justifyContent"])),
            ("justifySelf", C::prop(&["justifySelf"])),
            ("placeItems", C::prop(&["placeItems"])),
            ("placeContent", C::prop(&["placeContent"])),
            ("placeSelf", C::prop(&["placeSelf"])),
            ("flexWrap", C::prop(&["flexWrap"])),
            ("flexDirection", C::prop(&["flexDirection"]).with_transform(t::flex_direction)),
            ("flexDir", C::prop(&["flexDirection"]).with_transform(t::flex_direction)),
            ("flex", C::prop(&["flex"])),
            ("flexFlow", C::prop(&["flexFlow"])),
            ("flexGrow", C::prop(&["flexGrow"])),
            ("flexShrink", C::prop(&["flexShrink"])),
            ("flexBasis", C::token(&["flexBasis"], "sizes").with_transform(t::fraction)),
            ("order", C::prop(&["order"])),
            ("gap", C::token(&["gap"], "space").with_transform(t::space)),
            ("rowGap", C::token(&["rowGap"], "space").with_transform(t::space)),
            ("columnGap", C::token(&["columnGap"], "space").with_transform(t::space)),
        ],
    )
}
