use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "grid",
        vec![
            ("gridGap", C::token(&["gridGap"], "space").with_transform(t::space)),
            ("gridColumnGap", C::token(&["gridColumnGap"], "space").with_transform(t::space)),
            ("gridRowGap", C::token(&["gridRowGap"], "space").with_transform(t::space)),
            ("gridColumn", C::prop(&["gridColumn"])),
            ("gridRow", C::prop(&["gridRow"])),
            ("gridAutoFlow", C::prop(&["gridAutoFlow"])),
            ("gridAutoColumns", C::prop(&["gridAutoColumns"])),
            ("gridAutoRows", C::prop(&["gridAutoRows"])),
            ("gridColumnStart", C::prop(&["gridColumnStart"])),
            ("gridColumnEnd", C::prop(&["gridColumnEnd"])),
            ("gridRowStart", C::prop(&["gridRowStart"])),
            ("gridRowEnd", C::prop(&["gridRowEnd"])),
            ("gridTemplate", C::prop(&["gridTemplate"])),
            ("gridTemplateColumns", C::prop(&["gridTemplateColumns"])),
            ("gridTemplateRows", C::prop(&["gridTemplateRows"])),
            ("gridTemplateAreas", C::prop(&["gridTemplateAreas"])),
            ("gridArea", C::prop(&["gridArea"])),
        ],
    )
}
