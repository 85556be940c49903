use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

const fn size(properties: &'static [&'static str]) -> C {
    C::token(properties, "sizes").with_transform(t::fraction)
}

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "layout",
        vec![
            ("width", size(&["width"])),
            ("w", size(&["width"])),
            ("inlineSize", size(&["inlineSize"])),
            ("height", size(&["height"])),
            ("h", size(&["height"])),
            ("blockSize", size(&["blockSize"])),
            ("boxSize", size(&["width", "height"])),
            ("minWidth", size(&["minWidth"])),
            ("minW", size(&["minWidth"])),
            ("minInlineSize", size(&["minInlineSize"])),
            ("minHeight", size(&["minHeight"])),
            ("minH", size(&["minHeight"])),
            ("minBlockSize", size(&["minBlockSize"])),
            ("maxWidth", size(&["maxWidth"])),
            ("maxW", size(&["maxWidth"])),
            ("maxInlineSize", size(&["maxInlineSize"])),
            ("maxHeight", size(&["maxHeight"])),
            ("maxH", size(&["maxHeight"])),
            ("maxBlockSize", size(&["maxBlockSize"])),
            ("d", C::prop(&["display"])),
            ("display", C::prop(&["display"])),
            ("overflow", C::prop(&["overflow"])),
            ("overflowX", C::prop(&["overflowX"])),
            ("overflowY", C::prop(&["overflowY"])),
            ("overscrollBehavior", C::prop(&["overscrollBehavior"])),
            ("verticalAlign", C::prop(&["verticalAlign"])),
            ("boxSizing", C::prop(&["boxSizing"])),
            ("boxDecorationBreak", C::prop(&["boxDecorationBreak"])),
            ("float", C::prop(&["float"])),
            ("objectFit", C::prop(&["objectFit"])),
            ("objectPosition", C::prop(&["objectPosition"])),
            ("visibility", C::prop(&["visibility"])),
            ("isolation", C::prop(&["isolation"])),
            ("aspectRatio", C::prop(&["aspectRatio"])),
            ("hideFrom", C::expand(t::hide_from)),
            ("hideBelow", C::expand(t::hide_below)),
        ],
    )
}
