use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "typography",
        vec![
            ("fontFamily", C::token(&["fontFamily"], "fonts")),
            ("fontSize", C::token(&["fontSize"], "fontSizes").with_transform(t::px)),
            ("fontWeight", C::token(&["fontWeight"], "fontWeights")),
            ("lineHeight", C::token(&["lineHeight"], "lineHeights")),
            ("letterSpacing", C::token(&["letterSpacing"], "letterSpacings")),
            ("textAlign", C::prop(&["textAlign"])),
            ("fontStyle", C::prop(&["fontStyle"])),
            ("textIndent", C::prop(&["textIndent"])),
            ("wordBreak", C::prop(&["wordBreak"])),
            ("overflowWrap", C::prop(&["overflowWrap"])),
            ("textOverflow", C::prop(&["textOverflow"])),
            ("textTransform", C::prop(&["textTransform"])),
            ("whiteSpace", C::prop(&["whiteSpace"])),
            ("isTruncated", C::expand(t::truncated)),
            (
                "noOfLines",
                C::prop(&["--line-clamp"])
                    .css_var()
                    .with_static(t::line_clamp_static),
            ),
        ],
    )
}
