use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "background",
        vec![
            ("bg", C::token(&["background"], "colors")),
            ("background", C::token(&["background"], "colors")),
            ("bgColor", C::token(&["backgroundColor"], "colors")),
            ("backgroundColor", C::token(&["backgroundColor"], "colors")),
            ("bgImage", C::prop(&["backgroundImage"]).with_transform(t::bg_image)),
            ("backgroundImage", C::prop(&["backgroundImage"]).with_transform(t::bg_image)),
            ("bgGradient", C::token(&["backgroundImage"], "gradients").with_transform(t::gradient)),
            ("bgSize", C::prop(&["backgroundSize"])),
            ("bgPosition", C::prop(&["backgroundPosition"])),
            ("bgPos", C::prop(&["backgroundPosition"])),
            ("bgRepeat", C::prop(&["backgroundRepeat"])),
            ("bgAttachment", C::prop(&["backgroundAttachment"])),
            ("bgClip", C::expand(t::bg_clip)),
            ("backgroundClip", C::expand(t::bg_clip)),
            ("bgBlendMode", C::prop(&["backgroundBlendMode"])),
        ],
    )
}
