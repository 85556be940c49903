use crate::style::config::{PropConfig as C, PropGroup};

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "transition",
        vec![
            ("transition", C::prop(&["transition"])),
            ("transitionDelay", C::prop(&["transitionDelay"])),
            ("animation", C::prop(&["animation"])),
            ("willChange", C::prop(&["willChange"])),
            ("transitionDuration", C::token(&["transitionDuration"], "transition.duration")),
            ("transitionProperty", C::token(&["transitionProperty"], "transition.property")),
            (
                "transitionTimingFunction",
                C::token(&["transitionTimingFunction"], "transition.easing"),
            ),
        ],
    )
}
