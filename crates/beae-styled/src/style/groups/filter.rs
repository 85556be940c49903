use crate::style::config::{PropConfig as C, PropGroup};
use crate::style::transforms as t;

pub(super) fn group() -> PropGroup {
    PropGroup::new(
        "filter",
        vec![
            ("filter", C::prop(&["filter"]).with_transform(t::filter)),
            ("blur", C::token(&["--blur"], "blur").with_transform(t::blur).css_var()),
            ("brightness", C::prop(&["--brightness"]).with_transform(t::brightness).css_var()),
            ("contrast", C::prop(&["--contrast"]).with_transform(t::contrast).css_var()),
            ("hueRotate", C::prop(&["--hue-rotate"]).with_transform(t::hue_rotate).css_var()),
            ("invert", C::prop(&["--invert"]).with_transform(t::invert).css_var()),
            ("saturate", C::prop(&["--saturate"]).with_transform(t::saturate).css_var()),
            (
                "dropShadow",
                C::token(&["--drop-shadow"], "shadows").with_transform(t::drop_shadow).css_var(),
            ),
            ("grayscale", C::prop(&["--grayscale"]).with_transform(t::grayscale).css_var()),
            ("sepia", C::prop(&["--sepia"]).with_transform(t::sepia).css_var()),
            (
                "backdropFilter",
                C::prop(&["backdropFilter"]).with_transform(t::backdrop_filter),
            ),
            (
                "backdropBlur",
                C::token(&["--backdrop-blur"], "blur").with_transform(t::blur).css_var(),
            ),
            (
                "backdropBrightness",
                C::prop(&["--backdrop-brightness"]).with_transform(t::brightness).css_var(),
            ),
            (
                "backdropContrast",
                C::prop(&["--backdrop-contrast"]).with_transform(t::contrast).css_var(),
            ),
            (
                "backdropHueRotate",
                C::prop(&["--backdrop-hue-rotate"]).with_transform(t::hue_rotate).css_var(),
            ),
            (
                "backdropInvert",
                C::prop(&["--backdrop-invert"]).with_transform(t::invert).css_var(),
            ),
            (
                "backdropSaturate",
                C::prop(&["--backdrop-saturate"]).with_transform(t::saturate).css_var(),
            ),
            (
                "backdropGrayscale",
                C::prop(&["--backdrop-grayscale"]).with_transform(t::grayscale).css_var(),
            ),
            (
                "backdropSepia",
                C::prop(&["--backdrop-sepia"]).with_transform(t::sepia).css_var(),
            ),
        ],
    )
}
