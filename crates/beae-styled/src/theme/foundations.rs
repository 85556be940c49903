//! The built-in theme.
//!
//! Each foundation category is its own function so extensions and tests can
//! reuse a single category without cloning the whole theme.

use once_cell::sync::Lazy;
use serde_json::{json, Map, Value};

use super::breakpoints::Breakpoints;
use super::config::ThemeConfig;
use super::theme::Theme;

pub(crate) static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    let breakpoints = Breakpoints::from_value(&breakpoints()).unwrap_or_else(|err| {
        tracing::error!(error = %err, "built-in breakpoints rejected, using base only");
        Breakpoints::default()
    });
    let raw = match default_theme_value() {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    // The `config` block below spells out `ThemeConfig::default()`.
    Theme::from_parts(raw, ThemeConfig::default(), breakpoints)
});

/// The built-in theme as a plain tree.
pub fn default_theme_value() -> Value {
    json!({
        "breakpoints": breakpoints(),
        "colors": colors(),
        "space": space(),
        "sizes": sizes(),
        "fonts": fonts(),
        "fontSizes": font_sizes(),
        "fontWeights": font_weights(),
        "lineHeights": line_heights(),
        "letterSpacings": letter_spacings(),
        "radii": radii(),
        "shadows": shadows(),
        "zIndices": z_indices(),
        "blur": blur(),
        "borders": borders(),
        "transition": transition(),
        "semanticTokens": semantic_tokens(),
        "textStyles": {},
        "layerStyles": {},
        "components": {},
        "styles": global_styles(),
        "config": {
            "initialColorMode": "light",
            "useSystemColorMode": false,
            "cssVarPrefix": "beae",
        },
    })
}

pub fn breakpoints() -> Value {
    json!({
        "base": "0em",
        "sm": "30em",
        "md": "48em",
        "lg": "62em",
        "xl": "80em",
        "2xl": "96em",
    })
}

fn scale(values: [&str; 10]) -> Value {
    const STEPS: [&str; 10] = ["50", "100", "200", "300", "400", "500", "600", "700", "800", "900"];
    Value::Object(
        STEPS
            .iter()
            .zip(values)
            .map(|(step, value)| (step.to_string(), Value::String(value.to_string())))
            .collect(),
    )
}

pub fn colors() -> Value {
    json!({
        "transparent": "transparent",
        "current": "currentColor",
        "black": "#000000",
        "white": "#FFFFFF",
        "whiteAlpha": scale([
            "rgba(255, 255, 255, 0.04)", "rgba(255, 255, 255, 0.06)",
            "rgba(255, 255, 255, 0.08)", "rgba(255, 255, 255, 0.16)",
            "rgba(255, 255, 255, 0.24)", "rgba(255, 255, 255, 0.36)",
            "rgba(255, 255, 255, 0.48)", "rgba(255, 255, 255, 0.64)",
            "rgba(255, 255, 255, 0.80)", "rgba(255, 255, 255, 0.92)",
        ]),
        "blackAlpha": scale([
            "rgba(0, 0, 0, 0.04)", "rgba(0, 0, 0, 0.06)", "rgba(0, 0, 0, 0.08)",
            "rgba(0, 0, 0, 0.16)", "rgba(0, 0, 0, 0.24)", "rgba(0, 0, 0, 0.36)",
            "rgba(0, 0, 0, 0.48)", "rgba(0, 0, 0, 0.64)", "rgba(0, 0, 0, 0.80)",
            "rgba(0, 0, 0, 0.92)",
        ]),
        "gray": scale([
            "#F7FAFC", "#EDF2F7", "#E2E8F0", "#CBD5E0", "#A0AEC0",
            "#718096", "#4A5568", "#2D3748", "#1A202C", "#171923",
        ]),
        "red": scale([
            "#FFF5F5", "#FED7D7", "#FEB2B2", "#FC8181", "#F56565",
            "#E53E3E", "#C53030", "#9B2C2C", "#822727", "#63171B",
        ]),
        "orange": scale([
            "#FFFAF0", "#FEEBC8", "#FBD38D", "#F6AD55", "#ED8936",
            "#DD6B20", "#C05621", "#9C4221", "#7B341E", "#652B19",
        ]),
        "yellow": scale([
            "#FFFFF0", "#FEFCBF", "#FAF089", "#F6E05E", "#ECC94B",
            "#D69E2E", "#B7791F", "#975A16", "#744210", "#5F370E",
        ]),
        "green": scale([
            "#F0FFF4", "#C6F6D5", "#9AE6B4", "#68D391", "#48BB78",
            "#38A169", "#2F855A", "#276749", "#22543D", "#1C4532",
        ]),
        "teal": scale([
            "#E6FFFA", "#B2F5EA", "#81E6D9", "#4FD1C5", "#38B2AC",
            "#319795", "#2C7A7B", "#285E61", "#234E52", "#1D4044",
        ]),
        "blue": scale([
            "#ebf8ff", "#bee3f8", "#90cdf4", "#63b3ed", "#4299e1",
            "#3182ce", "#2b6cb0", "#2c5282", "#2a4365", "#1A365D",
        ]),
        "cyan": scale([
            "#EDFDFD", "#C4F1F9", "#9DECF9", "#76E4F7", "#0BC5EA",
            "#00B5D8", "#00A3C4", "#0987A0", "#086F83", "#065666",
        ]),
        "purple": scale([
            "#FAF5FF", "#E9D8FD", "#D6BCFA", "#B794F4", "#9F7AEA",
            "#805AD5", "#6B46C1", "#553C9A", "#44337A", "#322659",
        ]),
        "pink": scale([
            "#FFF5F7", "#FED7E2", "#FBB6CE", "#F687B3", "#ED64A6",
            "#D53F8C", "#B83280", "#97266D", "#702459", "#521B41",
        ]),
    })
}

pub fn space() -> Value {
    json!({
        "px": "1px",
        "0.5": "0.125rem",
        "1": "0.25rem",
        "1.5": "0.375rem",
        "2": "0.5rem",
        "2.5": "0.625rem",
        "3": "0.75rem",
        "3.5": "0.875rem",
        "4": "1rem",
        "5": "1.25rem",
        "6": "1.5rem",
        "7": "1.75rem",
        "8": "2rem",
        "9": "2.25rem",
        "10": "2.5rem",
        "12": "3rem",
        "14": "3.5rem",
        "16": "4rem",
        "20": "5rem",
        "24": "6rem",
        "28": "7rem",
        "32": "8rem",
        "36": "9rem",
        "40": "10rem",
        "44": "11rem",
        "48": "12rem",
        "52": "13rem",
        "56": "14rem",
        "60": "15rem",
        "64": "16rem",
        "72": "18rem",
        "80": "20rem",
        "96": "24rem",
    })
}

pub fn sizes() -> Value {
    let mut sizes = space();
    let extra = json!({
        "max": "max-content",
        "min": "min-content",
        "full": "100%",
        "3xs": "14rem",
        "2xs": "16rem",
        "xs": "20rem",
        "sm": "24rem",
        "md": "28rem",
        "lg": "32rem",
        "xl": "36rem",
        "2xl": "42rem",
        "3xl": "48rem",
        "4xl": "56rem",
        "5xl": "64rem",
        "6xl": "72rem",
        "7xl": "80rem",
        "8xl": "90rem",
        "prose": "60ch",
        "container": {
            "sm": "640px",
            "md": "768px",
            "lg": "1024px",
            "xl": "1280px",
        },
    });
    if let (Some(target), Value::Object(extra)) = (sizes.as_object_mut(), extra) {
        target.extend(extra);
    }
    sizes
}

pub fn fonts() -> Value {
    json!({
        "heading": "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif",
        "body": "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Helvetica, Arial, sans-serif",
        "mono": "SFMono-Regular, Menlo, Monaco, Consolas, monospace",
    })
}

pub fn font_sizes() -> Value {
    json!({
        "3xs": "0.45rem",
        "2xs": "0.625rem",
        "xs": "0.75rem",
        "sm": "0.875rem",
        "md": "1rem",
        "lg": "1.125rem",
        "xl": "1.25rem",
        "2xl": "1.5rem",
        "3xl": "1.875rem",
        "4xl": "2.25rem",
        "5xl": "3rem",
        "6xl": "3.75rem",
        "7xl": "4.5rem",
        "8xl": "6rem",
        "9xl": "8rem",
    })
}

pub fn font_weights() -> Value {
    json!({
        "hairline": 100,
        "thin": 200,
        "light": 300,
        "normal": 400,
        "medium": 500,
        "semibold": 600,
        "bold": 700,
        "extrabold": 800,
        "black": 900,
    })
}

pub fn line_heights() -> Value {
    json!({
        "normal": "normal",
        "none": 1,
        "shorter": 1.25,
        "short": 1.375,
        "base": 1.5,
        "tall": 1.625,
        "taller": "2",
        "3": ".75rem",
        "4": "1rem",
        "5": "1.25rem",
        "6": "1.5rem",
        "7": "1.75rem",
        "8": "2rem",
        "9": "2.25rem",
        "10": "2.5rem",
    })
}

pub fn letter_spacings() -> Value {
    json!({
        "tighter": "-0.05em",
        "tight": "-0.025em",
        "normal": "0",
        "wide": "0.025em",
        "wider": "0.05em",
        "widest": "0.1em",
    })
}

pub fn radii() -> Value {
    json!({
        "none": "0",
        "sm": "0.125rem",
        "base": "0.25rem",
        "md": "0.375rem",
        "lg": "0.5rem",
        "xl": "0.75rem",
        "2xl": "1rem",
        "3xl": "1.5rem",
        "full": "9999px",
    })
}

pub fn shadows() -> Value {
    json!({
        "xs": "0 0 0 1px rgba(0, 0, 0, 0.05)",
        "sm": "0 1px 2px 0 rgba(0, 0, 0, 0.05)",
        "base": "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px 0 rgba(0, 0, 0, 0.06)",
        "md": "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06)",
        "lg": "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05)",
        "xl": "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        "2xl": "0 25px 50px -12px rgba(0, 0, 0, 0.25)",
        "outline": "0 0 0 3px rgba(66, 153, 225, 0.6)",
        "inner": "inset 0 2px 4px 0 rgba(0,0,0,0.06)",
        "none": "none",
        "dark-lg": "rgba(0, 0, 0, 0.1) 0px 0px 0px 1px, rgba(0, 0, 0, 0.2) 0px 5px 10px, rgba(0, 0, 0, 0.4) 0px 15px 40px",
    })
}

pub fn z_indices() -> Value {
    json!({
        "hide": -1,
        "auto": "auto",
        "base": 0,
        "docked": 10,
        "dropdown": 1000,
        "sticky": 1100,
        "banner": 1200,
        "overlay": 1300,
        "modal": 1400,
        "popover": 1500,
        "skipLink": 1600,
        "toast": 1700,
        "tooltip": 1800,
    })
}

pub fn blur() -> Value {
    json!({
        "none": 0,
        "sm": "4px",
        "base": "8px",
        "md": "12px",
        "lg": "16px",
        "xl": "24px",
        "2xl": "40px",
        "3xl": "64px",
    })
}

pub fn borders() -> Value {
    json!({
        "none": 0,
        "1px": "1px solid",
        "2px": "2px solid",
        "4px": "4px solid",
        "8px": "8px solid",
    })
}

pub fn transition() -> Value {
    json!({
        "property": {
            "common": "background-color, border-color, color, fill, stroke, opacity, box-shadow, transform",
            "colors": "background-color, border-color, color, fill, stroke",
            "dimensions": "width, height",
            "position": "left, right, top, bottom",
            "background": "background-color, background-image, background-position",
        },
        "easing": {
            "ease-in": "cubic-bezier(0.4, 0, 1, 1)",
            "ease-out": "cubic-bezier(0, 0, 0.2, 1)",
            "ease-in-out": "cubic-bezier(0.4, 0, 0.2, 1)",
        },
        "duration": {
            "ultra-fast": "50ms",
            "faster": "100ms",
            "fast": "150ms",
            "normal": "200ms",
            "slow": "300ms",
            "slower": "400ms",
            "ultra-slow": "500ms",
        },
    })
}

pub fn semantic_tokens() -> Value {
    json!({
        "colors": {
            "beae-body-text": { "_light": "gray.800", "_dark": "whiteAlpha.900" },
            "beae-body-bg": { "_light": "white", "_dark": "gray.800" },
            "beae-border-color": { "_light": "gray.200", "_dark": "whiteAlpha.300" },
            "beae-inverse-text": { "_light": "white", "_dark": "gray.800" },
            "beae-subtle-bg": { "_light": "gray.100", "_dark": "gray.700" },
            "beae-subtle-text": { "_light": "gray.600", "_dark": "gray.400" },
            "beae-placeholder-color": { "_light": "gray.500", "_dark": "whiteAlpha.400" },
        },
    })
}

fn global_styles() -> Value {
    json!({
        "global": {
            "body": {
                "fontFamily": "body",
                "color": "beae-body-text",
                "bg": "beae-body-bg",
                "transitionProperty": "background-color",
                "transitionDuration": "normal",
                "lineHeight": "base",
            },
            "*::placeholder": {
                "color": "beae-placeholder-color",
            },
            "*, *::before, ::after": {
                "borderColor": "beae-border-color",
            },
        },
    })
}
