use beae_styled::{
    css, expand, negate, resolve, ColorMode, ConfigError, StyleContext, StyleError, StyleProps,
    Theme,
};
use serde_json::{json, Map, Value};

fn scenario_theme() -> Theme {
    Theme::from_value(json!({
        "breakpoints": { "base": "0em", "sm": "30em" },
        "colors": {
            "white": "#fff",
            "red": { "500": "#e53e3e", "700": "#c53030" },
            "gray": { "800": "#1A202C" },
        },
        "space": { "2": "0.5rem", "4": "1rem", "8": "2rem" },
        "semanticTokens": {
            "colors": { "beae-body-bg": { "_light": "white", "_dark": "gray.800" } },
        },
    }))
    .unwrap()
}

#[test]
fn test_end_to_end_component_props() {
    let theme = scenario_theme();
    let ctx = StyleContext::new(&theme, ColorMode::Light);
    let props = StyleProps::from_value(json!({
        "px": [2, 4],
        "color": "red.500",
        "_hover": { "color": "red.700" },
    }));

    let style = Value::Object(css(&props, &ctx).unwrap());
    assert_eq!(
        style,
        json!({
            "paddingInline": "0.5rem",
            "color": "#e53e3e",
            "&:hover, &[data-hover]": { "color": "#c53030" },
            "@media screen and (min-width: 30em)": { "paddingInline": "1rem" },
        })
    );
}

#[test]
fn test_fallback_and_dotted_paths() {
    let theme = scenario_theme();
    let ctx = StyleContext::new(&theme, ColorMode::Light);
    assert_eq!(
        resolve(Some("colors"), &json!("not-a-real-token"), &ctx).unwrap(),
        json!("not-a-real-token")
    );
    assert_eq!(
        resolve(Some("colors"), &json!("red.500"), &ctx).unwrap(),
        json!("#e53e3e")
    );
    assert_eq!(resolve(Some("space"), &json!("-4"), &ctx).unwrap(), json!("-1rem"));
}

#[test]
fn test_responsive_expansion_order() {
    let theme = Theme::from_value(json!({
        "breakpoints": { "base": "0em", "sm": "30em", "md": "48em", "lg": "62em", "xl": "80em" },
    }))
    .unwrap();
    let value = json!(["red", null, "blue"]);
    let pairs: Vec<_> = expand(&value, theme.breakpoints())
        .unwrap()
        .into_iter()
        .map(|e| (e.name().map(String::from), e.value.clone()))
        .collect();
    assert_eq!(
        pairs,
        vec![(None, json!("red")), (Some("md".to_string()), json!("blue"))]
    );

    let err = expand(&json!({ "xx": "red" }), theme.breakpoints()).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownBreakpoint { .. }));
}

#[test]
fn test_last_write_wins() {
    let theme = scenario_theme();
    let ctx = StyleContext::new(&theme, ColorMode::Light);
    let props = StyleProps::new().with("margin", "4").with("marginTop", "8");
    let style = css(&props, &ctx).unwrap();
    assert_eq!(style["margin"], json!("1rem"));
    assert_eq!(style["marginTop"], json!("2rem"));

    // Aliases write the same property, so the later one wins.
    let props = StyleProps::new().with("marginTop", "8").with("mt", "4");
    let style = css(&props, &ctx).unwrap();
    assert_eq!(style["marginTop"], json!("1rem"));
}

#[test]
fn test_semantic_token_mode_switch() {
    let theme = scenario_theme();
    let props = StyleProps::new().with("bg", "beae-body-bg");

    let light = css(&props, &StyleContext::new(&theme, ColorMode::Light)).unwrap();
    let dark = css(&props, &StyleContext::new(&theme, ColorMode::Dark)).unwrap();
    assert_eq!(light["background"], json!("#fff"));
    assert_eq!(dark["background"], json!("#1A202C"));
}

#[test]
fn test_projected_styles_do_not_depend_on_mode() {
    let theme = scenario_theme().with_css_vars().unwrap();
    let props = StyleProps::new().with("bg", "beae-body-bg").with("mt", -2);

    let light = css(&props, &StyleContext::new(&theme, ColorMode::Light)).unwrap();
    let dark = css(&props, &StyleContext::new(&theme, ColorMode::Dark)).unwrap();
    assert_eq!(light, dark);
    assert_eq!(light["background"], json!("var(--beae-colors-beae-body-bg)"));
    assert_eq!(light["marginTop"], json!("calc(var(--beae-space-2) * -1)"));
}

/// Follows `var(--x)` and `calc(var(--x) * -1)` through root assignments.
fn computed(value: &Value, root: &Map<String, Value>, depth: usize) -> Value {
    let Some(text) = value.as_str() else {
        return value.clone();
    };
    if depth > 8 {
        return value.clone();
    }
    if let Some(inner) = text.strip_prefix("calc(").and_then(|s| s.strip_suffix(" * -1)")) {
        return negate(&computed(&json!(inner), root, depth + 1));
    }
    match text
        .strip_prefix("var(")
        .and_then(|s| s.strip_suffix(')'))
        .and_then(|name| root.get(name))
    {
        Some(next) => computed(next, root, depth + 1),
        None => value.clone(),
    }
}

#[test]
fn test_projection_agrees_with_direct_resolution() {
    let theme = Theme::from_value(json!({
        "colors": { "bg": "#111", "white": "#fff", "black": "#000", "red": { "500": "#e53e3e" } },
        "space": { "4": "1rem" },
        "semanticTokens": {
            "colors": {
                "bg": { "_light": "white", "_dark": "black" },
                "light-only": { "_light": "red.500" },
            },
            "space": { "gutter": { "_light": "4", "_dark": "-4" } },
        },
    }))
    .unwrap();
    let projected = theme.with_css_vars().unwrap();
    let projection = projected.css_projection().unwrap();

    for mode in [ColorMode::Light, ColorMode::Dark] {
        let direct = StyleContext::new(&theme, mode);
        let via_vars = StyleContext::new(&projected, mode);
        let root = projection.root_assignments(mode);
        for (category, token) in [("colors", "bg"), ("colors", "light-only"), ("space", "gutter")] {
            let raw = json!(token);
            let expected = resolve(Some(category), &raw, &direct).unwrap();
            let reference = resolve(Some(category), &raw, &via_vars).unwrap();
            assert_eq!(computed(&reference, &root, 0), expected, "{category}.{token} in {mode}");
        }
    }
    assert_eq!(
        resolve(Some("colors"), &json!("bg"), &StyleContext::new(&theme, ColorMode::Dark)).unwrap(),
        json!("#000")
    );
}

#[test]
fn test_errors_surface_to_the_caller() {
    let theme = scenario_theme();
    let ctx = StyleContext::new(&theme, ColorMode::Light);
    let props = StyleProps::from_value(json!({ "color": ["red.500", "red.700", "white"] }));
    let err = css(&props, &ctx).unwrap_err();
    assert_eq!(
        err,
        StyleError::Config(ConfigError::TooManyResponsiveValues { len: 3, max: 2 })
    );
    assert_eq!(
        err.to_string(),
        "responsive array has 3 values but only 2 breakpoints are configured"
    );
}

#[test]
fn test_default_theme_resolves_common_props() {
    let theme = Theme::default_theme();
    let ctx = StyleContext::initial(&theme);
    let props = StyleProps::from_value(json!({
        "p": 4,
        "rounded": "md",
        "shadow": "sm",
        "fontSize": "lg",
        "display": { "base": "block", "md": "flex" },
    }));
    let style = css(&props, &ctx).unwrap();
    assert_eq!(style["padding"], json!("1rem"));
    assert_eq!(style["borderRadius"], json!("0.375rem"));
    assert_eq!(style["fontSize"], json!("1.125rem"));
    assert_eq!(style["display"], json!("block"));
    assert_eq!(
        style["@media screen and (min-width: 48em)"]["display"],
        json!("flex")
    );
}
