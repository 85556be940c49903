use beae_styled::{
    css, extend_theme, extend_theme_from, global_styles, merge_themes, project_theme,
    with_default_color_scheme, with_default_variant, ColorMode, Extension, RootScope,
    StyleContext, StyleError, StyleProps, Theme, ThemeShapeError,
};
use proptest::prelude::*;
use serde_json::{json, Value};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn base() -> Theme {
    Theme::from_value(json!({
        "colors": {
            "white": "#fff",
            "blue": { "500": "#3182ce" },
            "gray": { "800": "#1A202C" },
        },
        "space": { "4": "1rem" },
        "semanticTokens": {
            "colors": { "surface": { "_light": "white", "_dark": "gray.800" } },
        },
        "components": { "Button": { "defaultProps": { "variant": "solid" } } },
    }))
    .unwrap()
}

#[test]
fn test_merge_does_not_mutate_base() {
    init_tracing();
    let theme = base();
    let snapshot = theme.to_value();
    let merged = merge_themes(
        &theme,
        [
            Extension::partial(json!({ "colors": { "blue": { "500": "navy" } } })),
            with_default_variant("outline", Some(&["Button"])),
        ],
    )
    .unwrap();

    assert_eq!(theme.to_value(), snapshot);
    assert_eq!(merged.token("colors", "blue.500"), Some(&json!("navy")));
    assert_eq!(
        merged.get("components.Button.defaultProps.variant"),
        Some(&json!("outline"))
    );
}

#[test]
fn test_projection_recomputed_after_extension() {
    init_tracing();
    let extension = || Extension::partial(json!({ "colors": { "brand": "#ff0080" } }));

    let projected_first = base().with_css_vars().unwrap();
    let from_projected = merge_themes(&projected_first, [extension()]).unwrap();
    let from_plain = merge_themes(&base(), [extension()]).unwrap();

    assert!(!from_projected.is_projected());
    assert_eq!(
        project_theme(&from_projected).unwrap(),
        project_theme(&from_plain).unwrap()
    );
    assert!(project_theme(&from_plain)
        .unwrap()
        .lookup("colors", "brand")
        .is_some());
}

#[test]
fn test_projection_annotations_survive_serialization_only_as_data() {
    let projected = base().with_css_vars().unwrap();
    let value = projected.to_value();
    assert_eq!(
        value["__cssMap"]["colors.blue.500"]["value"],
        json!("var(--beae-colors-blue-500)")
    );

    let reloaded = Theme::from_value(value).unwrap();
    assert!(!reloaded.is_projected());
    assert_eq!(
        reloaded.with_css_vars().unwrap().css_projection(),
        projected.css_projection()
    );
}

#[test]
fn test_extend_theme_requires_a_complete_base() {
    let err = extend_theme_from(&base(), json!({}), Vec::<Extension>::new()).unwrap_err();
    assert!(matches!(
        err,
        StyleError::ThemeShape(ThemeShapeError::MissingCategory { .. })
    ));

    let theme = extend_theme(
        json!({ "colors": { "brand": { "500": "#ff0080" } } }),
        [with_default_color_scheme("brand", None)],
    )
    .unwrap();
    assert!(theme.validate().is_ok());
    assert_eq!(theme.token("colors", "brand.500"), Some(&json!("#ff0080")));
}

#[test]
fn test_root_scope_switches_without_restyling() {
    init_tracing();
    let theme = base().with_css_vars().unwrap();
    let scope = RootScope::new(&theme, ColorMode::Light).unwrap();

    let props = StyleProps::new().with("bg", "surface");
    let before = css(&props, &StyleContext::new(&theme, scope.color_mode())).unwrap();
    scope.switch_color_mode(ColorMode::Dark);
    let after = css(&props, &StyleContext::new(&theme, scope.color_mode())).unwrap();

    assert_eq!(before, after);
    assert_eq!(
        scope.assignments().vars["--beae-colors-surface"],
        json!("var(--beae-colors-gray-800)")
    );
}

#[test]
fn test_global_styles_of_the_default_theme() {
    let theme = Theme::default_theme();
    let ctx = StyleContext::new(&theme, ColorMode::Dark);
    let global = global_styles(&ctx).unwrap();
    assert_eq!(global["body"]["background"], json!("#1A202C"));

    let projected = theme.with_css_vars().unwrap();
    let global = global_styles(&StyleContext::new(&projected, ColorMode::Dark)).unwrap();
    assert_eq!(
        global[":root"]["--beae-colors-beae-body-bg"],
        json!("var(--beae-colors-gray-800)")
    );
}

#[test]
fn test_yaml_theme_matches_json() {
    let yaml = r##"
colors:
  brand:
    "500": "#ff0080"
space:
  "4": 1rem
config:
  cssVarPrefix: app
"##;
    let theme = Theme::from_yaml_str(yaml).unwrap();
    let ctx = StyleContext::new(&theme, ColorMode::Light);
    let style = css(
        &StyleProps::new().with("ringColor", "brand.500").with("p", 4),
        &ctx,
    )
    .unwrap();
    assert_eq!(style["--app-ring-color"], json!("#ff0080"));
    assert_eq!(style["padding"], json!("1rem"));
}

proptest! {
    #[test]
    fn merge_never_mutates_and_projection_is_stable(
        overrides in prop::collection::btree_map("[a-z]{1,5}", "#[0-9a-f]{6}", 0..6),
    ) {
        let theme = base();
        let before: Value = theme.to_value();
        let extension = Extension::partial(json!({ "colors": overrides }));

        let merged = merge_themes(&theme, [extension.clone()]).unwrap();
        let via_projected = merge_themes(&theme.with_css_vars().unwrap(), [extension]).unwrap();

        prop_assert_eq!(theme.to_value(), before);
        prop_assert_eq!(project_theme(&merged).unwrap(), project_theme(&via_projected).unwrap());
        for (name, value) in &overrides {
            prop_assert_eq!(merged.token("colors", name), Some(&json!(value)));
        }
    }
}
