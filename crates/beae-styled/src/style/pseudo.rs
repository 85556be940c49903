//! Pseudo-selector props (`_hover`, `_dark`, ...) and raw selector keys.

/// Returns the selector a pseudo prop nests its styles under.
pub fn pseudo_selector(name: &str) -> Option<&'static str> {
    Some(match name {
        "_hover" => "&:hover, &[data-hover]",
        "_active" => "&:active, &[data-active]",
        "_focus" => "&:focus, &[data-focus]",
        "_focusVisible" => "&:focus-visible, &[data-focus-visible]",
        "_focusWithin" => "&:focus-within, &[data-focus-within]",
        "_disabled" => "&:disabled, &[disabled], &[aria-disabled=true], &[data-disabled]",
        "_readOnly" => "&[aria-readonly=true], &[readonly], &[data-readonly]",
        "_before" => "&::before",
        "_after" => "&::after",
        "_empty" => "&:empty, &[data-empty]",
        "_expanded" => "&[aria-expanded=true], &[data-expanded]",
        "_checked" => "&[aria-checked=true], &[data-checked]",
        "_pressed" => "&[aria-pressed=true], &[data-pressed]",
        "_invalid" => "&[aria-invalid=true], &[data-invalid]",
        "_selected" => "&[aria-selected=true], &[data-selected]",
        "_hidden" => "&[hidden], &[data-hidden]",
        "_loading" => "&[data-loading], &[aria-busy=true]",
        "_open" => "&[open], &[data-open], &[data-state=open]",
        "_first" => "&:first-of-type",
        "_last" => "&:last-of-type",
        "_even" => "&:nth-of-type(even)",
        "_odd" => "&:nth-of-type(odd)",
        "_notFirst" => "&:not(:first-of-type)",
        "_notLast" => "&:not(:last-of-type)",
        "_visited" => "&:visited",
        "_placeholder" => "&::placeholder",
        "_selection" => "&::selection",
        "_groupHover" => "[role=group]:hover &, [role=group][data-hover] &, [data-group]:hover &, .group:hover &",
        "_peerHover" => "[data-peer]:hover ~ &, [data-peer][data-hover] ~ &, .peer:hover ~ &",
        "_rtl" => "[dir=rtl] &, &[dir=rtl]",
        "_ltr" => "[dir=ltr] &, &[dir=ltr]",
        "_mediaDark" => "@media (prefers-color-scheme: dark)",
        "_mediaReduceMotion" => "@media (prefers-reduced-motion: reduce)",
        "_dark" => ".beae-ui-dark &:not([data-theme]), [data-theme=dark] &:not([data-theme]), &[data-theme=dark]",
        "_light" => ".beae-ui-light &:not([data-theme]), [data-theme=light] &:not([data-theme]), &[data-theme=light]",
        _ => return None,
    })
}

/// True for keys written as literal selectors or at-rules, such as
/// `&:hover`, `@media print` or `> li`.
pub fn is_raw_selector(key: &str) -> bool {
    key.starts_with(['&', '@', ':', '>', '~', '+', '.', '[', '*', '#'])
}

/// The nesting key for `name`, if it introduces a nested style block.
pub fn selector_for(name: &str) -> Option<&str> {
    pseudo_selector(name).or_else(|| is_raw_selector(name).then_some(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pseudo_props() {
        assert_eq!(pseudo_selector("_hover"), Some("&:hover, &[data-hover]"));
        assert_eq!(pseudo_selector("_before"), Some("&::before"));
        assert_eq!(pseudo_selector("_unknown"), None);
        assert_eq!(pseudo_selector("hover"), None);
    }

    #[test]
    fn raw_selectors() {
        assert!(is_raw_selector("&:hover"));
        assert!(is_raw_selector("@media print"));
        assert!(is_raw_selector("> li"));
        assert!(!is_raw_selector("color"));
        assert!(!is_raw_selector("--beae-ring-color"));
    }

    #[test]
    fn selector_for_prefers_pseudo_table() {
        assert_eq!(selector_for("_focusVisible"), Some("&:focus-visible, &[data-focus-visible]"));
        assert_eq!(selector_for("& > p"), Some("& > p"));
        assert_eq!(selector_for("padding"), None);
    }
}
