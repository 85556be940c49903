//! The root scope's live variable assignments.

use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::{Map, Value};

use super::project::{project_theme, CssProjection};
use crate::error::StyleError;
use crate::theme::{ColorMode, Theme};

/// A snapshot of the root variables for one color mode.
#[derive(Debug, Clone, PartialEq)]
pub struct RootAssignments {
    pub color_mode: ColorMode,
    pub vars: Map<String, Value>,
}

/// Shared root scope of a projected theme.
///
/// Readers take a cheap snapshot; a color-mode switch builds the new
/// assignment map and replaces the snapshot in one step, so no reader ever
/// sees a mix of both modes. Styles resolved against the projected theme
/// only reference variables and are unaffected by the switch.
#[derive(Debug)]
pub struct RootScope {
    projection: Arc<CssProjection>,
    current: RwLock<Arc<RootAssignments>>,
}

impl RootScope {
    /// Creates the scope for `theme`, projecting it if needed.
    pub fn new(theme: &Theme, color_mode: ColorMode) -> Result<Self, StyleError> {
        let projection = match theme.css_projection() {
            Some(projection) => Arc::new(projection.clone()),
            None => Arc::new(project_theme(theme)?),
        };
        let current = RwLock::new(Arc::new(RootAssignments {
            color_mode,
            vars: projection.root_assignments(color_mode),
        }));
        Ok(Self {
            projection,
            current,
        })
    }

    pub fn color_mode(&self) -> ColorMode {
        self.current.read().color_mode
    }

    /// The assignments currently in effect.
    pub fn assignments(&self) -> Arc<RootAssignments> {
        Arc::clone(&self.current.read())
    }

    pub fn projection(&self) -> &CssProjection {
        &self.projection
    }

    /// Switches every semantic variable to `color_mode`, returning the
    /// previous mode. Switching to the active mode is a no-op.
    pub fn switch_color_mode(&self, color_mode: ColorMode) -> ColorMode {
        self.switch_with(|_| color_mode)
    }

    /// Flips between light and dark, returning the previous mode.
    pub fn toggle_color_mode(&self) -> ColorMode {
        self.switch_with(ColorMode::toggled)
    }

    /// Reads and replaces the snapshot under one write guard.
    fn switch_with(&self, next_mode: impl FnOnce(ColorMode) -> ColorMode) -> ColorMode {
        let mut current = self.current.write();
        let previous = current.color_mode;
        let color_mode = next_mode(previous);
        if previous == color_mode {
            return previous;
        }
        *current = Arc::new(RootAssignments {
            color_mode,
            vars: self.projection.root_assignments(color_mode),
        });
        drop(current);
        tracing::debug!(
            from = %previous,
            to = %color_mode,
            semantic = self.projection.semantic_len(),
            "switched root color mode"
        );
        previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::thread;

    fn theme() -> Theme {
        Theme::from_value(json!({
            "colors": { "white": "#fff", "gray": { "800": "#1A202C" } },
            "semanticTokens": {
                "colors": { "surface": { "_light": "white", "_dark": "gray.800" } },
            },
        }))
        .unwrap()
    }

    #[test]
    fn switching_replaces_semantic_values() {
        let scope = RootScope::new(&theme(), ColorMode::Light).unwrap();
        let before = scope.assignments();
        assert_eq!(before.vars["--beae-colors-surface"], json!("var(--beae-colors-white)"));

        assert_eq!(scope.switch_color_mode(ColorMode::Dark), ColorMode::Light);
        let after = scope.assignments();
        assert_eq!(after.color_mode, ColorMode::Dark);
        assert_eq!(after.vars["--beae-colors-surface"], json!("var(--beae-colors-gray-800)"));
        assert_eq!(after.vars["--beae-colors-white"], json!("#fff"));

        // Earlier snapshots are untouched.
        assert_eq!(before.color_mode, ColorMode::Light);
    }

    #[test]
    fn switching_to_the_active_mode_keeps_the_snapshot() {
        let scope = RootScope::new(&theme(), ColorMode::Dark).unwrap();
        let before = scope.assignments();
        scope.switch_color_mode(ColorMode::Dark);
        assert!(Arc::ptr_eq(&before, &scope.assignments()));
        assert_eq!(scope.toggle_color_mode(), ColorMode::Dark);
        assert_eq!(scope.color_mode(), ColorMode::Light);
    }

    #[test]
    fn reuses_an_attached_projection() {
        let projected = theme().with_css_vars().unwrap();
        let scope = RootScope::new(&projected, ColorMode::Light).unwrap();
        assert_eq!(Some(scope.projection()), projected.css_projection());
    }

    #[test]
    fn concurrent_switches_report_distinct_previous_modes() {
        let scope = Arc::new(RootScope::new(&theme(), ColorMode::Light).unwrap());
        let switchers: Vec<_> = (0..8)
            .map(|_| {
                let scope = Arc::clone(&scope);
                thread::spawn(move || scope.switch_color_mode(ColorMode::Dark))
            })
            .collect();
        let previous: Vec<ColorMode> = switchers.into_iter().map(|h| h.join().unwrap()).collect();
        // Exactly one switch saw the light snapshot.
        assert_eq!(previous.iter().filter(|m| **m == ColorMode::Light).count(), 1);
        assert_eq!(scope.color_mode(), ColorMode::Dark);
    }

    #[test]
    fn toggles_alternate_under_contention() {
        let scope = Arc::new(RootScope::new(&theme(), ColorMode::Light).unwrap());
        let togglers: Vec<_> = (0..4)
            .map(|_| {
                let scope = Arc::clone(&scope);
                thread::spawn(move || {
                    (0..25).map(|_| scope.toggle_color_mode()).collect::<Vec<_>>()
                })
            })
            .collect();
        let all: Vec<ColorMode> = togglers.into_iter().flat_map(|h| h.join().unwrap()).collect();
        let light = all.iter().filter(|m| **m == ColorMode::Light).count();
        assert_eq!(light, all.len() / 2);
        assert_eq!(scope.color_mode(), ColorMode::Light);
    }

    #[test]
    fn readers_never_see_mixed_modes() {
        let scope = Arc::new(RootScope::new(&theme(), ColorMode::Light).unwrap());
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let scope = Arc::clone(&scope);
                thread::spawn(move || {
                    for _ in 0..200 {
                        let snapshot = scope.assignments();
                        let expected = match snapshot.color_mode {
                            ColorMode::Light => json!("var(--beae-colors-white)"),
                            ColorMode::Dark => json!("var(--beae-colors-gray-800)"),
                        };
                        assert_eq!(snapshot.vars["--beae-colors-surface"], expected);
                    }
                })
            })
            .collect();
        for _ in 0..50 {
            scope.toggle_color_mode();
        }
        for reader in readers {
            reader.join().unwrap();
        }
    }
}
