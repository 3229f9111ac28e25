use serde_json::Value;

use crate::layout::Breakpoints;
use crate::shared::ui::theme::ColorScheme;
use crate::widgets::chrome::PanelSizing;

const DEFAULT_TITLE: &str = "Shell Chrome";

/// Typed settings payload read at startup.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShellSettings {
    title: String,
    color_scheme: ColorScheme,
    panel: PanelSizing,
    breakpoints: Breakpoints,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            title: String::from(DEFAULT_TITLE),
            color_scheme: ColorScheme::default(),
            panel: PanelSizing::default(),
            breakpoints: Breakpoints::default(),
        }
    }
}

impl ShellSettings {
    /// Window title shown in the header and by the OS.
    pub(crate) fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    /// Navbar widths used by the panel toggle.
    pub(crate) fn panel(&self) -> PanelSizing {
        self.panel
    }

    pub(crate) fn breakpoints(&self) -> Breakpoints {
        self.breakpoints
    }

    /// Build settings from parsed JSON, falling back to defaults per field.
    ///
    /// A section whose values break its invariants is replaced as a whole.
    pub(crate) fn from_json(value: &Value) -> Self {
        let mut settings = ShellSettings::default();

        if let Some(title) = value
            .get("window")
            .and_then(|window| read_string_field(window, "title"))
            .filter(|title| !title.trim().is_empty())
        {
            settings.title = title;
        }

        if let Some(scheme) = value
            .get("theme")
            .and_then(|theme| read_string_field(theme, "color_scheme"))
        {
            match ColorScheme::from_name(&scheme) {
                Some(scheme) => settings.color_scheme = scheme,
                None => log::warn!("unknown color scheme {scheme:?}"),
            }
        }

        if let Some(navbar) = value.get("navbar") {
            let defaults = settings.panel;
            let panel = PanelSizing {
                narrow: read_f32_field(navbar, "narrow_width")
                    .unwrap_or(defaults.narrow),
                wide: read_f32_field(navbar, "wide_width")
                    .unwrap_or(defaults.wide),
                large: read_f32_field(navbar, "large_width")
                    .unwrap_or(defaults.large),
            };
            if is_panel_valid(&panel) {
                settings.panel = panel;
            } else {
                log::warn!("ignoring invalid navbar widths {panel:?}");
            }
        }

        if let Some(section) = value.get("breakpoints") {
            let defaults = settings.breakpoints;
            let breakpoints = Breakpoints {
                sm: read_f32_field(section, "sm").unwrap_or(defaults.sm),
                lg: read_f32_field(section, "lg").unwrap_or(defaults.lg),
            };
            if is_breakpoints_valid(&breakpoints) {
                settings.breakpoints = breakpoints;
            } else {
                log::warn!("ignoring invalid breakpoints {breakpoints:?}");
            }
        }

        settings
    }
}

fn read_string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key)?.as_str().map(str::to_string)
}

fn read_f32_field(value: &Value, key: &str) -> Option<f32> {
    value.get(key)?.as_f64().map(|number| number as f32)
}

fn is_panel_valid(panel: &PanelSizing) -> bool {
    [panel.narrow, panel.wide, panel.large]
        .iter()
        .all(|width| width.is_finite() && *width > 0.0)
        && panel.narrow <= panel.wide
}

fn is_breakpoints_valid(breakpoints: &Breakpoints) -> bool {
    breakpoints.sm.is_finite()
        && breakpoints.lg.is_finite()
        && breakpoints.sm > 0.0
        && breakpoints.sm < breakpoints.lg
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ShellSettings;
    use crate::shared::ui::theme::ColorScheme;

    #[test]
    fn given_empty_object_when_from_json_then_defaults_are_used() {
        let settings = ShellSettings::from_json(&json!({}));

        assert_eq!(settings, ShellSettings::default());
        assert_eq!(settings.panel().narrow, 100.0);
        assert_eq!(settings.panel().wide, 200.0);
        assert_eq!(settings.panel().large, 300.0);
    }

    #[test]
    fn given_full_payload_when_from_json_then_all_fields_are_loaded() {
        let value = json!({
            "window": { "title": "Workbench" },
            "theme": { "color_scheme": "light" },
            "navbar": { "narrow_width": 72, "wide_width": 240, "large_width": 320 },
            "breakpoints": { "sm": 640, "lg": 1024 }
        });

        let settings = ShellSettings::from_json(&value);

        assert_eq!(settings.title(), "Workbench");
        assert_eq!(settings.color_scheme(), ColorScheme::Light);
        assert_eq!(settings.panel().narrow, 72.0);
        assert_eq!(settings.panel().wide, 240.0);
        assert_eq!(settings.panel().large, 320.0);
        assert_eq!(settings.breakpoints().sm, 640.0);
        assert_eq!(settings.breakpoints().lg, 1024.0);
    }

    #[test]
    fn given_partial_navbar_when_from_json_then_missing_widths_use_defaults() {
        let settings =
            ShellSettings::from_json(&json!({ "navbar": { "wide_width": 260 } }));

        assert_eq!(settings.panel().narrow, 100.0);
        assert_eq!(settings.panel().wide, 260.0);
        assert_eq!(settings.panel().large, 300.0);
    }

    #[test]
    fn given_narrow_wider_than_wide_when_from_json_then_navbar_defaults_are_kept()
     {
        let settings = ShellSettings::from_json(&json!({
            "navbar": { "narrow_width": 400, "wide_width": 200 }
        }));

        assert_eq!(settings.panel(), ShellSettings::default().panel());
    }

    #[test]
    fn given_inverted_breakpoints_when_from_json_then_defaults_are_kept() {
        let settings = ShellSettings::from_json(&json!({
            "breakpoints": { "sm": 1300, "lg": 1200 }
        }));

        assert_eq!(
            settings.breakpoints(),
            ShellSettings::default().breakpoints()
        );
    }

    #[test]
    fn given_blank_title_and_unknown_scheme_when_from_json_then_defaults_are_kept()
     {
        let settings = ShellSettings::from_json(&json!({
            "window": { "title": "   " },
            "theme": { "color_scheme": "sepia" }
        }));

        assert_eq!(settings.title(), "Shell Chrome");
        assert_eq!(settings.color_scheme(), ColorScheme::Dark);
    }
}
