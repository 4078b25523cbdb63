//! Settings report
//!
//! Enumerates every setting in registry order and produces one row per
//! setting. Formatting of the table itself is left to a [`TableRenderer`].

use crate::error::Result;
use crate::render::TableRenderer;
use crate::settings::{readable_type, SettingsOverrides, SettingsRegistry, Values};

/// Column header of the settings report
pub const SETTINGS_REPORT_HEADER: [&str; 4] = ["Setting", "Type", "Default", "Description"];

/// How names and values are presented in report cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Plain,
    /// Names and values wrapped in `<code>` for markup-aware sinks
    Markup,
}

impl RenderMode {
    pub fn for_renderer(renderer: &dyn TableRenderer) -> Self {
        if renderer.supports_markup() {
            RenderMode::Markup
        } else {
            RenderMode::Plain
        }
    }

    fn wrap(&self, s: &str) -> String {
        match self {
            RenderMode::Plain => s.to_string(),
            RenderMode::Markup => format!("<code>{}</code>", s),
        }
    }
}

/// One row of the settings report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsRow {
    pub name: String,
    pub type_label: String,
    pub default: String,
    pub description: String,
}

/// Rows of the settings report in registry order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsReport {
    rows: Vec<SettingsRow>,
}

impl SettingsReport {
    pub fn header(&self) -> &'static [&'static str] {
        &SETTINGS_REPORT_HEADER
    }

    pub fn rows(&self) -> &[SettingsRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Hand the report to `renderer`
    pub fn render(&self, renderer: &dyn TableRenderer) -> Result<Vec<u8>> {
        let rows: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.type_label.clone(),
                    row.default.clone(),
                    row.description.clone(),
                ]
            })
            .collect();
        renderer.render(self.header(), &rows)
    }
}

/// Build the settings report
///
/// An override replaces the rendered default outright. Descriptions are
/// never wrapped.
///
/// # Panics
///
/// Panics if the registry cannot look up a name it enumerated, or if a
/// setting carries a type tag with no readable label. Either means the
/// registry is corrupt and the report would be wrong.
pub fn build_settings_report(
    registry: &dyn SettingsRegistry,
    values: &Values,
    overrides: &SettingsOverrides,
    mode: RenderMode,
) -> SettingsReport {
    let rows = registry
        .keys()
        .into_iter()
        .map(|name| {
            let setting = match registry.lookup(name) {
                Some(setting) => setting,
                None => panic!("could not find setting {:?}", name),
            };
            let type_label = match readable_type(setting.type_tag()) {
                Some(label) => label,
                None => panic!("unknown setting type {:?}", setting.type_tag()),
            };

            let default = match overrides.get(name) {
                Some(value) => value.clone(),
                None => setting.render(values),
            };

            SettingsRow {
                name: mode.wrap(name),
                type_label: type_label.to_string(),
                default: mode.wrap(&default),
                description: setting.description().to_string(),
            }
        })
        .collect();

    SettingsReport { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{make_renderer, DelimitedRenderer, HtmlRenderer, TableFormat};
    use crate::settings::{Registry, Setting};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register_int("a", "first setting", 1)
            .register_bool("b", "second <setting>", false)
            .register_byte_size("c", "third setting", 64 << 20);
        registry
    }

    #[test]
    fn test_one_row_per_setting_in_order() {
        let registry = registry();
        let values = Values::defaults(&registry);
        let overrides = SettingsOverrides::new();
        let report = build_settings_report(&registry, &values, &overrides, RenderMode::Plain);

        let names: Vec<_> = report.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(report.rows()[0].type_label, "integer");
        assert_eq!(report.rows()[0].default, "1");
        assert_eq!(report.rows()[2].type_label, "byte size");
        assert_eq!(report.rows()[2].default, "64 MiB");
    }

    #[test]
    fn test_override_wins() {
        let registry = registry();
        let values = Values::defaults(&registry);
        let mut overrides = SettingsOverrides::new();
        overrides.insert("a".to_string(), "9".to_string());

        let report = build_settings_report(&registry, &values, &overrides, RenderMode::Plain);
        assert_eq!(report.rows()[0].default, "9");
        assert_eq!(report.rows()[1].default, "false");
    }

    #[test]
    fn test_markup_wraps_name_and_value_only() {
        let registry = registry();
        let values = Values::defaults(&registry);
        let overrides = SettingsOverrides::new();
        let report = build_settings_report(&registry, &values, &overrides, RenderMode::Markup);

        let row = &report.rows()[1];
        assert_eq!(row.name, "<code>b</code>");
        assert_eq!(row.type_label, "boolean");
        assert_eq!(row.default, "<code>false</code>");
        assert_eq!(row.description, "second <setting>");
    }

    #[test]
    fn test_render_mode_follows_renderer() {
        assert_eq!(RenderMode::for_renderer(&HtmlRenderer::raw()), RenderMode::Markup);
        assert_eq!(RenderMode::for_renderer(&HtmlRenderer::default()), RenderMode::Plain);
        assert_eq!(RenderMode::for_renderer(&DelimitedRenderer::tsv()), RenderMode::Plain);
    }

    #[test]
    fn test_escaping_html_renderer_gets_plain_cells() {
        let registry = registry();
        let values = Values::defaults(&registry);
        let renderer = make_renderer(TableFormat::Html);
        let mode = RenderMode::for_renderer(renderer.as_ref());

        let out = build_settings_report(&registry, &values, &SettingsOverrides::new(), mode)
            .render(renderer.as_ref())
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(!out.contains("&lt;code&gt;"));
        assert!(out.contains("<td>1</td><td>a</td><td>integer</td><td>1</td>"));
        assert!(out.contains("<td>second &lt;setting&gt;</td>"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let registry = registry();
        let values = Values::defaults(&registry);
        let overrides = SettingsOverrides::new();
        let renderer = DelimitedRenderer::tsv();

        let first = build_settings_report(&registry, &values, &overrides, RenderMode::Plain)
            .render(&renderer)
            .unwrap();
        let second = build_settings_report(&registry, &values, &overrides, RenderMode::Plain)
            .render(&renderer)
            .unwrap();

        assert_eq!(first, second);
        assert!(String::from_utf8(first)
            .unwrap()
            .starts_with("Setting\tType\tDefault\tDescription\na\tinteger\t1\tfirst setting\n"));
    }

    struct UntypedSetting;

    impl Setting for UntypedSetting {
        fn name(&self) -> &str {
            "mystery"
        }

        fn type_tag(&self) -> &str {
            "q"
        }

        fn description(&self) -> &str {
            "no readable type"
        }

        fn render(&self, _values: &Values) -> String {
            String::new()
        }
    }

    struct BrokenRegistry {
        setting: UntypedSetting,
        dangling: bool,
    }

    impl SettingsRegistry for BrokenRegistry {
        fn keys(&self) -> Vec<&str> {
            vec!["mystery"]
        }

        fn lookup(&self, _name: &str) -> Option<&dyn Setting> {
            if self.dangling {
                None
            } else {
                Some(&self.setting)
            }
        }
    }

    #[test]
    #[should_panic(expected = "unknown setting type \"q\"")]
    fn test_unknown_type_is_fatal() {
        let registry = BrokenRegistry {
            setting: UntypedSetting,
            dangling: false,
        };
        let overrides = SettingsOverrides::new();
        build_settings_report(&registry, &Values::default(), &overrides, RenderMode::Plain);
    }

    #[test]
    #[should_panic(expected = "could not find setting \"mystery\"")]
    fn test_missing_lookup_is_fatal() {
        let registry = BrokenRegistry {
            setting: UntypedSetting,
            dangling: true,
        };
        let overrides = SettingsOverrides::new();
        build_settings_report(&registry, &Values::default(), &overrides, RenderMode::Plain);
    }
}
