#![no_main]

use libfuzzer_sys::fuzz_target;
use roachgen_core::{
    build_settings_report, Registry, RenderMode, SettingsOverrides, SettingsRegistry, Values,
};
use std::collections::BTreeMap;

fuzz_target!(|entries: BTreeMap<String, (i64, Option<String>)>| {
    let mut registry = Registry::new();
    let mut overrides = SettingsOverrides::new();
    for (name, (default, override_value)) in &entries {
        registry.register_int(name, "fuzzed", *default);
        if let Some(value) = override_value {
            overrides.insert(name.clone(), value.clone());
        }
    }

    let values = Values::defaults(&registry);
    let report = build_settings_report(&registry, &values, &overrides, RenderMode::Plain);

    // One row per setting, registry order, overrides win
    assert_eq!(report.len(), entries.len());
    for (row, name) in report.rows().iter().zip(registry.keys()) {
        assert_eq!(row.name, name);
        if let Some(value) = overrides.get(name) {
            assert_eq!(&row.default, value);
        }
    }
});
