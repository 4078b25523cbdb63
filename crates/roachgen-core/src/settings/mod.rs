//! Cluster settings registry
//!
//! The registry holds named, typed and documented settings. Names are kept
//! in a sorted map so `keys()` always yields the canonical order.

mod defaults;
mod value;

pub use defaults::default_overrides;
pub use value::{format_byte_size, format_duration, SettingValue};

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// Declared type of a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingType {
    String,
    Int,
    Float,
    Bool,
    ByteSize,
    Duration,
    Enum,
}

impl SettingType {
    /// Single-character type tag
    pub fn tag(&self) -> &'static str {
        match self {
            SettingType::String => "s",
            SettingType::Int => "i",
            SettingType::Float => "f",
            SettingType::Bool => "b",
            SettingType::ByteSize => "z",
            SettingType::Duration => "d",
            SettingType::Enum => "e",
        }
    }
}

/// Human-readable label for a type tag, `None` if the tag is unknown
pub fn readable_type(tag: &str) -> Option<&'static str> {
    match tag {
        "s" => Some("string"),
        "i" => Some("integer"),
        "f" => Some("float"),
        "b" => Some("boolean"),
        "z" => Some("byte size"),
        "d" => Some("duration"),
        "e" => Some("enumeration"),
        _ => None,
    }
}

/// A registered setting as seen by consumers of the registry
pub trait Setting {
    fn name(&self) -> &str;

    /// Type tag, see [`readable_type`]
    fn type_tag(&self) -> &str;

    fn description(&self) -> &str;

    /// String form of this setting's value in `values`
    fn render(&self, values: &Values) -> String;
}

/// Read-only view of a settings registry
pub trait SettingsRegistry {
    /// All setting names in canonical order
    fn keys(&self) -> Vec<&str>;

    fn lookup(&self, name: &str) -> Option<&dyn Setting>;
}

/// Definition of a setting held by [`Registry`]
#[derive(Debug, Clone)]
pub struct SettingDef {
    name: String,
    description: String,
    typ: SettingType,
    default: SettingValue,
    /// Ordinal to name, only populated for enumerations
    enum_names: BTreeMap<i64, String>,
}

impl SettingDef {
    fn format(&self, value: &SettingValue) -> String {
        match value {
            SettingValue::String(s) => s.clone(),
            SettingValue::Int(i) => i.to_string(),
            SettingValue::Float(f) => f.to_string(),
            SettingValue::Bool(b) => b.to_string(),
            SettingValue::ByteSize(b) => format_byte_size(*b),
            SettingValue::Duration(d) => format_duration(*d),
            SettingValue::Enum(ordinal) => match self.enum_names.get(ordinal) {
                Some(name) => name.clone(),
                None => format!("unknown({})", ordinal),
            },
        }
    }
}

impl Setting for SettingDef {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_tag(&self) -> &str {
        self.typ.tag()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn render(&self, values: &Values) -> String {
        self.format(values.get(&self.name).unwrap_or(&self.default))
    }
}

/// In-memory settings registry
#[derive(Debug, Clone, Default)]
pub struct Registry {
    settings: BTreeMap<String, SettingDef>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry of the settings known to this binary
    pub fn cluster_defaults() -> Self {
        defaults::cluster_settings()
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SettingDef> {
        self.settings.get(name)
    }

    /// Register a setting
    ///
    /// # Panics
    ///
    /// Registering the same name twice is a programming error.
    fn register(
        &mut self,
        name: &str,
        description: &str,
        typ: SettingType,
        default: SettingValue,
    ) -> &mut SettingDef {
        if self.settings.contains_key(name) {
            panic!("setting already defined: {}", name);
        }
        self.settings.entry(name.to_string()).or_insert(SettingDef {
            name: name.to_string(),
            description: description.to_string(),
            typ,
            default,
            enum_names: BTreeMap::new(),
        })
    }

    pub fn register_string(&mut self, name: &str, description: &str, default: &str) -> &mut Self {
        let default = SettingValue::String(default.to_string());
        self.register(name, description, SettingType::String, default);
        self
    }

    pub fn register_int(&mut self, name: &str, description: &str, default: i64) -> &mut Self {
        self.register(name, description, SettingType::Int, SettingValue::Int(default));
        self
    }

    pub fn register_float(&mut self, name: &str, description: &str, default: f64) -> &mut Self {
        self.register(name, description, SettingType::Float, SettingValue::Float(default));
        self
    }

    pub fn register_bool(&mut self, name: &str, description: &str, default: bool) -> &mut Self {
        self.register(name, description, SettingType::Bool, SettingValue::Bool(default));
        self
    }

    pub fn register_byte_size(&mut self, name: &str, description: &str, default: u64) -> &mut Self {
        self.register(name, description, SettingType::ByteSize, SettingValue::ByteSize(default));
        self
    }

    pub fn register_duration(
        &mut self,
        name: &str,
        description: &str,
        default: Duration,
    ) -> &mut Self {
        let default = SettingValue::Duration(default);
        self.register(name, description, SettingType::Duration, default);
        self
    }

    pub fn register_enum(
        &mut self,
        name: &str,
        description: &str,
        default: i64,
        members: &[(i64, &str)],
    ) -> &mut Self {
        let def = self.register(name, description, SettingType::Enum, SettingValue::Enum(default));
        def.enum_names = members
            .iter()
            .map(|(ordinal, member)| (*ordinal, member.to_string()))
            .collect();
        self
    }
}

impl SettingsRegistry for Registry {
    fn keys(&self) -> Vec<&str> {
        self.settings.keys().map(String::as_str).collect()
    }

    fn lookup(&self, name: &str) -> Option<&dyn Setting> {
        self.settings.get(name).map(|def| def as &dyn Setting)
    }
}

/// Snapshot of current setting values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Values {
    values: HashMap<String, SettingValue>,
}

impl Values {
    /// Every registered setting at its default value
    pub fn defaults(registry: &Registry) -> Self {
        let values = registry
            .settings
            .values()
            .map(|def| (def.name.clone(), def.default.clone()))
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&SettingValue> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: SettingValue) {
        self.values.insert(name.to_string(), value);
    }

    /// Drop every explicitly set value and fall back to registry defaults
    pub fn reset_remaining(&mut self, registry: &Registry) {
        *self = Self::defaults(registry);
    }
}

/// Override map applied on top of rendered defaults
pub type SettingsOverrides = HashMap<String, String>;
