//! Roachgen Core - Auxiliary artifact generation for the cockroach binary
//!
//! This crate provides the building blocks behind `cockroach gen`:
//! - Encryption-at-rest store key generation
//! - The cluster settings registry and its default values
//! - The settings report and the tabular renderers that display it
//! - Per-operation configuration

pub mod config;
pub mod error;
pub mod keygen;
pub mod render;
pub mod report;
pub mod settings;

pub use config::{
    AutocompleteConfig, CompletionShell, EncryptionKeyConfig, GenDefaults, ManConfig,
    SettingsListConfig,
};
pub use error::{GenError, Result};
pub use keygen::{generate_key_file, generate_key_file_with_rng, KeyStrength};
pub use render::{make_renderer, TableFormat, TableRenderer};
pub use report::{
    build_settings_report, RenderMode, SettingsReport, SettingsRow, SETTINGS_REPORT_HEADER,
};
pub use settings::{
    default_overrides, Registry, Setting, SettingType, SettingValue, SettingsOverrides,
    SettingsRegistry, Values,
};

/// Bytes reserved at the front of every store key file for the key ID
pub const KEY_ID_SIZE: usize = 32;

/// Default AES key size in bits
pub const DEFAULT_AES_KEY_SIZE: i64 = 128;

/// Default directory for generated man pages
pub const DEFAULT_MAN_PATH: &str = "man/man1";

/// Default bash completion file
pub const DEFAULT_BASH_COMPLETION_PATH: &str = "cockroach.bash";

/// Default zsh completion file
pub const DEFAULT_ZSH_COMPLETION_PATH: &str = "_cockroach";
