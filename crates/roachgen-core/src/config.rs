//! Configuration for the gen operations
//!
//! Each operation receives its own config struct at invocation time.
//! Values resolve as: explicit flag, then `GenDefaults` loaded from a
//! config file, then the built-in defaults.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{GenError, Result};
use crate::keygen::KeyStrength;
use crate::render::TableFormat;
use crate::{
    DEFAULT_AES_KEY_SIZE, DEFAULT_BASH_COMPLETION_PATH, DEFAULT_MAN_PATH,
    DEFAULT_ZSH_COMPLETION_PATH,
};

/// Shells we can write a completion script for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompletionShell {
    #[default]
    Bash,
    Zsh,
}

impl CompletionShell {
    pub const ALL: [CompletionShell; 2] = [CompletionShell::Bash, CompletionShell::Zsh];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionShell::Bash => "bash",
            CompletionShell::Zsh => "zsh",
        }
    }
}

impl fmt::Display for CompletionShell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompletionShell {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self> {
        CompletionShell::ALL
            .iter()
            .copied()
            .find(|shell| shell.as_str() == s)
            .ok_or_else(|| {
                GenError::invalid_parameter(format!(
                    "invalid argument {:?} for \"cockroach gen autocomplete\"",
                    s
                ))
            })
    }
}

/// Defaults that may be supplied in a JSON config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenDefaults {
    /// Directory for man pages
    pub man_path: PathBuf,

    /// Bash completion output file
    pub bash_completion_path: PathBuf,

    /// Zsh completion output file
    pub zsh_completion_path: PathBuf,

    /// AES key size in bits for store keys
    pub aes_key_size: i64,

    /// Table format; unset means pick from the terminal
    pub table_format: Option<TableFormat>,
}

impl Default for GenDefaults {
    fn default() -> Self {
        Self {
            man_path: PathBuf::from(DEFAULT_MAN_PATH),
            bash_completion_path: PathBuf::from(DEFAULT_BASH_COMPLETION_PATH),
            zsh_completion_path: PathBuf::from(DEFAULT_ZSH_COMPLETION_PATH),
            aes_key_size: DEFAULT_AES_KEY_SIZE,
            table_format: None,
        }
    }
}

impl GenDefaults {
    /// Load defaults from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let defaults: Self = serde_json::from_str(&content)?;
        Ok(defaults)
    }

    pub fn completion_path(&self, shell: CompletionShell) -> &Path {
        match shell {
            CompletionShell::Bash => &self.bash_completion_path,
            CompletionShell::Zsh => &self.zsh_completion_path,
        }
    }
}

/// `gen man`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManConfig {
    /// Output directory, always ending in a path separator
    pub path: PathBuf,
}

impl ManConfig {
    pub fn new(path: Option<PathBuf>, defaults: &GenDefaults) -> Self {
        let path = path.unwrap_or_else(|| defaults.man_path.clone());
        Self {
            path: with_trailing_separator(path),
        }
    }
}

/// `gen autocomplete`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteConfig {
    pub shell: CompletionShell,
    pub out: PathBuf,
}

impl AutocompleteConfig {
    /// Resolve the shell name, defaulting to bash, and the output file
    pub fn new(
        shell: Option<&str>,
        out: Option<PathBuf>,
        defaults: &GenDefaults,
    ) -> Result<Self> {
        let shell = match shell {
            Some(name) => name.parse()?,
            None => CompletionShell::default(),
        };
        let out = out.unwrap_or_else(|| defaults.completion_path(shell).to_path_buf());
        Ok(Self { shell, out })
    }
}

/// `gen encryption-key`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptionKeyConfig {
    pub key_file: PathBuf,
    pub strength: KeyStrength,
}

impl EncryptionKeyConfig {
    /// Validate the requested key size
    pub fn new(
        key_file: PathBuf,
        size_bits: Option<i64>,
        defaults: &GenDefaults,
    ) -> Result<Self> {
        let strength = KeyStrength::try_from(size_bits.unwrap_or(defaults.aes_key_size))?;
        Ok(Self { key_file, strength })
    }
}

/// `gen settings-list`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingsListConfig {
    pub format: TableFormat,
}

fn with_trailing_separator(path: PathBuf) -> PathBuf {
    let mut s = path.into_os_string();
    let sep = std::path::MAIN_SEPARATOR.to_string();
    if !s.to_string_lossy().ends_with(std::path::MAIN_SEPARATOR) {
        s.push(&sep);
    }
    PathBuf::from(s)
}
