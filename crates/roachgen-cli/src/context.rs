//! Per-invocation CLI context

use std::io::IsTerminal;

use roachgen_core::{GenDefaults, Result, TableFormat};

use crate::commands::Cli;

/// Settings shared by every gen operation in one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliContext {
    /// Display format for tabular output
    pub table_format: TableFormat,

    /// Paths and sizes used when a flag is omitted
    pub defaults: GenDefaults,
}

impl Default for CliContext {
    fn default() -> Self {
        Self {
            table_format: TableFormat::Tsv,
            defaults: GenDefaults::default(),
        }
    }
}

impl CliContext {
    /// Resolve the context from parsed flags
    ///
    /// The table format comes from `--format`, then the config file, then
    /// `table` for a terminal and `tsv` otherwise.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let defaults = match &cli.config {
            Some(path) => GenDefaults::load(path)?,
            None => GenDefaults::default(),
        };

        let table_format = cli
            .format
            .or(defaults.table_format)
            .unwrap_or_else(|| default_table_format(std::io::stdout().is_terminal()));

        Ok(Self {
            table_format,
            defaults,
        })
    }
}

fn default_table_format(is_terminal: bool) -> TableFormat {
    if is_terminal {
        TableFormat::Table
    } else {
        TableFormat::Tsv
    }
}
