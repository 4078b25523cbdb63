//! Routes a gen sub-command to its operation
//!
//! A dispatcher is consumed by the one invocation it runs. Errors from the
//! operation are returned unchanged so the caller can pick the exit code.

use clap::{Command, CommandFactory};
use std::io::Write;
use tracing::{debug, info};

use roachgen_core::render::HtmlRenderer;
use roachgen_core::{
    build_settings_report, default_overrides, generate_key_file, make_renderer, AutocompleteConfig,
    EncryptionKeyConfig, ManConfig, Registry, RenderMode, Result, SettingsListConfig,
    SettingsOverrides, TableFormat, TableRenderer, Values,
};

use crate::commands::{Cli, GenCommands};
use crate::context::CliContext;
use crate::emit::{
    emit_completion_script, emit_man_pages, ClapDocRenderer, DocRenderer, ManHeader,
};

/// Lifecycle of a dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    Running,
    Succeeded,
    Failed,
}

/// Runs one gen sub-command against the host's inputs
pub struct Dispatcher<W: Write> {
    context: CliContext,
    tree: Command,
    registry: Registry,
    values: Values,
    overrides: SettingsOverrides,
    docs: Box<dyn DocRenderer>,
    man_header: ManHeader,
    out: W,
    state: DispatchState,
}

impl<W: Write> Dispatcher<W> {
    /// Dispatcher over this binary's command tree and settings
    pub fn new(context: CliContext, out: W) -> Self {
        Self {
            context,
            tree: Cli::command(),
            registry: Registry::cluster_defaults(),
            values: Values::default(),
            overrides: default_overrides(),
            docs: Box::new(ClapDocRenderer),
            man_header: ManHeader::default(),
            out,
            state: DispatchState::Idle,
        }
    }

    /// Replace the settings registry and override map
    pub fn with_settings(mut self, registry: Registry, overrides: SettingsOverrides) -> Self {
        self.registry = registry;
        self.overrides = overrides;
        self
    }

    /// Start from the host's current setting values
    ///
    /// The settings list still reports defaults: values are reset before
    /// the report is built.
    pub fn with_values(mut self, values: Values) -> Self {
        self.values = values;
        self
    }

    /// Replace the man page and completion renderer
    pub fn with_doc_renderer(mut self, docs: Box<dyn DocRenderer>) -> Self {
        self.docs = docs;
        self
    }

    pub fn state(&self) -> DispatchState {
        self.state
    }

    /// Run `command` to completion
    pub fn dispatch(mut self, command: GenCommands) -> Dispatched<W> {
        self.state = DispatchState::Running;
        debug!(command = command.name(), "dispatching");

        let result = match command {
            GenCommands::Man { path } => {
                self.run_man(ManConfig::new(path, &self.context.defaults))
            }
            GenCommands::Autocomplete { shell, out } => {
                AutocompleteConfig::new(shell.as_deref(), out, &self.context.defaults)
                    .and_then(|config| self.run_autocomplete(config))
            }
            GenCommands::EncryptionKey { size, key_file } => {
                EncryptionKeyConfig::new(key_file, size, &self.context.defaults)
                    .and_then(|config| self.run_encryption_key(config))
            }
            GenCommands::SettingsList { .. } => self.run_settings_list(SettingsListConfig {
                format: self.context.table_format,
            }),
        };

        self.state = match result {
            Ok(()) => DispatchState::Succeeded,
            Err(_) => DispatchState::Failed,
        };
        Dispatched {
            state: self.state,
            result,
            out: self.out,
        }
    }

    fn run_man(&mut self, config: ManConfig) -> Result<()> {
        emit_man_pages(&self.tree, &config, &self.man_header, self.docs.as_ref())?;
        writeln!(self.out, "Generated CockroachDB man pages in {}", config.path.display())?;
        Ok(())
    }

    fn run_autocomplete(&mut self, config: AutocompleteConfig) -> Result<()> {
        emit_completion_script(&self.tree, &config, self.docs.as_ref())?;
        writeln!(
            self.out,
            "Generated {} completion file: {}",
            config.shell,
            config.out.display()
        )?;
        Ok(())
    }

    fn run_encryption_key(&mut self, config: EncryptionKeyConfig) -> Result<()> {
        generate_key_file(&config.key_file, config.strength)?;
        info!(strength = %config.strength, path = %config.key_file.display(), "created store key");
        writeln!(
            self.out,
            "successfully created {} key: {}",
            config.strength,
            config.key_file.display()
        )?;
        Ok(())
    }

    fn run_settings_list(&mut self, config: SettingsListConfig) -> Result<()> {
        let renderer = settings_renderer(config.format);
        let mode = RenderMode::for_renderer(renderer.as_ref());

        self.values.reset_remaining(&self.registry);
        let report = build_settings_report(&self.registry, &self.values, &self.overrides, mode);
        let bytes = report.render(renderer.as_ref())?;
        self.out.write_all(&bytes)?;

        debug!(rows = report.len(), format = %config.format, "rendered settings list");
        Ok(())
    }
}

/// Outcome of one dispatch
pub struct Dispatched<W> {
    state: DispatchState,
    result: Result<()>,
    out: W,
}

impl<W> Dispatched<W> {
    /// `Succeeded` or `Failed`
    pub fn state(&self) -> DispatchState {
        self.state
    }

    pub fn into_result(self) -> Result<()> {
        self.result
    }

    /// Split into the operation's result and the output sink
    pub fn into_parts(self) -> (Result<()>, W) {
        (self.result, self.out)
    }
}

/// HTML output keeps `<code>` markup and drops row statistics
fn settings_renderer(format: TableFormat) -> Box<dyn TableRenderer> {
    match format {
        TableFormat::Html => Box::new(HtmlRenderer::raw()),
        other => make_renderer(other),
    }
}
