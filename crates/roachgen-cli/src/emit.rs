//! Man page and shell completion emitters
//!
//! Emitters resolve output paths, create directories and write files.
//! The bytes themselves come from a [`DocRenderer`].

use clap::Command;
use std::io;
use std::path::PathBuf;
use tracing::debug;

use roachgen_core::{AutocompleteConfig, CompletionShell, ManConfig, Result};

/// Man page header fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManHeader {
    pub section: String,
    pub manual: String,
    pub source: String,
}

impl Default for ManHeader {
    fn default() -> Self {
        Self {
            section: "1".to_string(),
            manual: "CockroachDB Manual".to_string(),
            source: format!("CockroachDB {}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Renders documentation artifacts from a command tree
pub trait DocRenderer {
    /// Man page for a single command
    fn man_page(&self, cmd: &Command, header: &ManHeader) -> io::Result<Vec<u8>>;

    /// Completion script covering the whole tree rooted at `cmd`
    fn completion(&self, cmd: &mut Command, shell: CompletionShell) -> io::Result<Vec<u8>>;
}

/// Renderer backed by `clap_mangen` and `clap_complete`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClapDocRenderer;

impl DocRenderer for ClapDocRenderer {
    fn man_page(&self, cmd: &Command, header: &ManHeader) -> io::Result<Vec<u8>> {
        let man = clap_mangen::Man::new(cmd.clone())
            .section(header.section.clone())
            .manual(header.manual.clone())
            .source(header.source.clone());

        let mut buf = Vec::new();
        man.render(&mut buf)?;
        Ok(buf)
    }

    fn completion(&self, cmd: &mut Command, shell: CompletionShell) -> io::Result<Vec<u8>> {
        let generator = match shell {
            CompletionShell::Bash => clap_complete::Shell::Bash,
            CompletionShell::Zsh => clap_complete::Shell::Zsh,
        };
        let bin_name = cmd.get_name().to_string();

        let mut buf = Vec::new();
        clap_complete::generate(generator, cmd, bin_name, &mut buf);
        Ok(buf)
    }
}

/// Write one man page per visible command into `config.path`
///
/// The directory is created if missing. Returns the files written, root
/// command first.
pub fn emit_man_pages(
    tree: &Command,
    config: &ManConfig,
    header: &ManHeader,
    renderer: &dyn DocRenderer,
) -> Result<Vec<PathBuf>> {
    match std::fs::metadata(&config.path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            std::fs::create_dir_all(&config.path)?;
        }
        Err(e) => return Err(e.into()),
    }

    let mut root = tree.clone();
    root.build();

    let mut written = Vec::new();
    write_man_tree(&root, config, header, renderer, &mut written)?;

    debug!(dir = %config.path.display(), pages = written.len(), "generated man pages");
    Ok(written)
}

fn write_man_tree(
    cmd: &Command,
    config: &ManConfig,
    header: &ManHeader,
    renderer: &dyn DocRenderer,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    if cmd.is_hide_set() {
        return Ok(());
    }

    let name = cmd.get_display_name().unwrap_or_else(|| cmd.get_name());
    let path = config.path.join(format!("{}.{}", name, header.section));
    let page = renderer.man_page(cmd, header)?;
    std::fs::write(&path, page)?;
    written.push(path);

    for sub in cmd.get_subcommands() {
        if sub.get_name() == "help" {
            continue;
        }
        write_man_tree(sub, config, header, renderer, written)?;
    }

    Ok(())
}

/// Write the completion script for `config.shell` to `config.out`
pub fn emit_completion_script(
    tree: &Command,
    config: &AutocompleteConfig,
    renderer: &dyn DocRenderer,
) -> Result<()> {
    let mut root = tree.clone();
    let script = renderer.completion(&mut root, config.shell)?;
    std::fs::write(&config.out, script)?;

    debug!(shell = %config.shell, out = %config.out.display(), "generated completion script");
    Ok(())
}
