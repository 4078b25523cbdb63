//! Roachgen CLI - the `cockroach gen` command group
//!
//! This crate wires the clap command tree to the operations in
//! `roachgen-core` and to the man page and completion renderers.

pub mod commands;
pub mod context;
pub mod dispatch;
pub mod emit;

pub use commands::{Cli, Commands, GenCommands};
pub use context::CliContext;
pub use dispatch::{DispatchState, Dispatched, Dispatcher};
pub use emit::{
    emit_completion_script, emit_man_pages, ClapDocRenderer, DocRenderer, ManHeader,
};
