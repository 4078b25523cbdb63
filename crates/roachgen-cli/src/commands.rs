//! Command tree for `cockroach gen`

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roachgen_core::TableFormat;

const MAN_LONG_ABOUT: &str = "\
This command generates man pages for CockroachDB.

By default, this places man pages into the \"man/man1\" directory under the
current directory. Use \"--path=PATH\" to override the output directory. For
example, to install man pages globally on many Unix-like systems,
use \"--path=/usr/local/share/man/man1\".";

const AUTOCOMPLETE_LONG_ABOUT: &str = "\
Generate autocompletion script for CockroachDB.

If no arguments are passed, or if 'bash' is passed, a bash completion file is
written to ./cockroach.bash. If 'zsh' is passed, a zsh completion file is written
to ./_cockroach. Use \"--out=/path/to/file\" to override the output file location.

Note that for the generated file to work on OS X with bash, you'll need to install
Homebrew's bash-completion package (or an equivalent) and follow the post-install
instructions.";

const ENCRYPTION_KEY_LONG_ABOUT: &str = "\
Generate store key for encryption at rest.

If no AES key size is specified through \"-s=256\", the key size used for AES
algorithm will be 128 by default. AES key size should only be 128, 192, or 256.

Users are required to provide a filename for the key to be stored.";

/// CockroachDB command-line interface and server
#[derive(Parser)]
#[command(name = "cockroach")]
#[command(about = "CockroachDB command-line interface and server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Table display format: tsv, csv, table, records or html
    #[arg(long, global = true, value_parser = parse_table_format)]
    pub format: Option<TableFormat>,

    /// JSON file overriding the default output paths and key size
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log operations to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// generate auxiliary files
    #[command(subcommand)]
    #[command(long_about = "Generate manpages, example shell settings, example databases, etc.")]
    Gen(GenCommands),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GenCommands {
    /// generate man pages for CockroachDB
    #[command(long_about = MAN_LONG_ABOUT)]
    Man {
        /// path where man pages will be outputted [default: man/man1]
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// generate autocompletion script for CockroachDB
    #[command(long_about = AUTOCOMPLETE_LONG_ABOUT)]
    Autocomplete {
        /// bash or zsh [default: bash]
        #[arg(value_name = "SHELL")]
        shell: Option<String>,

        /// path to generated autocomplete file
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// generate store key for encryption at rest
    #[command(long_about = ENCRYPTION_KEY_LONG_ABOUT)]
    EncryptionKey {
        /// AES key size for encryption at rest [default: 128]
        #[arg(short, long, allow_negative_numbers = true)]
        size: Option<i64>,

        /// file the key is written to
        key_file: PathBuf,
    },

    /// output a list of available cluster settings
    #[command(long_about = "Output the list of cluster settings known to this binary.")]
    SettingsList {
        /// accepted for compatibility, unused
        #[arg(value_name = "OUTPUT_DIR")]
        output_dir: Option<String>,
    },
}

impl GenCommands {
    /// Name of the sub-command as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            GenCommands::Man { .. } => "man",
            GenCommands::Autocomplete { .. } => "autocomplete",
            GenCommands::EncryptionKey { .. } => "encryption-key",
            GenCommands::SettingsList { .. } => "settings-list",
        }
    }
}

fn parse_table_format(s: &str) -> Result<TableFormat, roachgen_core::GenError> {
    s.parse()
}
