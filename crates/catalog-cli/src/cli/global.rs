//! Options shared by every `catalog` subcommand.

use std::path::PathBuf;

use clap::Args;

/// Flattened into [`super::Cli`]; each option is `global` so it may appear
/// before or after the subcommand (`catalog -v video list`,
/// `catalog video list -v`).
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log what the catalog does on stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log use cases (-v), storage access (-vv), everything (-vvv)",
        long_help = "Log to stderr while the command runs:
    (none)  - warnings: compensated video creates, ignored media status reports
    -v      - use case outcomes from the services
    -vv     - every record and media file read or written, with log targets
    -vvv    - trace output from all catalog crates
RUST_LOG replaces this filter when set."
    )]
    pub verbose: u8,

    /// Print nothing but errors and JSON documents.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors and requested JSON"
    )]
    pub quiet: bool,

    /// Also enabled by a non-empty `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file read before `CATALOG_*` environment variables.
    ///
    /// Without this flag the per-user config file is read if present.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE (must exist)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How results are printed"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Error reports include their cause chain from `-v` on.
    pub fn shows_causes(&self) -> bool {
        self.verbose > 0
    }
}

/// Rendering of command results on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// `output.format` from config, else human on a terminal and plain otherwise.
    #[default]
    Auto,
    /// Coloured field listings.
    Human,
    /// Field listings without ANSI codes.
    Plain,
    /// Aggregate views and created ids as pretty-printed JSON.
    Json,
}
