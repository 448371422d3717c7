//! Result rendering for `catalog` commands.
//!
//! Handlers pass a serialisable view plus a closure that prints it for
//! people; [`OutputManager::emit`] picks one based on `--output-format`.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::CliResult;

#[derive(Debug, Clone, Copy)]
enum Mark {
    Success,
    Warning,
    Info,
}

impl Mark {
    const fn symbol(self) -> &'static str {
        match self {
            Self::Success => "\u{2713}",
            Self::Warning => "\u{26a0}",
            Self::Info => "\u{2139}",
        }
    }
}

/// Writes command results to stdout as JSON or as field listings.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` from config;
    /// `auto` resolves to Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or(OutputFormat::Auto)
            }
            explicit => explicit,
        };

        let resolved_format = if requested == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            requested
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    /// Line written to stdout unless `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// `✓ Created category <id>`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Success, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Warning, msg)
    }

    /// Used for empty listings.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.marked(Mark::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.supports_color() {
            self.print(&text.cyan().bold().to_string())
        } else {
            self.print(text)
        }
    }

    fn marked(&self, mark: Mark, msg: &str) -> io::Result<()> {
        let symbol = mark.symbol();
        if !self.supports_color() {
            return self.print(&format!("{symbol} {msg}"));
        }
        let line = match mark {
            Mark::Success => format!("{} {}", symbol.green().bold(), msg.green()),
            Mark::Warning => format!("{} {}", symbol.yellow().bold(), msg.yellow()),
            Mark::Info => format!("{} {}", symbol.blue().bold(), msg.blue()),
        };
        self.print(&line)
    }

    /// Aligned `label: value` line.
    pub fn field(&self, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
        let label = format!("{label:>14}:");
        let label = if self.supports_color() {
            label.dimmed().to_string()
        } else {
            label
        };
        self.print(&format!("{label} {value}"))
    }

    /// Render `value` as JSON in JSON mode, otherwise through `human`.
    ///
    /// JSON goes straight to stdout and ignores `--quiet` so that pipes always
    /// receive a parseable document.
    pub fn emit<T, F>(&self, value: &T, human: F) -> CliResult<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(&Self) -> io::Result<()>,
    {
        if self.format() == OutputFormat::Json {
            let json = serde_json::to_string_pretty(value)?;
            self.term.write_line(&json)?;
        } else {
            human(self)?;
        }
        Ok(())
    }

    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// Never [`OutputFormat::Auto`].
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}
