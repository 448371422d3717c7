//! Tracing setup for the `catalog` binary.
//!
//! Events come from three targets, each filtered on its own:
//!
//! | Target             | Emits                                                          |
//! |--------------------|----------------------------------------------------------------|
//! | `catalog`          | dispatch, config loading, storage paths                        |
//! | `catalog_core`     | use case outcomes, saga compensation, ignored status reports   |
//! | `catalog_adapters` | JSON store reads and writes, media files stored and cleared    |
//!
//! `-v` raises the binary and the services to INFO but leaves the adapters
//! at WARN, so one line per use case is printed. `-vv` adds every file the
//! adapters touch and prefixes lines with their target. `RUST_LOG` replaces
//! the filter entirely.

use std::io::{self, IsTerminal as _};

use anyhow::Context as _;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CLI_TARGET: &str = "catalog";
const CORE_TARGET: &str = "catalog_core";
const ADAPTERS_TARGET: &str = "catalog_adapters";

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(TargetLevels::for_args(args).directives())
            .context("invalid log filter")?,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(args.verbose >= 2)
        .with_ansi(!args.no_color && io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    Ok(())
}

/// Filter level of each catalog target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TargetLevels {
    cli: &'static str,
    core: &'static str,
    adapters: &'static str,
}

impl TargetLevels {
    const fn uniform(level: &'static str) -> Self {
        Self {
            cli: level,
            core: level,
            adapters: level,
        }
    }

    fn for_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::uniform("error");
        }
        match args.verbose {
            0 => Self::uniform("warn"),
            1 => Self {
                cli: "info",
                core: "info",
                adapters: "warn",
            },
            2 => Self::uniform("debug"),
            _ => Self::uniform("trace"),
        }
    }

    fn directives(&self) -> String {
        format!(
            "{CLI_TARGET}={},{CORE_TARGET}={},{ADAPTERS_TARGET}={}",
            self.cli, self.core, self.adapters
        )
    }
}
