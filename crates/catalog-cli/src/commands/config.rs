//! `catalog config get|list|path`: inspect the resolved configuration.

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(
    cmd: ConfigCommands,
    global: &GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = lookup(&config, &key)?;
            let shown = display(&value);
            output.emit(&serde_json::json!({ "key": key, "value": value }), |out| {
                out.print(&shown)
            })
        }
        ConfigCommands::List => {
            let rendered = toml::to_string_pretty(&config).map_err(serialise_error)?;
            output.emit(&config, |out| {
                out.header("Resolved configuration:")?;
                out.print(rendered.trim_end())
            })
        }
        ConfigCommands::Path => {
            let path = global.config.clone().unwrap_or_else(AppConfig::config_path);
            output.emit(&serde_json::json!({ "path": path }), |out| {
                out.print(&path.display().to_string())
            })
        }
    }
}

/// Resolve a dotted key such as `storage.media_dir` against the config tree.
fn lookup(config: &AppConfig, key: &str) -> CliResult<toml::Value> {
    let tree = toml::Value::try_from(config).map_err(serialise_error)?;

    key.split('.')
        .try_fold(&tree, |node, part| node.get(part))
        .filter(|value| !value.is_table())
        .cloned()
        .ok_or_else(|| {
            let mut known = Vec::new();
            leaf_keys(&tree, "", &mut known);
            CliError::ConfigError {
                message: format!("Unknown config key: '{key}' (known: {})", known.join(", ")),
                source: None,
            }
        })
}

fn leaf_keys(node: &toml::Value, prefix: &str, keys: &mut Vec<String>) {
    match node.as_table() {
        Some(table) => {
            for (name, child) in table {
                let path = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                leaf_keys(child, &path, keys);
            }
        }
        None => keys.push(prefix.to_owned()),
    }
}

/// Strings print bare so paths can be used in shell substitutions.
fn display(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn serialise_error(e: toml::ser::Error) -> CliError {
    CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    }
}
