use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FormatError, Result};
use crate::mode::Mode;
use crate::options::FormatOptions;

/// Per-project config file, searched for in the input files' directories
/// and their parents.
pub const CONFIG_FILE_NAME: &str = ".sqlformatter.toml";

/// Keys accepted in a config file besides the formatting options.
const RUNNER_KEYS: &[&str] = &["exclude"];

const OPTION_KEYS: &[&str] = &[
    "language",
    "tab_width",
    "use_tabs",
    "keyword_case",
    "indent_style",
    "logical_operator_newline",
    "tabulate_alias",
    "comma_position",
    "expression_width",
    "lines_between_queries",
    "dense_operators",
    "newline_before_semicolon",
    "params",
    "max_depth",
];

/// Load the configuration for a run over `files`. An explicit
/// `config_path` must exist; otherwise the nearest project config is used,
/// then the user config, then the defaults.
pub fn load_config(files: &[PathBuf], config_path: Option<&Path>) -> Result<Mode> {
    let config_file = match config_path {
        Some(path) if path.exists() => Some(path.to_path_buf()),
        Some(path) => {
            return Err(FormatError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        None => find_config_file(files).or_else(user_config_file),
    };

    let mut mode = Mode::default();
    if let Some(path) = config_file {
        tracing::debug!(path = %path.display(), "loading config");
        let raw = load_config_from_path(&path)?;
        apply_config(&mut mode, raw)?;
    }
    Ok(mode)
}

fn find_config_file(files: &[PathBuf]) -> Option<PathBuf> {
    get_common_parents(files)
        .into_iter()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|path| path.is_file())
}

fn user_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("sqlformatter").join("config.toml");
    path.is_file().then_some(path)
}

/// Directories of the given paths and all their ancestors, nearest first.
fn get_common_parents(files: &[PathBuf]) -> Vec<PathBuf> {
    let mut parents = Vec::new();
    for file in files {
        let start = if file.is_dir() {
            file.clone()
        } else {
            match file.parent() {
                Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
                _ => PathBuf::from("."),
            }
        };
        let start = start.canonicalize().unwrap_or(start);
        let mut current = Some(start.as_path());
        while let Some(dir) = current {
            let dir = dir.to_path_buf();
            if !parents.contains(&dir) {
                parents.push(dir);
            }
            current = current.and_then(Path::parent);
        }
    }
    parents
}

fn load_config_from_path(path: &Path) -> Result<HashMap<String, toml::Value>> {
    let content = std::fs::read_to_string(path)?;
    let table: toml::Table = content
        .parse()
        .map_err(|e| FormatError::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
    Ok(table
        .into_iter()
        .map(|(key, value)| (key.to_lowercase().replace('-', "_"), value))
        .collect())
}

/// Check the keys of a config file and apply them to `mode`.
fn apply_config(mode: &mut Mode, mut config: HashMap<String, toml::Value>) -> Result<()> {
    if let Some(key) = config
        .keys()
        .find(|key| !OPTION_KEYS.contains(&key.as_str()) && !RUNNER_KEYS.contains(&key.as_str()))
    {
        return Err(FormatError::Config(format!("Unknown config option: {key}")));
    }

    if let Some(exclude) = config.remove("exclude") {
        mode.exclude = match exclude {
            toml::Value::Array(values) => values
                .iter()
                .map(|v| {
                    v.as_str().map(String::from).ok_or_else(|| {
                        FormatError::Config("exclude must be a list of strings".to_string())
                    })
                })
                .collect::<Result<_>>()?,
            _ => {
                return Err(FormatError::Config(
                    "exclude must be a list of strings".to_string(),
                ))
            }
        };
    }

    let table: toml::Table = config.into_iter().collect();
    mode.options = toml::Value::Table(table).try_into::<FormatOptions>()?;
    mode.options.validate()
}
