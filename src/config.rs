use crate::errors::ShellError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ambient settings. Connection target, database and collection are fixed
/// constants in [`crate::connection`] and are never read from here.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub log_dir: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_retention: Option<usize>,
    /// NDJSON or JSON-array file served from memory instead of the remote database.
    pub dataset: Option<PathBuf>,
}

impl AppConfig {
    /// Parse a TOML config file.
    ///
    /// # Errors
    /// Returns `ShellError::Io` if the file cannot be read and `ShellError::Config` if it is not valid TOML.
    pub fn from_file(path: &Path) -> Result<Self, ShellError> {
        let s = std::fs::read_to_string(path)?;
        toml::from_str::<Self>(&s).map_err(|e| ShellError::Config(format!("{}: {e}", path.display())))
    }

    /// Fill every unset field from `other`; fields already set win.
    pub fn fill_missing(&mut self, other: Self) {
        if self.log_dir.is_none() { self.log_dir = other.log_dir; }
        if self.log_level.is_none() { self.log_level = other.log_level; }
        if self.log_retention.is_none() { self.log_retention = other.log_retention; }
        if self.dataset.is_none() { self.dataset = other.dataset; }
    }

    /// Settings taken from `MOVIESHELL_*` variables, looked up through `var`.
    pub fn from_env_with<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            log_dir: var("MOVIESHELL_LOG_DIR").map(PathBuf::from),
            log_level: var("MOVIESHELL_LOG_LEVEL"),
            log_retention: var("MOVIESHELL_LOG_RETENTION").and_then(|s| s.parse::<usize>().ok()),
            dataset: var("MOVIESHELL_DATASET").map(PathBuf::from),
        }
    }
}

/// Candidate config files in lookup order.
#[must_use]
pub fn find_config_paths(cli_cfg: Option<&Path>) -> Vec<PathBuf> {
    let mut paths: Vec<PathBuf> = vec![];
    if let Some(p) = cli_cfg { paths.push(p.to_path_buf()); }
    if let Ok(p) = std::env::var("MOVIESHELL_CONFIG") { paths.push(PathBuf::from(p)); }
    if let Ok(home) = std::env::var("USERPROFILE").or_else(|_| std::env::var("HOME")) {
        paths.push(PathBuf::from(home).join(".config").join("movieshell.toml"));
    }
    if let Ok(cur) = std::env::current_dir() { paths.push(cur.join("movieshell.toml")); }
    paths
}

/// Load settings with precedence `cli` > env > config files > defaults.
///
/// Files that exist but cannot be read or parsed are skipped and returned
/// alongside the settings; this runs before any logger is installed, so the
/// caller decides how to report them.
#[must_use]
pub fn load_config(cli: AppConfig, cli_cfg: Option<&Path>) -> (AppConfig, Vec<ShellError>) {
    let mut cfg = cli;
    let mut skipped = Vec::new();
    cfg.fill_missing(AppConfig::from_env_with(|k| std::env::var(k).ok()));
    for p in find_config_paths(cli_cfg) {
        if !p.exists() {
            continue;
        }
        match AppConfig::from_file(&p) {
            Ok(file_cfg) => cfg.fill_missing(file_cfg),
            Err(e) => skipped.push(e),
        }
    }
    (cfg, skipped)
}
