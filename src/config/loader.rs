//! Configuration file discovery and loading.
//!
//! An explicit `--config` path must exist. Otherwise the project file
//! `.opro/preflight.yml` is used when present, and the built-in defaults
//! when it is not.

use crate::config::schema::PreflightConfig;
use crate::error::{PreflightError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project-level preflight configuration.
pub const CONFIG_DIR: &str = ".opro";

/// File name of the project-level preflight configuration.
pub const CONFIG_FILE: &str = "preflight.yml";

/// Find the project config at `.opro/preflight.yml`.
pub fn find_project_config(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_DIR).join(CONFIG_FILE);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse configuration from YAML text.
///
/// `path` is only used for error messages.
pub fn parse_config(content: &str, path: &Path) -> Result<PreflightConfig> {
    if content.trim().is_empty() {
        return Ok(PreflightConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| PreflightError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single configuration file.
pub fn load_config_file(path: &Path) -> Result<PreflightConfig> {
    if !path.exists() {
        return Err(PreflightError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content, path)
}

/// Resolve and load the configuration for a run.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<PreflightConfig> {
    if let Some(path) = explicit {
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(path);
    }

    match find_project_config(project_root) {
        Some(path) => {
            tracing::debug!("Loading project config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(PreflightConfig::default())
        }
    }
}
