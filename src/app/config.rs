//! Host configuration loading.

use std::path::Path;

use crate::domain::config::{DEFAULT_CONFIG_FILE, parse_config_content};
use crate::domain::{AppError, HostConfig};
use crate::ports::InstanceFilesystem;

/// Load host configuration.
///
/// An explicit path must exist. Otherwise `octoctl.toml` in `cwd` is used when
/// present, and the built-in defaults when not.
pub fn load_host_config(
    explicit: Option<&Path>,
    cwd: &Path,
    filesystem: &impl InstanceFilesystem,
) -> Result<HostConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !filesystem.exists(path) {
                return Err(AppError::ConfigNotFound(path.to_path_buf()));
            }
            path.to_path_buf()
        }
        None => {
            let candidate = cwd.join(DEFAULT_CONFIG_FILE);
            if !filesystem.exists(&candidate) {
                log::debug!("no {} in {}; using defaults", DEFAULT_CONFIG_FILE, cwd.display());
                return Ok(HostConfig::default());
            }
            candidate
        }
    };

    log::debug!("loading config from {}", path.display());
    let content = filesystem.read_file(&path)?;
    parse_config_content(&content)
}
