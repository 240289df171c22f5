//! Host configuration (`octoctl.toml`).

pub mod parse;

use std::path::PathBuf;

use serde::Deserialize;

use crate::domain::AppError;

pub use parse::parse_config_content;

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "octoctl.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub paths: PathsConfig,
    pub naming: NamingConfig,
    pub templates: TemplatesConfig,
    pub placeholders: PlaceholdersConfig,
    pub service: ServiceConfig,
}

/// Where instance artifacts live on the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    pub home_root: PathBuf,
    pub init_dir: PathBuf,
    pub default_dir: PathBuf,
    /// Directory scanned by `-l`. Falls back to `home_root`.
    pub scan_root: Option<PathBuf>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            home_root: PathBuf::from("/home/pi"),
            init_dir: PathBuf::from("/etc/init.d"),
            default_dir: PathBuf::from("/etc/default"),
            scan_root: None,
        }
    }
}

impl PathsConfig {
    pub fn scan_root(&self) -> &std::path::Path {
        self.scan_root.as_deref().unwrap_or(&self.home_root)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NamingConfig {
    pub config_prefix: String,
    pub install_prefix: String,
    pub service_prefix: String,
    pub base_port: u16,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            config_prefix: ".octoprint".to_string(),
            install_prefix: "OctoPrint".to_string(),
            service_prefix: "octoprint".to_string(),
            base_port: 5000,
        }
    }
}

/// Template artifact locations. Relative paths resolve against the working directory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemplatesConfig {
    pub config_dir: PathBuf,
    pub install_dir: PathBuf,
    pub init_script: PathBuf,
    pub default_env: PathBuf,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            config_dir: PathBuf::from("octoprint_backup_directories/.octoprint.bck"),
            install_dir: PathBuf::from("octoprint_backup_directories/OctoPrint.bck"),
            init_script: PathBuf::from("octoprint_backup_files/octoprint_init.bck"),
            default_env: PathBuf::from("octoprint_backup_files/octoprint_default.bck"),
        }
    }
}

/// Literal tokens embedded in the template files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaceholdersConfig {
    pub service: String,
    pub install: String,
    pub port: String,
}

impl Default for PlaceholdersConfig {
    fn default() -> Self {
        Self {
            service: "octoprint.bck".to_string(),
            install: "OctoPrint.bck".to_string(),
            port: "5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// When false, created instances are not registered with the init system.
    pub enabled: bool,
    pub command: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self { enabled: true, command: "update-rc.d".to_string() }
    }
}

impl HostConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        let naming = &self.naming;
        for (key, value) in [
            ("naming.config_prefix", &naming.config_prefix),
            ("naming.install_prefix", &naming.install_prefix),
            ("naming.service_prefix", &naming.service_prefix),
            ("placeholders.service", &self.placeholders.service),
            ("placeholders.install", &self.placeholders.install),
            ("placeholders.port", &self.placeholders.port),
        ] {
            if value.is_empty() {
                return Err(AppError::config_error(format!("{key} must not be empty")));
            }
        }

        if naming.base_port == 0 {
            return Err(AppError::config_error("naming.base_port must be greater than zero"));
        }

        let tokens = &self.placeholders;
        if tokens.service == tokens.install
            || tokens.service == tokens.port
            || tokens.install == tokens.port
        {
            return Err(AppError::config_error("placeholders must be pairwise distinct"));
        }

        if self.service.enabled && self.service.command.trim().is_empty() {
            return Err(AppError::config_error(
                "service.command must not be empty while service.enabled is true",
            ));
        }

        Ok(())
    }
}
