//! Locations of the read-only template artifacts.

use std::path::{Path, PathBuf};

use super::AppError;
use super::config::TemplatesConfig;
use super::instance::ArtifactKind;
use crate::ports::InstanceFilesystem;

/// The two directory trees and two files every instance is copied from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    config_dir: PathBuf,
    install_dir: PathBuf,
    init_script: PathBuf,
    default_env: PathBuf,
}

impl TemplateSet {
    /// Resolve configured locations, joining relative ones onto `base`.
    pub fn from_config(config: &TemplatesConfig, base: &Path) -> Self {
        Self {
            config_dir: base.join(&config.config_dir),
            install_dir: base.join(&config.install_dir),
            init_script: base.join(&config.init_script),
            default_env: base.join(&config.default_env),
        }
    }

    pub fn source(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::ConfigDir => &self.config_dir,
            ArtifactKind::InstallDir => &self.install_dir,
            ArtifactKind::InitScript => &self.init_script,
            ArtifactKind::DefaultEnv => &self.default_env,
        }
    }

    /// Check that every source exists with the right shape.
    pub fn verify(&self, fs: &impl InstanceFilesystem) -> Result<(), AppError> {
        for kind in ArtifactKind::ALL {
            let source = self.source(kind);
            let usable = if kind.is_dir() {
                fs.is_dir(source)
            } else {
                fs.exists(source) && !fs.is_dir(source)
            };
            if !usable {
                return Err(AppError::TemplateMissing(source.to_path_buf()));
            }
        }
        Ok(())
    }
}
