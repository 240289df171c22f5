//! Instance identifiers and the pure mapping from identifier to host paths.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::AppError;
use super::config::HostConfig;

/// Numeric identifier of one server instance.
///
/// Used both as the path suffix (`OctoPrint3`) and as the port offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstanceId(u32);

impl InstanceId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for InstanceId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // u32::from_str accepts a leading '+', which would not round-trip into a path suffix.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AppError::InvalidInstanceId(s.to_string()));
        }
        s.parse::<u32>().map(InstanceId).map_err(|_| AppError::InvalidInstanceId(s.to_string()))
    }
}

/// The four artifacts that make up one provisioned instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    ConfigDir,
    InstallDir,
    InitScript,
    DefaultEnv,
}

impl ArtifactKind {
    /// Creation order. Removal walks the same list.
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::ConfigDir,
        ArtifactKind::InstallDir,
        ArtifactKind::InitScript,
        ArtifactKind::DefaultEnv,
    ];

    pub fn is_dir(self) -> bool {
        matches!(self, ArtifactKind::ConfigDir | ArtifactKind::InstallDir)
    }

    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::ConfigDir => "config directory",
            ArtifactKind::InstallDir => "install directory",
            ArtifactKind::InitScript => "init script",
            ArtifactKind::DefaultEnv => "default-env file",
        }
    }
}

/// Everything derived from an identifier. Never persisted; the filesystem is the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceDescriptor {
    pub id: InstanceId,
    pub config_dir: PathBuf,
    pub install_dir: PathBuf,
    pub init_script: PathBuf,
    pub default_env: PathBuf,
    pub service_name: String,
    pub install_name: String,
    pub port: u32,
}

impl InstanceDescriptor {
    pub fn path(&self, kind: ArtifactKind) -> &Path {
        match kind {
            ArtifactKind::ConfigDir => &self.config_dir,
            ArtifactKind::InstallDir => &self.install_dir,
            ArtifactKind::InitScript => &self.init_script,
            ArtifactKind::DefaultEnv => &self.default_env,
        }
    }

    /// `(kind, path)` pairs in creation order.
    pub fn artifacts(&self) -> impl Iterator<Item = (ArtifactKind, &Path)> {
        ArtifactKind::ALL.into_iter().map(move |kind| (kind, self.path(kind)))
    }

    /// Port as a TCP port, if it fits.
    pub fn tcp_port(&self) -> Option<u16> {
        u16::try_from(self.port).ok()
    }
}

/// Host layout used to resolve identifiers into descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    home_root: PathBuf,
    init_dir: PathBuf,
    default_dir: PathBuf,
    config_prefix: String,
    install_prefix: String,
    service_prefix: String,
    base_port: u16,
}

impl InstanceLayout {
    pub fn from_config(config: &HostConfig) -> Self {
        Self {
            home_root: config.paths.home_root.clone(),
            init_dir: config.paths.init_dir.clone(),
            default_dir: config.paths.default_dir.clone(),
            config_prefix: config.naming.config_prefix.clone(),
            install_prefix: config.naming.install_prefix.clone(),
            service_prefix: config.naming.service_prefix.clone(),
            base_port: config.naming.base_port,
        }
    }

    pub fn resolve(&self, id: InstanceId) -> InstanceDescriptor {
        let service_name = format!("{}{}", self.service_prefix, id);
        let install_name = format!("{}{}", self.install_prefix, id);
        InstanceDescriptor {
            id,
            config_dir: self.home_root.join(format!("{}{}", self.config_prefix, id)),
            install_dir: self.home_root.join(&install_name),
            init_script: self.init_dir.join(&service_name),
            default_env: self.default_dir.join(&service_name),
            port: u32::from(self.base_port).saturating_add(id.value()),
            service_name,
            install_name,
        }
    }

    /// Parse a directory name such as `OctoPrint3` back into its identifier.
    ///
    /// Only names that `resolve` would produce are accepted, so `OctoPrint03`
    /// is not instance 3.
    pub fn install_dir_id(&self, dir_name: &str) -> Option<InstanceId> {
        let id: InstanceId = dir_name.strip_prefix(self.install_prefix.as_str())?.parse().ok()?;
        (format!("{}{}", self.install_prefix, id) == dir_name).then_some(id)
    }
}
