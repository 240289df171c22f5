use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::InstanceId;

/// Library-wide error type for octoctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration file could not be parsed.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Configuration file passed explicitly does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Instance identifier is not a non-negative integer.
    #[error("Invalid instance identifier '{0}': must be a non-negative integer")]
    InvalidInstanceId(String),

    /// The derived port does not fit in the TCP port range.
    #[error("Instance {id} would listen on port {port}, which is outside the valid port range")]
    PortOutOfRange { id: InstanceId, port: u32 },

    /// A template artifact required for creation is absent.
    #[error("Template not found: {}", .0.display())]
    TemplateMissing(PathBuf),

    /// Host service registration command failed.
    #[error("Service registration error running '{command}': {details}")]
    ServiceRegistration { command: String, details: String },

    /// Creation failed part-way and the written artifacts were removed again.
    #[error("Failed to create instance {id} (partial artifacts rolled back): {source}")]
    RolledBack {
        id: InstanceId,
        #[source]
        source: Box<AppError>,
    },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::InvalidInstanceId(_)
            | AppError::PortOutOfRange { .. } => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound(_) | AppError::TemplateMissing(_) => io::ErrorKind::NotFound,
            AppError::ServiceRegistration { .. } => io::ErrorKind::Other,
            AppError::RolledBack { source, .. } => source.kind(),
        }
    }
}
