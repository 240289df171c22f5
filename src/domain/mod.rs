pub mod config;
pub mod error;
pub mod instance;
pub mod placeholder;
pub mod templates;

pub use config::{DEFAULT_CONFIG_FILE, HostConfig};
pub use error::AppError;
pub use instance::{ArtifactKind, InstanceDescriptor, InstanceId, InstanceLayout};
pub use placeholder::{Placeholder, PlaceholderTokens};
pub use templates::TemplateSet;
