//! Pure parse/validate for host configuration.

use super::HostConfig;
use crate::domain::AppError;

/// Parse and validate host configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<HostConfig, AppError> {
    let config: HostConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
