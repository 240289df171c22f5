//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{CommandServiceRegistrar, LocalFilesystem};
use crate::app::{
    AppContext,
    commands::{create, delete, list},
    config::load_host_config,
};
use crate::domain::{AppError, HostConfig, InstanceId};
use crate::ports::{NoopServiceRegistrar, ServiceRegistrar};

pub use crate::app::commands::create::CreateOutcome;
pub use crate::app::commands::delete::DeleteOutcome;
pub use crate::app::commands::list::ListedInstance;

/// Create an `AppContext` backed by the host filesystem and init system.
fn create_context(
    config: &HostConfig,
    base_dir: &Path,
) -> Result<AppContext<LocalFilesystem, Box<dyn ServiceRegistrar>>, AppError> {
    let registrar: Box<dyn ServiceRegistrar> = if config.service.enabled {
        Box::new(CommandServiceRegistrar::new(&config.service.command)?)
    } else {
        Box::new(NoopServiceRegistrar)
    };
    Ok(AppContext::new(LocalFilesystem::new(), registrar, config, base_dir))
}

/// Load configuration from `path`, or from `./octoctl.toml`, or use defaults.
pub fn load_config(path: Option<&Path>) -> Result<HostConfig, AppError> {
    load_host_config(path, &std::env::current_dir()?, &LocalFilesystem::new())
}

/// Create instances, resolving relative template paths against the current directory.
pub fn create_instances(
    config: &HostConfig,
    ids: &[InstanceId],
) -> Result<Vec<CreateOutcome>, AppError> {
    create_instances_at(config, ids, &std::env::current_dir()?)
}

/// Create instances, resolving relative template paths against `base_dir`.
pub fn create_instances_at(
    config: &HostConfig,
    ids: &[InstanceId],
    base_dir: &Path,
) -> Result<Vec<CreateOutcome>, AppError> {
    let ctx = create_context(config, base_dir)?;
    create::execute(&ctx, ids)
}

/// Delete instances. Identifiers with nothing on disk are reported as absent.
pub fn delete_instances(
    config: &HostConfig,
    ids: &[InstanceId],
) -> Result<Vec<DeleteOutcome>, AppError> {
    let ctx = create_context(config, &std::env::current_dir()?)?;
    delete::execute(&ctx, ids)
}

/// List install directories present under the configured scan root.
pub fn list_instances(config: &HostConfig) -> Result<Vec<ListedInstance>, AppError> {
    let ctx = create_context(config, &std::env::current_dir()?)?;
    list::execute(&ctx)
}
