//! octoctl: provision, remove, and list numbered OctoPrint instances on one host.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{
    CreateOutcome, DeleteOutcome, ListedInstance, create_instances, create_instances_at,
    delete_instances, list_instances, load_config,
};
pub use domain::{AppError, HostConfig, InstanceDescriptor, InstanceId, InstanceLayout};
