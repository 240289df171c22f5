mod instance_filesystem;
mod service_registrar;

pub use instance_filesystem::InstanceFilesystem;
pub use service_registrar::{NoopServiceRegistrar, ServiceRegistrar};
