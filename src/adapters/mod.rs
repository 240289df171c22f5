pub mod filesystem;
pub mod service_command;

pub use filesystem::LocalFilesystem;
pub use service_command::CommandServiceRegistrar;
