use crate::domain::{AppError, InstanceDescriptor};

/// Port for the host init system that starts instances at boot.
pub trait ServiceRegistrar {
    /// Register the instance's init script with the host.
    fn register(&self, instance: &InstanceDescriptor) -> Result<(), AppError>;

    /// Drop the instance's boot registration. Called after its init script is gone.
    fn unregister(&self, instance: &InstanceDescriptor) -> Result<(), AppError>;
}

impl<T: ServiceRegistrar + ?Sized> ServiceRegistrar for Box<T> {
    fn register(&self, instance: &InstanceDescriptor) -> Result<(), AppError> {
        (**self).register(instance)
    }

    fn unregister(&self, instance: &InstanceDescriptor) -> Result<(), AppError> {
        (**self).unregister(instance)
    }
}

/// Registrar used when service registration is disabled in configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopServiceRegistrar;

impl ServiceRegistrar for NoopServiceRegistrar {
    fn register(&self, instance: &InstanceDescriptor) -> Result<(), AppError> {
        log::debug!("service registration disabled; skipping {}", instance.service_name);
        Ok(())
    }

    fn unregister(&self, instance: &InstanceDescriptor) -> Result<(), AppError> {
        log::debug!("service registration disabled; skipping removal of {}", instance.service_name);
        Ok(())
    }
}
