//! Instance provisioning from the template artifacts.
//!
//! Creation runs as a sequence of recorded steps. If any step fails,
//! including service registration, the recorded artifacts are removed again
//! so an instance is either fully present or fully absent afterwards.

use crate::app::AppContext;
use crate::app::commands::delete;
use crate::domain::{AppError, ArtifactKind, InstanceDescriptor, InstanceId};
use crate::ports::{InstanceFilesystem, ServiceRegistrar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOutcome {
    pub instance: InstanceDescriptor,
    /// An earlier instance with the same identifier was removed first.
    pub replaced: bool,
}

/// Create every given instance, in order, stopping at the first failure.
pub fn execute<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
    ids: &[InstanceId],
) -> Result<Vec<CreateOutcome>, AppError> {
    ids.iter().map(|id| create_instance(ctx, *id)).collect()
}

fn create_instance<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
    id: InstanceId,
) -> Result<CreateOutcome, AppError> {
    let instance = ctx.layout().resolve(id);
    if instance.tcp_port().is_none() {
        return Err(AppError::PortOutOfRange { id, port: instance.port });
    }

    // Checked before the pre-delete so a working instance is not torn down for nothing.
    ctx.templates().verify(ctx.filesystem())?;

    let previous = delete::remove_instance(ctx, &instance)?;

    let mut attempted = Vec::with_capacity(ArtifactKind::ALL.len());
    let result = provision(ctx, &instance, &mut attempted)
        .and_then(|()| ctx.registrar().register(&instance));

    if let Err(err) = result {
        roll_back(ctx, &instance, &attempted);
        return Err(AppError::RolledBack { id, source: Box::new(err) });
    }

    log::info!("created instance {} on port {}", id, instance.port);
    Ok(CreateOutcome { instance, replaced: previous.was_present() })
}

fn provision<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
    instance: &InstanceDescriptor,
    attempted: &mut Vec<ArtifactKind>,
) -> Result<(), AppError> {
    let fs = ctx.filesystem();

    for (kind, target) in instance.artifacts() {
        let source = ctx.templates().source(kind);
        // Recorded before the copy so a half-written target is still rolled back.
        attempted.push(kind);

        if kind.is_dir() {
            fs.copy_dir_all(source, target)?;
        } else {
            fs.copy_file(source, target)?;
            let content = fs.read_bytes(target)?;
            fs.write_file(target, &ctx.tokens().render(&content, instance, kind))?;
        }
        log::info!("wrote {} {}", kind.label(), target.display());
    }

    Ok(())
}

fn roll_back<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
    instance: &InstanceDescriptor,
    attempted: &[ArtifactKind],
) {
    let fs = ctx.filesystem();
    for kind in attempted.iter().rev() {
        let path = instance.path(*kind);
        let removal = if kind.is_dir() { fs.remove_dir_all(path) } else { fs.remove_file(path) };
        match removal {
            Ok(true) => log::info!("rolled back {} {}", kind.label(), path.display()),
            Ok(false) => {}
            Err(err) => {
                log::warn!("failed to roll back {} {}: {}", kind.label(), path.display(), err)
            }
        }
    }
}
