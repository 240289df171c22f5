//! Instance removal.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, ArtifactKind, InstanceDescriptor, InstanceId};
use crate::ports::{InstanceFilesystem, ServiceRegistrar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub id: InstanceId,
    pub removed: Vec<PathBuf>,
    pub unregistered: bool,
}

impl DeleteOutcome {
    /// Whether any artifact of the instance existed before removal.
    pub fn was_present(&self) -> bool {
        !self.removed.is_empty()
    }
}

/// Remove every given instance, in order. Absent artifacts are skipped silently.
pub fn execute<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
    ids: &[InstanceId],
) -> Result<Vec<DeleteOutcome>, AppError> {
    ids.iter()
        .map(|id| {
            let descriptor = ctx.layout().resolve(*id);
            remove_instance(ctx, &descriptor)
        })
        .collect()
}

pub(crate) fn remove_instance<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
    descriptor: &InstanceDescriptor,
) -> Result<DeleteOutcome, AppError> {
    let fs = ctx.filesystem();
    let mut removed = Vec::new();
    let mut init_script_removed = false;

    for (kind, path) in descriptor.artifacts() {
        let deleted = if kind.is_dir() { fs.remove_dir_all(path)? } else { fs.remove_file(path)? };
        if deleted {
            log::info!("removed {} {}", kind.label(), path.display());
            removed.push(path.to_path_buf());
            init_script_removed |= kind == ArtifactKind::InitScript;
        } else {
            log::debug!("{} {} already absent", kind.label(), path.display());
        }
    }

    if init_script_removed {
        ctx.registrar().unregister(descriptor)?;
    }

    Ok(DeleteOutcome { id: descriptor.id, removed, unregistered: init_script_removed })
}
