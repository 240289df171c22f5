//! Discovery of provisioned instances.

use std::path::PathBuf;

use crate::app::AppContext;
use crate::domain::{AppError, InstanceId};
use crate::ports::{InstanceFilesystem, ServiceRegistrar};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedInstance {
    pub id: InstanceId,
    pub install_dir: PathBuf,
}

/// Install directories directly under the scan root, ordered by identifier.
pub fn execute<F: InstanceFilesystem, S: ServiceRegistrar>(
    ctx: &AppContext<F, S>,
) -> Result<Vec<ListedInstance>, AppError> {
    let fs = ctx.filesystem();
    let root = ctx.scan_root();
    if !fs.is_dir(root) {
        log::warn!("scan root {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut listed: Vec<ListedInstance> = fs
        .list_dir(root)?
        .into_iter()
        .filter(|path| fs.is_dir(path))
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?;
            let id = ctx.layout().install_dir_id(name)?;
            Some(ListedInstance { id, install_dir: path })
        })
        .collect();
    listed.sort_by(|a, b| a.id.cmp(&b.id).then_with(|| a.install_dir.cmp(&b.install_dir)));
    Ok(listed)
}
