use std::path::{Path, PathBuf};

use crate::domain::{HostConfig, InstanceLayout, PlaceholderTokens, TemplateSet};
use crate::ports::{InstanceFilesystem, ServiceRegistrar};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: InstanceFilesystem, S: ServiceRegistrar> {
    filesystem: F,
    registrar: S,
    layout: InstanceLayout,
    tokens: PlaceholderTokens,
    templates: TemplateSet,
    scan_root: PathBuf,
}

impl<F: InstanceFilesystem, S: ServiceRegistrar> AppContext<F, S> {
    /// Create a new application context. Relative template paths resolve against `base_dir`.
    pub fn new(filesystem: F, registrar: S, config: &HostConfig, base_dir: &Path) -> Self {
        Self {
            filesystem,
            registrar,
            layout: InstanceLayout::from_config(config),
            tokens: PlaceholderTokens::from_config(&config.placeholders),
            templates: TemplateSet::from_config(&config.templates, base_dir),
            scan_root: config.paths.scan_root().to_path_buf(),
        }
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn registrar(&self) -> &S {
        &self.registrar
    }

    pub fn layout(&self) -> &InstanceLayout {
        &self.layout
    }

    pub fn tokens(&self) -> &PlaceholderTokens {
        &self.tokens
    }

    pub fn templates(&self) -> &TemplateSet {
        &self.templates
    }

    pub fn scan_root(&self) -> &Path {
        &self.scan_root
    }
}
