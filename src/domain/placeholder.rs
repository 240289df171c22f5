//! Named placeholders substituted into the copied template files.

use super::config::PlaceholdersConfig;
use super::instance::{ArtifactKind, InstanceDescriptor};

/// A literal token in a template file and the instance value that replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// `octoprint.bck` -> `octoprint<id>`
    ServiceName,
    /// `OctoPrint.bck` -> `OctoPrint<id>`
    InstallName,
    /// `5000` -> `<base_port + id>`
    Port,
}

impl Placeholder {
    pub const ALL: [Placeholder; 3] =
        [Placeholder::ServiceName, Placeholder::InstallName, Placeholder::Port];

    /// Placeholders rewritten in the given artifact. Directories are copied verbatim.
    pub fn applicable_to(kind: ArtifactKind) -> &'static [Placeholder] {
        match kind {
            ArtifactKind::InitScript => &[Placeholder::ServiceName, Placeholder::InstallName],
            ArtifactKind::DefaultEnv => &Placeholder::ALL,
            ArtifactKind::ConfigDir | ArtifactKind::InstallDir => &[],
        }
    }

    pub fn value(self, descriptor: &InstanceDescriptor) -> String {
        match self {
            Placeholder::ServiceName => descriptor.service_name.clone(),
            Placeholder::InstallName => descriptor.install_name.clone(),
            Placeholder::Port => descriptor.port.to_string(),
        }
    }
}

/// Configured literal for each placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTokens {
    service: String,
    install: String,
    port: String,
}

impl PlaceholderTokens {
    pub fn from_config(config: &PlaceholdersConfig) -> Self {
        Self {
            service: config.service.clone(),
            install: config.install.clone(),
            port: config.port.clone(),
        }
    }

    pub fn token(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::ServiceName => &self.service,
            Placeholder::InstallName => &self.install,
            Placeholder::Port => &self.port,
        }
    }

    /// Rewrite every placeholder that applies to `kind`.
    ///
    /// Works on raw bytes; template files need not be valid UTF-8.
    pub fn render(
        &self,
        content: &[u8],
        descriptor: &InstanceDescriptor,
        kind: ArtifactKind,
    ) -> Vec<u8> {
        let pairs: Vec<(&str, String)> = Placeholder::applicable_to(kind)
            .iter()
            .map(|placeholder| (self.token(*placeholder), placeholder.value(descriptor)))
            .collect();
        substitute(content, &pairs)
    }
}

/// Replace all tokens in one left-to-right pass.
///
/// Inserted values are never re-scanned. When two tokens match at the same
/// position the longer one wins.
pub fn substitute(content: &[u8], pairs: &[(&str, String)]) -> Vec<u8> {
    let mut tokens: Vec<(&[u8], &[u8])> = pairs
        .iter()
        .filter(|(token, _)| !token.is_empty())
        .map(|(token, value)| (token.as_bytes(), value.as_bytes()))
        .collect();
    tokens.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut out = Vec::with_capacity(content.len());
    let mut pos = 0;
    while pos < content.len() {
        let rest = &content[pos..];
        match tokens.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.extend_from_slice(value);
                pos += token.len();
            }
            None => {
                out.push(content[pos]);
                pos += 1;
            }
        }
    }
    out
}
