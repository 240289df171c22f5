//! Shared testing harness for `octoctl` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::host_fixture;

/// Testing harness providing an isolated host tree for CLI exercises.
///
/// `work/` holds the templates and `octoctl.toml`; `host/` stands in for
/// `/home/pi` and `/etc`.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment with templates and service registration disabled.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let ctx = Self { root, work_dir };
        for dir in [ctx.home(), ctx.init_dir(), ctx.default_dir()] {
            fs::create_dir_all(dir).expect("Failed to create host directory");
        }
        host_fixture::write_templates(ctx.work_dir());
        ctx.write_config("[service]\nenabled = false\n");
        ctx
    }

    /// Rewrite `work/octoctl.toml`, keeping the host paths and appending `extra`.
    pub(crate) fn write_config(&self, extra: &str) {
        let content = format!(
            "[paths]\nhome_root = \"{}\"\ninit_dir = \"{}\"\ndefault_dir = \"{}\"\n\n{}",
            self.home().display(),
            self.init_dir().display(),
            self.default_dir().display(),
            extra
        );
        fs::write(self.work_dir.join("octoctl.toml"), content).expect("Failed to write config");
    }

    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Stand-in for `/home/pi`.
    pub(crate) fn home(&self) -> PathBuf {
        self.root.path().join("host/home/pi")
    }

    pub(crate) fn init_dir(&self) -> PathBuf {
        self.root.path().join("host/etc/init.d")
    }

    pub(crate) fn default_dir(&self) -> PathBuf {
        self.root.path().join("host/etc/default")
    }

    pub(crate) fn config_dir(&self, id: u32) -> PathBuf {
        self.home().join(format!(".octoprint{id}"))
    }

    pub(crate) fn install_dir(&self, id: u32) -> PathBuf {
        self.home().join(format!("OctoPrint{id}"))
    }

    pub(crate) fn init_script(&self, id: u32) -> PathBuf {
        self.init_dir().join(format!("octoprint{id}"))
    }

    pub(crate) fn default_env(&self, id: u32) -> PathBuf {
        self.default_dir().join(format!("octoprint{id}"))
    }

    fn instance_paths(&self, id: u32) -> [PathBuf; 4] {
        [self.config_dir(id), self.install_dir(id), self.init_script(id), self.default_env(id)]
    }

    /// Build a command for invoking the compiled `octoctl` binary within the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("octoctl").expect("Failed to locate octoctl binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Run `octoctl -i <ids>` and assert success.
    pub(crate) fn create(&self, ids: &[u32]) {
        let mut cmd = self.cli();
        cmd.arg("-i").args(ids.iter().map(u32::to_string));
        cmd.assert().success();
    }

    /// Run `octoctl -d <ids>` and assert success.
    pub(crate) fn delete(&self, ids: &[u32]) {
        let mut cmd = self.cli();
        cmd.arg("-d").args(ids.iter().map(u32::to_string));
        cmd.assert().success();
    }

    pub(crate) fn read(&self, path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Assert that all four artifacts of an instance exist.
    pub(crate) fn assert_instance_present(&self, id: u32) {
        for path in self.instance_paths(id) {
            assert!(path.exists(), "{} should exist", path.display());
        }
    }

    /// Assert that none of the four artifacts of an instance exist.
    pub(crate) fn assert_instance_absent(&self, id: u32) {
        for path in self.instance_paths(id) {
            assert!(!path.exists(), "{} should not exist", path.display());
        }
    }
}
