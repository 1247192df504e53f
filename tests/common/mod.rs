//! Shared testing utilities for ansigenome CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Conventional roles path inside the work directory.
    pub fn roles_path(&self) -> PathBuf {
        self.work_dir.join("playbooks/roles")
    }

    /// Build a command for invoking the compiled `ansigenome` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ansigenome").expect("Failed to locate ansigenome binary");
        cmd.current_dir(&self.work_dir)
            .env("HOME", self.home())
            .env("NO_COLOR", "1")
            .env_remove("ANSIGENOME_CONFIG")
            .env_remove("ANSIGENOME_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(path.parent().expect("file has a parent")).expect("create parents");
        fs::write(&path, content).expect("write file");
        path
    }

    /// Read a file relative to the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative))
            .unwrap_or_else(|err| panic!("Failed to read {}: {}", relative, err))
    }

    /// Create a small but complete role under `playbooks/roles`.
    pub fn role(&self, name: &str) -> PathBuf {
        let base = format!("playbooks/roles/{}", name);
        self.write(&format!("{}/defaults/main.yml", base), "---\nport: 80\n");
        self.write(
            &format!("{}/tasks/main.yml", base),
            "---\n- name: install\n  package: name=nginx\n- set_fact:\n    ready: true\n",
        );
        self.roles_path().join(name)
    }

    /// Write the user configuration into `$HOME/.ansigenome.toml`.
    pub fn write_home_config(&self, content: &str) -> PathBuf {
        let path = self.home().join(".ansigenome.toml");
        fs::write(&path, content).expect("write config");
        path
    }
}
