use std::cell::RefCell;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::{ShellOutput, ShellRunner};

/// Shell that records invocations and fails in selected directories.
#[derive(Default)]
pub struct FakeShell {
    failing: BTreeSet<String>,
    calls: RefCell<Vec<(String, PathBuf)>>,
}

impl FakeShell {
    /// Fail whenever the working directory's name is `role`.
    pub fn failing_in(mut self, role: &str) -> Self {
        self.failing.insert(role.to_string());
        self
    }

    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.calls.borrow().clone()
    }
}

impl ShellRunner for FakeShell {
    fn run(&self, command: &str, cwd: &Path) -> Result<ShellOutput, AppError> {
        self.calls.borrow_mut().push((command.to_string(), cwd.to_path_buf()));
        let name = cwd.file_name().map(|name| name.to_string_lossy().into_owned());
        let fails = name.is_some_and(|name| self.failing.contains(&name));
        if fails {
            Ok(ShellOutput { code: Some(1), stdout: String::new(), stderr: "boom".to_string() })
        } else {
            Ok(ShellOutput { code: Some(0), stdout: "done".to_string(), stderr: String::new() })
        }
    }
}
