mod fake_fetcher;
mod fake_shell;
mod memory_reporter;

pub use fake_fetcher::FakeFetcher;
pub use fake_shell::FakeShell;
pub use memory_reporter::{MemoryReporter, ReportedLine};

use std::path::Path;

use crate::app::{AppContext, AppContextBuilder};
use crate::domain::UserConfig;

/// Context wired with in-memory fakes, rooted at `cwd`.
pub fn test_context(cwd: &Path) -> AppContext<MemoryReporter, FakeShell, FakeFetcher> {
    AppContextBuilder::new(cwd)
        .config(UserConfig::default())
        .build(MemoryReporter::default(), FakeShell::default(), FakeFetcher::default())
}
