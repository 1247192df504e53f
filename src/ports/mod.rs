mod reporter;
mod shell_runner;
mod template_fetcher;

pub use reporter::Reporter;
pub use shell_runner::{ShellOutput, ShellRunner};
pub use template_fetcher::TemplateFetcher;
