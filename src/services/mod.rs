mod config_loader;
mod http_template_fetcher;
mod path_resolver;
mod role_scanner;
mod system_shell;
mod template_assets;
mod template_renderer;
mod template_source;
mod terminal_reporter;

pub use config_loader::{CONFIG_ENV, CONFIG_FILE_NAME, load_user_config};
pub use http_template_fetcher::HttpTemplateFetcher;
pub use path_resolver::PathResolver;
pub use role_scanner::{Discovery, RoleScanner, main_file};
pub use system_shell::SystemShell;
pub use template_assets::{EmbeddedTemplates, META_TEMPLATE, README_TEMPLATE, SkeletonFile};
pub use template_renderer::TemplateRenderer;
pub use template_source::{LoadedTemplate, TemplateSource};
pub use terminal_reporter::TerminalReporter;
