use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{
    AppError, Conventions, MessageCatalog, MessageKey, Severity, Substitutions, UserConfig,
};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};
use crate::services::{EmbeddedTemplates, PathResolver, RoleScanner, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<R: Reporter, S: ShellRunner, F: TemplateFetcher> {
    cwd: PathBuf,
    conventions: Conventions,
    catalog: MessageCatalog,
    config: UserConfig,
    templates: EmbeddedTemplates,
    renderer: TemplateRenderer,
    reporter: R,
    shell: S,
    fetcher: F,
}

/// Builder for [`AppContext`]; unset values use the standard conventions and catalog.
pub struct AppContextBuilder {
    cwd: PathBuf,
    conventions: Conventions,
    catalog: MessageCatalog,
    config: UserConfig,
}

impl AppContextBuilder {
    /// Start building a context rooted at `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            conventions: Conventions::standard(),
            catalog: MessageCatalog::standard(),
            config: UserConfig::default(),
        }
    }

    pub fn conventions(mut self, conventions: Conventions) -> Self {
        self.conventions = conventions;
        self
    }

    pub fn catalog(mut self, catalog: MessageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(mut self, config: UserConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
        self,
        reporter: R,
        shell: S,
        fetcher: F,
    ) -> AppContext<R, S, F> {
        AppContext {
            cwd: self.cwd,
            conventions: self.conventions,
            catalog: self.catalog,
            config: self.config,
            templates: EmbeddedTemplates::new(),
            renderer: TemplateRenderer::new(),
            reporter,
            shell,
            fetcher,
        }
    }
}

impl<R: Reporter, S: ShellRunner, F: TemplateFetcher> AppContext<R, S, F> {
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn conventions(&self) -> &Conventions {
        &self.conventions
    }

    pub fn catalog(&self) -> &MessageCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &UserConfig {
        &self.config
    }

    pub fn templates(&self) -> &EmbeddedTemplates {
        &self.templates
    }

    pub fn renderer(&self) -> &TemplateRenderer {
        &self.renderer
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn shell(&self) -> &S {
        &self.shell
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    pub fn resolver(&self) -> PathResolver {
        PathResolver::new(&self.cwd, &self.conventions)
    }

    pub fn scanner(&self) -> RoleScanner {
        RoleScanner::new(&self.conventions)
    }

    /// Render a catalog message with a trailing detail and report it.
    pub fn say(
        &self,
        severity: Severity,
        key: MessageKey,
        subs: &Substitutions,
        detail: impl std::fmt::Display,
    ) -> Result<(), AppError> {
        let text = self.catalog.line(key, subs, detail)?;
        self.reporter.message(severity, &text);
        Ok(())
    }

    /// Report a per-role error in red.
    pub fn report_failure(&self, role: &str, err: &AppError) {
        if !err.is_per_role() {
            warn!(role, error = %err, "role aborted by a non-content error");
        }
        self.reporter.role(Severity::Failed, role, &self.catalog.describe(err));
    }
}
