//! Where README templates come from.

use std::fs;
use std::path::{Path, PathBuf};

use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateFetcher;

use super::template_assets::{EmbeddedTemplates, README_TEMPLATE};

/// Location of a template selected by the user or the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Embedded(&'static str),
    File(PathBuf),
    Url(Url),
}

/// A loaded template and the name used in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTemplate {
    pub name: String,
    pub text: String,
}

impl TemplateSource {
    /// Interpret a user supplied template location; `None` selects the embedded README.
    pub fn readme(spec: Option<&str>, cwd: &Path) -> Result<Self, AppError> {
        let Some(spec) = spec else {
            return Ok(TemplateSource::Embedded(README_TEMPLATE));
        };
        if spec.starts_with("http://") || spec.starts_with("https://") {
            let url = Url::parse(spec).map_err(|err| AppError::UrlUnreachable {
                url: spec.to_string(),
                reason: err.to_string(),
            })?;
            return Ok(TemplateSource::Url(url));
        }
        let path = Path::new(spec);
        let path = if path.is_absolute() { path.to_path_buf() } else { cwd.join(path) };
        Ok(TemplateSource::File(path))
    }

    pub fn load(
        &self,
        embedded: &EmbeddedTemplates,
        fetcher: &impl TemplateFetcher,
    ) -> Result<LoadedTemplate, AppError> {
        match self {
            TemplateSource::Embedded(name) => {
                Ok(LoadedTemplate { name: name.to_string(), text: embedded.get(name)?.to_string() })
            }
            TemplateSource::File(path) => {
                if !path.is_file() {
                    return Err(AppError::PathMissing { path: path.clone() });
                }
                let text = fs::read_to_string(path)?;
                Ok(LoadedTemplate { name: path.display().to_string(), text })
            }
            TemplateSource::Url(url) => {
                Ok(LoadedTemplate { name: url.to_string(), text: fetcher.fetch(url)? })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeFetcher;
    use tempfile::TempDir;

    #[test]
    fn none_selects_embedded_readme() {
        let source = TemplateSource::readme(None, Path::new("/work")).unwrap();
        assert_eq!(source, TemplateSource::Embedded(README_TEMPLATE));
        let loaded = source.load(&EmbeddedTemplates::new(), &FakeFetcher::default()).unwrap();
        assert!(loaded.text.contains("## Role variables"));
    }

    #[test]
    fn urls_are_fetched() {
        let source =
            TemplateSource::readme(Some("https://example.com/t.j2"), Path::new("/work")).unwrap();
        let fetcher = FakeFetcher::with_body("# {{ role.name }}");
        let loaded = source.load(&EmbeddedTemplates::new(), &fetcher).unwrap();
        assert_eq!(loaded.text, "# {{ role.name }}");
        assert_eq!(fetcher.requested(), vec!["https://example.com/t.j2"]);
    }

    #[test]
    fn relative_files_resolve_against_cwd() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("custom.j2"), "{{ role.name }}").unwrap();
        let source = TemplateSource::readme(Some("custom.j2"), dir.path()).unwrap();
        let loaded = source.load(&EmbeddedTemplates::new(), &FakeFetcher::default()).unwrap();
        assert_eq!(loaded.text, "{{ role.name }}");
    }

    #[test]
    fn missing_file_is_path_missing() {
        let dir = TempDir::new().unwrap();
        let source = TemplateSource::readme(Some("nope.j2"), dir.path()).unwrap();
        let err = source.load(&EmbeddedTemplates::new(), &FakeFetcher::default()).unwrap_err();
        assert!(matches!(err, AppError::PathMissing { .. }));
    }
}
