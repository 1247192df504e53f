//! `rebuild`: augment meta files, then regenerate each role's README.

use std::fs;
use std::path::Path;

use serde_yaml::Mapping;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::meta::{augment, to_document};
use crate::domain::readme::{MetaContext, ReadmeContext};
use crate::domain::yaml::parse_mapping;
use crate::domain::{
    AnsibleFolder, AppError, MessageKey, RoleDirectory, RoleFailure, Severity, Substitutions,
};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};
use crate::services::{LoadedTemplate, META_TEMPLATE, TemplateSource, main_file};

use super::write_file;

const META_FILE: &str = "meta/main.yml";
const README_FILE: &str = "README.md";

/// Per-role results of a rebuild.
#[derive(Debug, Default)]
pub struct RebuildOutcome {
    pub rebuilt: Vec<String>,
    /// Roles where at least one file was written.
    pub changed: Vec<String>,
    pub failures: Vec<RoleFailure>,
}

impl RebuildOutcome {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

pub fn execute<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    path: Option<&Path>,
    readme_template: Option<&str>,
) -> Result<RebuildOutcome, AppError> {
    let root = ctx.resolver().resolve(path)?;
    let selected = readme_template.or(ctx.config().options.readme_template.as_deref());
    let template = TemplateSource::readme(selected, ctx.cwd())?.load(ctx.templates(), ctx.fetcher())?;
    debug!(template = %template.name, "loaded readme template");

    let discovery = ctx.scanner().discover(&root)?;
    let mut outcome = RebuildOutcome { failures: discovery.failures, ..RebuildOutcome::default() };
    if discovery.roles.is_empty() && outcome.failures.is_empty() {
        ctx.say(Severity::Skipped, MessageKey::EmptyRolesPath, &Substitutions::new(), root.display())?;
        return Ok(outcome);
    }

    for role in &discovery.roles {
        let name = role.name().to_string();
        match rebuild_role(ctx, role, &template) {
            Ok(written) if written.is_empty() => {
                ctx.reporter().role(Severity::Ok, &name, "unchanged");
                outcome.rebuilt.push(name);
            }
            Ok(written) => {
                ctx.reporter().role(Severity::Changed, &name, &written.join(", "));
                outcome.changed.push(name.clone());
                outcome.rebuilt.push(name);
            }
            Err(error) => {
                warn!(role = %name, %error, "rebuild failed");
                outcome.failures.push(RoleFailure { role: name, error });
            }
        }
    }
    for failure in &outcome.failures {
        ctx.report_failure(&failure.role, &failure.error);
    }

    info!(rebuilt = outcome.rebuilt.len(), changed = outcome.changed.len(), "rebuild finished");
    let subs = Substitutions::new().with("role_count", outcome.rebuilt.len());
    ctx.say(Severity::Ok, MessageKey::RebuildSuccess, &subs, root.display())?;
    Ok(outcome)
}

/// Rebuild one role, returning the files that were written.
pub(super) fn rebuild_role<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    role: &RoleDirectory,
    template: &LoadedTemplate,
) -> Result<Vec<&'static str>, AppError> {
    let config = ctx.config();
    let name = role.name();
    let meta_file = role.meta_file();
    let mut written = Vec::new();

    let (mut meta, mut document) = if meta_file.is_file() {
        let content = fs::read_to_string(&meta_file)?;
        (parse_mapping(&meta_file, &content)?, None)
    } else {
        let source = ctx.templates().get(META_TEMPLATE)?;
        let rendered = ctx.renderer().render(META_TEMPLATE, source, &MetaContext::new(name, config))?;
        (parse_mapping(&meta_file, &rendered)?, Some(rendered))
    };
    if augment(&meta_file, &mut meta, name, config)? {
        document = Some(to_document(&meta_file, &meta)?);
    }
    if let Some(document) = document {
        write_file(&meta_file, &document)?;
        written.push(META_FILE);
    }

    // Re-inspect so the freshly written meta folder is counted.
    let role = RoleDirectory::inspect(role.root(), &ctx.conventions().folders)?;
    let mut stats = ctx.scanner().collect(&role)?;
    // The README describes the role including itself.
    if !stats.readme {
        stats.files += 1;
        stats.readme = true;
    }
    let defaults = read_defaults(&role)?;

    let context = ReadmeContext::build(&meta, &defaults, &stats, config);
    let readme = ctx.renderer().render(&template.name, &template.text, &context)?;
    let readme_file = role.readme_file();
    let current = fs::read_to_string(&readme_file).ok();
    if current.as_deref() != Some(readme.as_str()) {
        write_file(&readme_file, &readme)?;
        written.push(README_FILE);
    }

    Ok(written)
}

fn read_defaults(role: &RoleDirectory) -> Result<Mapping, AppError> {
    match main_file(&role.folder_path(AnsibleFolder::Defaults)) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            parse_mapping(&path, &content)
        }
        None => Ok(Mapping::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppContextBuilder;
    use crate::testing::{FakeFetcher, FakeShell, MemoryReporter, test_context};
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn creates_meta_and_readme_for_bare_role() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "playbooks/roles/web/tasks/main.yml", "- debug: msg=hi\n");
        write(dir.path(), "playbooks/roles/web/defaults/main.yml", "web_port: 8080\n");
        let ctx = test_context(dir.path());

        let outcome = execute(&ctx, None, None).unwrap();
        assert_eq!(outcome.changed, vec!["web"]);

        let role = dir.path().join("playbooks/roles/web");
        let meta = fs::read_to_string(role.join("meta/main.yml")).unwrap();
        assert!(meta.contains("role_name: \"web\""));
        assert!(meta.contains("ansigenome_info:"));

        let readme = fs::read_to_string(role.join("README.md")).unwrap();
        assert!(readme.starts_with("# web\n"));
        assert!(readme.contains("| `web_port` | `8080` |"));
        assert!(readme.contains("Ansible role for web"));
        assert_eq!(
            ctx.reporter().messages().last().unwrap(),
            &format!("1 roles were rebuilt at: {}", dir.path().join("playbooks/roles").display())
        );
    }

    #[test]
    fn second_rebuild_leaves_files_untouched() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "roles/db/tasks/main.yml", "- debug: msg=hi\n");
        let ctx = test_context(dir.path());
        execute(&ctx, Some(Path::new("roles")), None).unwrap();

        let again = test_context(dir.path());
        let outcome = execute(&again, Some(Path::new("roles")), None).unwrap();
        assert!(outcome.changed.is_empty());
        assert_eq!(again.reporter().roles_with(Severity::Ok), vec!["db"]);
    }

    #[test]
    fn existing_meta_values_are_kept() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "roles/db/meta/main.yml",
            "galaxy_info:\n  author: Jane\n  description: Database\n",
        );
        let ctx = test_context(dir.path());
        execute(&ctx, Some(Path::new("roles")), None).unwrap();

        let meta = fs::read_to_string(dir.path().join("roles/db/meta/main.yml")).unwrap();
        assert!(meta.starts_with("---\n"));
        assert!(meta.contains("author: Jane"));
        assert!(meta.contains("description: Database"));
        assert!(meta.contains("license: MIT"));
    }

    #[test]
    fn broken_role_does_not_stop_the_batch() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "roles/bad/meta/main.yml", "galaxy_info: [unclosed\n");
        write(dir.path(), "roles/good/tasks/main.yml", "---\n");
        let ctx = test_context(dir.path());

        let outcome = execute(&ctx, Some(Path::new("roles")), None).unwrap();
        assert_eq!(outcome.rebuilt, vec!["good"]);
        assert!(outcome.has_failures());
        assert_eq!(ctx.reporter().roles_with(Severity::Failed), vec!["bad"]);
        assert!(dir.path().join("roles/good/README.md").is_file());
    }

    #[test]
    fn readme_template_from_url() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "roles/db/tasks/main.yml", "---\n");
        let ctx = AppContextBuilder::new(dir.path()).build(
            MemoryReporter::default(),
            FakeShell::default(),
            FakeFetcher::with_body("Role {{ role.name }}\n"),
        );

        execute(&ctx, Some(Path::new("roles")), Some("https://example.com/readme.j2")).unwrap();
        let readme = fs::read_to_string(dir.path().join("roles/db/README.md")).unwrap();
        assert_eq!(readme, "Role db\n");
        assert_eq!(ctx.fetcher().requested(), vec!["https://example.com/readme.j2"]);
    }

    #[test]
    fn unreachable_template_is_fatal() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "roles/db/tasks/main.yml", "---\n");
        let ctx = test_context(dir.path());

        let err = execute(&ctx, Some(Path::new("roles")), Some("https://example.com/x.j2")).unwrap_err();
        assert!(matches!(err, AppError::UrlUnreachable { .. }));
        assert!(!dir.path().join("roles/db/README.md").exists());
    }

    #[test]
    fn template_error_is_reported_per_role() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "roles/db/tasks/main.yml", "---\n");
        write(dir.path(), "custom.j2", "{{ role.nope }}\n");
        let ctx = test_context(dir.path());

        let outcome = execute(&ctx, Some(Path::new("roles")), Some("custom.j2")).unwrap();
        assert!(matches!(outcome.failures[0].error, AppError::TemplateSyntax { .. }));
    }
}
