//! `init`: create a new role skeleton.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::readme::MetaContext;
use crate::domain::yaml::parse_mapping;
use crate::domain::{Action, AppError, MessageKey, RoleDirectory, Severity, Substitutions};
use crate::ports::{Reporter, ShellRunner, TemplateFetcher};
use crate::services::{LoadedTemplate, META_TEMPLATE, TemplateSource};

use super::{rebuild::rebuild_role, write_file};

#[derive(Serialize)]
struct SkeletonContext<'a> {
    role_name: &'a str,
}

/// Execute the init command.
///
/// Creates every Ansible folder, the skeleton files, a templated
/// `meta/main.yml` and a README rendered from it.
pub fn execute<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    path: Option<&Path>,
    readme_template: Option<&str>,
) -> Result<PathBuf, AppError> {
    let path = path.ok_or_else(|| AppError::MissingArgument {
        action: Action::Init.as_str().to_string(),
        argument: "a path for the new role".to_string(),
    })?;
    let root = ctx.resolver().resolve_new(path)?;
    let selected = readme_template.or(ctx.config().options.readme_template.as_deref());
    let template = TemplateSource::readme(selected, ctx.cwd())?.load(ctx.templates(), ctx.fetcher())?;

    let role_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root.display().to_string());

    if let Err(error) = build_role(ctx, &root, &role_name, &template) {
        discard(&root);
        return Err(error);
    }
    info!(role = %role_name, path = %root.display(), "created role");

    ctx.say(Severity::Ok, MessageKey::InitSuccess, &Substitutions::new(), root.display())?;
    Ok(root)
}

fn build_role<R: Reporter, S: ShellRunner, F: TemplateFetcher>(
    ctx: &AppContext<R, S, F>,
    root: &Path,
    role_name: &str,
    template: &LoadedTemplate,
) -> Result<(), AppError> {
    for folder in &ctx.conventions().folders {
        let dir = root.join(folder.as_str());
        fs::create_dir_all(&dir).map_err(|source| AppError::PathUnmakable { path: dir, source })?;
    }

    let skeleton = SkeletonContext { role_name };
    for file in ctx.templates().skeleton() {
        let content = ctx.renderer().render(&file.template_name, file.template, &skeleton)?;
        write_file(&root.join(&file.target), &content)?;
    }

    let role = RoleDirectory::inspect(root, &ctx.conventions().folders)?;
    let meta_file = role.meta_file();
    let source = ctx.templates().get(META_TEMPLATE)?;
    let meta = ctx.renderer().render(META_TEMPLATE, source, &MetaContext::new(role_name, ctx.config()))?;
    parse_mapping(&meta_file, &meta)?;
    write_file(&meta_file, &meta)?;

    rebuild_role(ctx, &role, template)?;
    Ok(())
}

/// Remove a partially created role.
fn discard(root: &Path) {
    match fs::remove_dir_all(root) {
        Ok(()) => debug!(path = %root.display(), "removed partial role"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %root.display(), %err, "could not remove partial role"),
    }
}
