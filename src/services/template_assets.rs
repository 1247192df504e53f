use include_dir::{Dir, DirEntry, include_dir};

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const README_TEMPLATE: &str = "README.md.j2";
pub const META_TEMPLATE: &str = "meta/main.yml.j2";
const SKELETON_DIR: &str = "role";
const TEMPLATE_SUFFIX: &str = ".j2";

/// A skeleton file written into every new role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonFile {
    /// Destination relative to the role root, e.g. `tasks/main.yml`.
    pub target: String,
    /// Name of the template the content is rendered from.
    pub template_name: String,
    pub template: &'static str,
}

/// Templates compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl EmbeddedTemplates {
    pub fn new() -> Self {
        Self
    }

    pub fn get(&self, name: &str) -> Result<&'static str, AppError> {
        TEMPLATES_DIR
            .get_file(name)
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::template(name, "embedded template not found"))
    }

    /// Skeleton files for `init`, sorted by destination.
    pub fn skeleton(&self) -> Vec<SkeletonFile> {
        let mut files = Vec::new();
        if let Some(dir) = TEMPLATES_DIR.get_dir(SKELETON_DIR) {
            collect_files(dir, &mut files);
        }
        files.sort_by(|a, b| a.target.cmp(&b.target));
        files
    }
}

fn collect_files(dir: &'static Dir, files: &mut Vec<SkeletonFile>) {
    for entry in dir.entries() {
        match entry {
            DirEntry::File(file) => {
                let Some(content) = file.contents_utf8() else {
                    continue;
                };
                let template_name = file.path().to_string_lossy().replace('\\', "/");
                let relative = template_name
                    .strip_prefix(&format!("{}/", SKELETON_DIR))
                    .unwrap_or(&template_name);
                let target = relative.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(relative).to_string();
                files.push(SkeletonFile { target, template_name, template: content });
            }
            DirEntry::Dir(subdir) => collect_files(subdir, files),
        }
    }
}
