//! User-facing message catalog.
//!
//! Templates may contain `%name` placeholders (ASCII lowercase letters, digits
//! and underscores). The catalog is an explicitly constructed value, never a
//! global, so tests can build reduced catalogs.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::action::Action;
use super::error::AppError;
use super::severity::{Color, Severity};

/// Keys of every message the tool can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageKey {
    DefaultRolesPathMissing,
    EmptyRolesPath,
    PathMissing,
    PathExists,
    PathUnmakable,
    UrlUnreachable,
    YamlError,
    TemplateError,
    RunSuccess,
    RunError,
    DumpSuccess,
    ScanSummary,
    RebuildSuccess,
    InitSuccess,
    ExportSuccess,
    UnknownAction,
    MissingArgument,
    ConfigInvalid,
    IoError,
    InternalError,
    HelpScan,
    HelpGendoc,
    HelpGenmeta,
    HelpReqs,
    HelpInit,
    HelpRun,
    HelpDump,
}

impl MessageKey {
    pub const ALL: [MessageKey; 27] = [
        MessageKey::DefaultRolesPathMissing,
        MessageKey::EmptyRolesPath,
        MessageKey::PathMissing,
        MessageKey::PathExists,
        MessageKey::PathUnmakable,
        MessageKey::UrlUnreachable,
        MessageKey::YamlError,
        MessageKey::TemplateError,
        MessageKey::RunSuccess,
        MessageKey::RunError,
        MessageKey::DumpSuccess,
        MessageKey::ScanSummary,
        MessageKey::RebuildSuccess,
        MessageKey::InitSuccess,
        MessageKey::ExportSuccess,
        MessageKey::UnknownAction,
        MessageKey::MissingArgument,
        MessageKey::ConfigInvalid,
        MessageKey::IoError,
        MessageKey::InternalError,
        MessageKey::HelpScan,
        MessageKey::HelpGendoc,
        MessageKey::HelpGenmeta,
        MessageKey::HelpReqs,
        MessageKey::HelpInit,
        MessageKey::HelpRun,
        MessageKey::HelpDump,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKey::DefaultRolesPathMissing => "default_roles_path_missing",
            MessageKey::EmptyRolesPath => "empty_roles_path",
            MessageKey::PathMissing => "path_missing",
            MessageKey::PathExists => "path_exists",
            MessageKey::PathUnmakable => "path_unmakable",
            MessageKey::UrlUnreachable => "url_unreachable",
            MessageKey::YamlError => "yaml_error",
            MessageKey::TemplateError => "template_error",
            MessageKey::RunSuccess => "run_success",
            MessageKey::RunError => "run_error",
            MessageKey::DumpSuccess => "dump_success",
            MessageKey::ScanSummary => "scan_summary",
            MessageKey::RebuildSuccess => "rebuild_success",
            MessageKey::InitSuccess => "init_success",
            MessageKey::ExportSuccess => "export_success",
            MessageKey::UnknownAction => "unknown_action",
            MessageKey::MissingArgument => "missing_argument",
            MessageKey::ConfigInvalid => "config_invalid",
            MessageKey::IoError => "io_error",
            MessageKey::InternalError => "internal_error",
            MessageKey::HelpScan => "help_scan",
            MessageKey::HelpGendoc => "help_gendoc",
            MessageKey::HelpGenmeta => "help_genmeta",
            MessageKey::HelpReqs => "help_reqs",
            MessageKey::HelpInit => "help_init",
            MessageKey::HelpRun => "help_run",
            MessageKey::HelpDump => "help_dump",
        }
    }

    fn standard_template(&self) -> &'static str {
        match self {
            MessageKey::DefaultRolesPathMissing => {
                "By default ansigenome will look for roles in 'playbooks/roles', that path \
                 was not found so you must supply a path to your roles"
            }
            MessageKey::EmptyRolesPath => "No roles were found at this path:",
            MessageKey::PathMissing => "The following path could not be found:",
            MessageKey::PathExists => "The following path already exists:",
            MessageKey::PathUnmakable => {
                "The following error occurred when trying to create this path:"
            }
            MessageKey::UrlUnreachable => "The following url was unreachable:",
            MessageKey::YamlError => "%file contains 1 or more syntax errors:",
            MessageKey::TemplateError => "%file contains 1 or more syntax errors:",
            MessageKey::RunSuccess => "%role_count roles were modified with this shell command:",
            MessageKey::RunError => "There was an error running this shell command:",
            MessageKey::DumpSuccess => "The role stats were dumped as json to:",
            MessageKey::ScanSummary => {
                "%role_count roles scanned: %defaults defaults, %facts facts, %tasks tasks, \
                 %files files, %lines lines"
            }
            MessageKey::RebuildSuccess => "%role_count roles were rebuilt at:",
            MessageKey::InitSuccess => "A new role was created at:",
            MessageKey::ExportSuccess => "The roles were exported to:",
            MessageKey::UnknownAction => "%action is not a valid action, choose one of: %actions",
            MessageKey::MissingArgument => "The %action action requires %argument",
            MessageKey::ConfigInvalid => "%file could not be read as configuration:",
            MessageKey::IoError => "The following filesystem error occurred:",
            MessageKey::InternalError => "An internal error occurred:",
            MessageKey::HelpScan => {
                "scan a path containing Ansible roles and report back useful stats"
            }
            MessageKey::HelpGendoc => "generate a README from the meta file for each role",
            MessageKey::HelpGenmeta => "augment existing meta files to be compatible with Ansigenome",
            MessageKey::HelpReqs => {
                "export a path of roles to a file to be consumed by ansible-galaxy install -r"
            }
            MessageKey::HelpInit => "init new roles with a custom meta file and tests",
            MessageKey::HelpRun => "run shell commands inside of each role's directory",
            MessageKey::HelpDump => {
                "dump a json file containing every stat it gathers from the scan path"
            }
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| AppError::UnknownMessageKey(s.to_string()))
    }
}

/// Named values substituted into message placeholders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<String, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Immutable table of message templates and severity colors.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    templates: BTreeMap<MessageKey, String>,
}

impl MessageCatalog {
    /// The catalog shipped with the tool.
    pub fn standard() -> Self {
        Self::from_entries(MessageKey::ALL.into_iter().map(|key| (key, key.standard_template())))
    }

    /// Build a catalog from explicit entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MessageKey, S)>,
        S: Into<String>,
    {
        let templates = entries.into_iter().map(|(key, template)| (key, template.into())).collect();
        Self { templates }
    }

    pub fn template(&self, key: MessageKey) -> Result<&str, AppError> {
        self.templates
            .get(&key)
            .map(String::as_str)
            .ok_or_else(|| AppError::UnknownMessageKey(key.as_str().to_string()))
    }

    /// Placeholder names declared by a message, in order of first appearance.
    pub fn placeholders(&self, key: MessageKey) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for segment in segments(self.template(key)?) {
            if let Segment::Placeholder(name) = segment {
                if !names.iter().any(|existing| existing == name) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    /// Substitute known placeholders; unresolved ones stay verbatim.
    pub fn render(&self, key: MessageKey, subs: &Substitutions) -> Result<String, AppError> {
        let template = self.template(key)?;
        let mut rendered = String::with_capacity(template.len());
        for segment in segments(template) {
            match segment {
                Segment::Text(text) => rendered.push_str(text),
                Segment::Placeholder(name) => match subs.get(name) {
                    Some(value) => rendered.push_str(value),
                    None => {
                        rendered.push('%');
                        rendered.push_str(name);
                    }
                },
            }
        }
        Ok(rendered)
    }

    /// Like [`render`](Self::render) but every declared placeholder must be supplied.
    pub fn render_strict(&self, key: MessageKey, subs: &Substitutions) -> Result<String, AppError> {
        for name in self.placeholders(key)? {
            if subs.get(&name).is_none() {
                return Err(AppError::UnresolvedPlaceholder {
                    key: key.as_str().to_string(),
                    placeholder: name,
                });
            }
        }
        self.render(key, subs)
    }

    /// Render by string key.
    pub fn render_key(&self, key: &str, subs: &Substitutions) -> Result<String, AppError> {
        self.render(key.parse()?, subs)
    }

    /// Render a message followed by a detail such as a path or command.
    pub fn line(
        &self,
        key: MessageKey,
        subs: &Substitutions,
        detail: impl fmt::Display,
    ) -> Result<String, AppError> {
        let message = self.render(key, subs)?;
        let detail = detail.to_string();
        if detail.is_empty() { Ok(message) } else { Ok(format!("{} {}", message, detail)) }
    }

    pub fn color_for(&self, severity: Severity) -> Color {
        match severity {
            Severity::Ok => Color::Green,
            Severity::Skipped => Color::Cyan,
            Severity::Changed => Color::Yellow,
            Severity::Failed => Color::Red,
        }
    }

    /// Color lookup by severity name.
    pub fn color_for_name(&self, severity: &str) -> Result<Color, AppError> {
        Ok(self.color_for(severity.parse()?))
    }

    /// Help text for an action, joined from its help messages.
    pub fn action_help(&self, action: Action) -> Result<String, AppError> {
        let parts = action
            .help_keys()
            .iter()
            .map(|key| self.render(*key, &Substitutions::new()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(parts.join(", then "))
    }

    /// Render any error as the user-facing text printed by the CLI.
    pub fn describe(&self, err: &AppError) -> String {
        self.try_describe(err).unwrap_or_else(|_| err.to_string())
    }

    fn try_describe(&self, err: &AppError) -> Result<String, AppError> {
        let none = Substitutions::new();
        match err {
            AppError::PathMissing { path } => {
                self.line(MessageKey::PathMissing, &none, path.display())
            }
            AppError::PathMissingDefault { .. } => {
                self.render(MessageKey::DefaultRolesPathMissing, &none)
            }
            AppError::PathExists { path } => {
                self.line(MessageKey::PathExists, &none, path.display())
            }
            AppError::PathUnmakable { path, source } => self.line(
                MessageKey::PathUnmakable,
                &none,
                format!("{}\n{}", path.display(), source),
            ),
            AppError::UrlUnreachable { url, reason } => {
                self.line(MessageKey::UrlUnreachable, &none, format!("{}\n{}", url, reason))
            }
            AppError::YamlSyntax { file, reason } => self.line(
                MessageKey::YamlError,
                &Substitutions::new().with("file", file.display()),
                format!("\n{}", reason),
            ),
            AppError::TemplateSyntax { file, reason } => self.line(
                MessageKey::TemplateError,
                &Substitutions::new().with("file", file),
                format!("\n{}", reason),
            ),
            AppError::ShellCommand { command, role, details } => self.line(
                MessageKey::RunError,
                &none,
                format!("{}\n{}: {}", command, role, details),
            ),
            AppError::UnknownAction(name) => {
                let actions =
                    Action::ALL.iter().map(Action::as_str).collect::<Vec<_>>().join(", ");
                self.render(
                    MessageKey::UnknownAction,
                    &Substitutions::new().with("action", name).with("actions", actions),
                )
            }
            AppError::MissingArgument { action, argument } => self.render(
                MessageKey::MissingArgument,
                &Substitutions::new().with("action", action).with("argument", argument),
            ),
            AppError::Configuration { file, reason } => self.line(
                MessageKey::ConfigInvalid,
                &Substitutions::new().with("file", file.display()),
                format!("\n{}", reason),
            ),
            AppError::Io(source) => self.line(MessageKey::IoError, &none, source),
            AppError::Json(_)
            | AppError::UnknownMessageKey(_)
            | AppError::UnknownSeverity(_)
            | AppError::UnresolvedPlaceholder { .. } => {
                self.line(MessageKey::InternalError, &none, err)
            }
        }
    }
}

impl Default for MessageCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

fn is_placeholder_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'
}

fn segments(template: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut text_start = 0;
    let mut rest = template;
    let mut offset = 0;

    while let Some(pos) = rest.find('%') {
        let after = &rest[pos + 1..];
        let name_len = after.find(|c: char| !is_placeholder_char(c)).unwrap_or(after.len());
        let marker = offset + pos;
        if name_len > 0 {
            if marker > text_start {
                segments.push(Segment::Text(&template[text_start..marker]));
            }
            let name_start = marker + 1;
            segments.push(Segment::Placeholder(&template[name_start..name_start + name_len]));
            text_start = name_start + name_len;
        }
        let consumed = pos + 1 + name_len;
        offset += consumed;
        rest = &rest[consumed..];
    }

    if text_start < template.len() {
        segments.push(Segment::Text(&template[text_start..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dump_success_renders_unchanged() {
        let catalog = MessageCatalog::standard();
        let rendered = catalog.render(MessageKey::DumpSuccess, &Substitutions::new()).unwrap();
        assert_eq!(rendered, "The role stats were dumped as json to:");
    }

    #[test]
    fn role_count_is_substituted() {
        let catalog = MessageCatalog::standard();
        let subs = Substitutions::new().with("role_count", 5);
        let rendered = catalog.render(MessageKey::RunSuccess, &subs).unwrap();
        assert_eq!(rendered, "5 roles were modified with this shell command:");
    }

    #[test]
    fn unresolved_placeholders_stay_verbatim() {
        let catalog = MessageCatalog::standard();
        let rendered = catalog.render(MessageKey::YamlError, &Substitutions::new()).unwrap();
        assert_eq!(rendered, "%file contains 1 or more syntax errors:");
    }

    #[test]
    fn strict_render_reports_missing_values() {
        let catalog = MessageCatalog::standard();
        let err = catalog.render_strict(MessageKey::YamlError, &Substitutions::new()).unwrap_err();
        assert!(matches!(
            err,
            AppError::UnresolvedPlaceholder { ref key, ref placeholder }
                if key == "yaml_error" && placeholder == "file"
        ));
    }

    #[test]
    fn placeholders_are_listed_once_in_order() {
        let catalog = MessageCatalog::standard();
        assert_eq!(
            catalog.placeholders(MessageKey::ScanSummary).unwrap(),
            vec!["role_count", "defaults", "facts", "tasks", "files", "lines"]
        );
        assert!(catalog.placeholders(MessageKey::DumpSuccess).unwrap().is_empty());
    }

    #[test]
    fn percent_without_name_is_plain_text() {
        let catalog = MessageCatalog::from_entries([(MessageKey::InternalError, "100% done %x")]);
        let rendered = catalog
            .render(MessageKey::InternalError, &Substitutions::new().with("x", "now"))
            .unwrap();
        assert_eq!(rendered, "100% done now");
    }

    #[test]
    fn missing_key_is_an_internal_error() {
        let catalog = MessageCatalog::from_entries([(MessageKey::DumpSuccess, "dumped")]);
        let err = catalog.render(MessageKey::RunSuccess, &Substitutions::new()).unwrap_err();
        assert!(matches!(err, AppError::UnknownMessageKey(ref key) if key == "run_success"));
        assert!(err.is_internal());
    }

    #[test]
    fn render_key_rejects_unknown_strings() {
        let catalog = MessageCatalog::standard();
        let err = catalog.render_key("nope", &Substitutions::new()).unwrap_err();
        assert!(matches!(err, AppError::UnknownMessageKey(ref key) if key == "nope"));
        assert_eq!(
            catalog.render_key("path_exists", &Substitutions::new()).unwrap(),
            "The following path already exists:"
        );
    }

    #[test]
    fn severity_colors_are_fixed() {
        let catalog = MessageCatalog::standard();
        assert_eq!(catalog.color_for(Severity::Ok), Color::Green);
        assert_eq!(catalog.color_for(Severity::Skipped), Color::Cyan);
        assert_eq!(catalog.color_for(Severity::Changed), Color::Yellow);
        assert_eq!(catalog.color_for(Severity::Failed), Color::Red);
        assert!(matches!(catalog.color_for_name("debug"), Err(AppError::UnknownSeverity(_))));
    }

    #[test]
    fn default_path_error_explains_convention() {
        let catalog = MessageCatalog::standard();
        let text =
            catalog.describe(&AppError::PathMissingDefault { path: "playbooks/roles".into() });
        assert!(text.contains("look for roles in 'playbooks/roles'"));
    }

    #[test]
    fn yaml_error_names_the_file() {
        let catalog = MessageCatalog::standard();
        let text = catalog.describe(&AppError::yaml("web/meta/main.yml", "did not find key"));
        assert!(text.starts_with("web/meta/main.yml contains 1 or more syntax errors:"));
        assert!(text.ends_with("did not find key"));
    }

    #[test]
    fn rebuild_help_joins_both_messages() {
        let catalog = MessageCatalog::standard();
        let help = catalog.action_help(Action::Rebuild).unwrap();
        assert!(help.starts_with("augment existing meta files"));
        assert!(help.contains("generate a README"));
    }
}
