use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::domain::AppError;

/// Jinja template renderer backed by Minijinja.
pub struct TemplateRenderer {
    undefined: UndefinedBehavior,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        Self { undefined: UndefinedBehavior::Strict }
    }

    /// Render `source` registered under `name`, which also names it in errors.
    pub fn render<C: Serialize>(
        &self,
        name: &str,
        source: &str,
        context: &C,
    ) -> Result<String, AppError> {
        let mut env = self.environment();
        env.add_template(name, source).map_err(|err| AppError::template(name, err))?;
        let template = env.get_template(name).map_err(|err| AppError::template(name, err))?;
        template.render(context).map_err(|err| AppError::template(name, err))
    }

    fn environment<'source>(&self) -> Environment<'source> {
        let mut env = Environment::new();
        env.set_undefined_behavior(self.undefined);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.add_filter("quoted", quoted);
        env
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Double-quoted YAML scalar. JSON string syntax is a subset of YAML.
fn quoted(value: String) -> String {
    serde_json::to_string(&value).unwrap_or_else(|_| format!("\"{}\"", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_context_values() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render("t.j2", "hello {{ name }}\n", &json!({"name": "web"})).unwrap();
        assert_eq!(out, "hello web\n");
    }

    #[test]
    fn quoted_filter_escapes_yaml() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("t.j2", "author: {{ name | quoted }}", &json!({"name": "O'Neil: \"ops\""}))
            .unwrap();
        assert_eq!(out, r#"author: "O'Neil: \"ops\"""#);
    }

    #[test]
    fn syntax_errors_name_the_template() {
        let renderer = TemplateRenderer::new();
        let err = renderer.render("README.md.j2", "{% if %}", &json!({})).unwrap_err();
        match err {
            AppError::TemplateSyntax { file, .. } => assert_eq!(file, "README.md.j2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn undefined_values_are_errors() {
        let renderer = TemplateRenderer::new();
        let err = renderer.render("t.j2", "{{ missing }}", &json!({})).unwrap_err();
        assert!(matches!(err, AppError::TemplateSyntax { .. }));
    }

    #[test]
    fn render_errors_carry_the_template_name_once() {
        let renderer = TemplateRenderer::new();
        let err = renderer.render("custom.j2", "# {{ role.nope }}\n", &json!({"role": {}})).unwrap_err();
        match err {
            AppError::TemplateSyntax { reason, .. } => {
                assert!(reason.contains("custom.j2:1"), "{reason}");
                assert!(!reason.contains("<string>"), "{reason}");
                assert!(!reason.contains("(line"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn yaml_templates_are_not_escaped() {
        let renderer = TemplateRenderer::new();
        let out = renderer
            .render("meta/main.yml.j2", "author: {{ name }}\n", &json!({"name": "Ada <ops>"}))
            .unwrap();
        assert_eq!(out, "author: Ada <ops>\n");
    }
}
