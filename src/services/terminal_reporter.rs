use colored::Colorize;

use crate::domain::{MessageCatalog, Severity};
use crate::ports::Reporter;

/// Writes colored result lines to the terminal.
///
/// Failures go to stderr, everything else to stdout.
#[derive(Debug, Clone)]
pub struct TerminalReporter {
    catalog: MessageCatalog,
}

impl TerminalReporter {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }

    fn paint(&self, severity: Severity, text: &str) -> String {
        let color: colored::Color = self.catalog.color_for(severity).into();
        text.color(color).to_string()
    }
}

impl Reporter for TerminalReporter {
    fn role(&self, severity: Severity, role: &str, detail: &str) {
        let label = self.paint(severity, &format!("{:<8}", severity.as_str()));
        let line = if detail.is_empty() {
            format!("{} {}", label, role.bold())
        } else {
            format!("{} {:<24} {}", label, role.bold(), detail)
        };
        if severity == Severity::Failed {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }

    fn message(&self, severity: Severity, text: &str) {
        let painted = self.paint(severity, text);
        if severity == Severity::Failed {
            eprintln!("{}", painted);
        } else {
            println!("{}", painted);
        }
    }

    fn output(&self, text: &str) {
        print!("{}", text);
        if !text.ends_with('\n') {
            println!();
        }
    }
}
