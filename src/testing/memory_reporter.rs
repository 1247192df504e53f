use std::cell::RefCell;

use crate::domain::Severity;
use crate::ports::Reporter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedLine {
    Role { severity: Severity, role: String, detail: String },
    Message { severity: Severity, text: String },
    Output(String),
}

/// Reporter collecting everything in memory.
#[derive(Default)]
pub struct MemoryReporter {
    lines: RefCell<Vec<ReportedLine>>,
}

impl MemoryReporter {
    pub fn lines(&self) -> Vec<ReportedLine> {
        self.lines.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                ReportedLine::Message { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn roles_with(&self, wanted: Severity) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                ReportedLine::Role { severity, role, .. } if *severity == wanted => {
                    Some(role.clone())
                }
                _ => None,
            })
            .collect()
    }

    pub fn output(&self) -> String {
        self.lines
            .borrow()
            .iter()
            .filter_map(|line| match line {
                ReportedLine::Output(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for MemoryReporter {
    fn role(&self, severity: Severity, role: &str, detail: &str) {
        self.lines.borrow_mut().push(ReportedLine::Role {
            severity,
            role: role.to_string(),
            detail: detail.to_string(),
        });
    }

    fn message(&self, severity: Severity, text: &str) {
        self.lines.borrow_mut().push(ReportedLine::Message { severity, text: text.to_string() });
    }

    fn output(&self, text: &str) {
        self.lines.borrow_mut().push(ReportedLine::Output(text.to_string()));
    }
}
