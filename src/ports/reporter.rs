use crate::domain::Severity;

/// Port for presenting results to the user.
pub trait Reporter {
    /// A per-role result line.
    fn role(&self, severity: Severity, role: &str, detail: &str);

    /// A standalone message, already rendered through the catalog.
    fn message(&self, severity: Severity, text: &str);

    /// Raw output such as exported documents.
    fn output(&self, text: &str);
}
