use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::error::AppError;

/// Outcome severity of a per-role step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Skipped,
    Changed,
    Failed,
}

/// Terminal color attached to a severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Cyan,
    Yellow,
    Red,
}

impl Severity {
    pub const ALL: [Severity; 4] =
        [Severity::Ok, Severity::Skipped, Severity::Changed, Severity::Failed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Ok => "ok",
            Severity::Skipped => "skipped",
            Severity::Changed => "changed",
            Severity::Failed => "failed",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str() == s)
            .ok_or_else(|| AppError::UnknownSeverity(s.to_string()))
    }
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Green => "green",
            Color::Cyan => "cyan",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

impl From<Color> for colored::Color {
    fn from(color: Color) -> Self {
        match color {
            Color::Green => colored::Color::Green,
            Color::Cyan => colored::Color::Cyan,
            Color::Yellow => colored::Color::Yellow,
            Color::Red => colored::Color::Red,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_severities() {
        assert_eq!("changed".parse::<Severity>().unwrap(), Severity::Changed);
        assert_eq!("failed".parse::<Severity>().unwrap(), Severity::Failed);
    }

    #[test]
    fn rejects_unknown_severity() {
        let err = "warning".parse::<Severity>().unwrap_err();
        assert!(matches!(err, AppError::UnknownSeverity(name) if name == "warning"));
    }
}
