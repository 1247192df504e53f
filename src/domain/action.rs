use std::fmt;
use std::str::FromStr;

use super::error::AppError;
use super::messages::MessageKey;

/// The closed set of operations the CLI can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Scan,
    Rebuild,
    Run,
    Init,
    Export,
    Dump,
}

impl Action {
    pub const ALL: [Action; 6] =
        [Action::Scan, Action::Rebuild, Action::Run, Action::Init, Action::Export, Action::Dump];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Scan => "scan",
            Action::Rebuild => "rebuild",
            Action::Run => "run",
            Action::Init => "init",
            Action::Export => "export",
            Action::Dump => "dump",
        }
    }

    /// Catalog messages describing this action, in display order.
    pub fn help_keys(&self) -> &'static [MessageKey] {
        match self {
            Action::Scan => &[MessageKey::HelpScan],
            Action::Rebuild => &[MessageKey::HelpGenmeta, MessageKey::HelpGendoc],
            Action::Run => &[MessageKey::HelpRun],
            Action::Init => &[MessageKey::HelpInit],
            Action::Export => &[MessageKey::HelpReqs],
            Action::Dump => &[MessageKey::HelpDump],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        dispatch(s)
    }
}

/// Validate an action name against the fixed action set.
pub fn dispatch(name: &str) -> Result<Action, AppError> {
    Action::ALL
        .into_iter()
        .find(|action| action.as_str() == name)
        .ok_or_else(|| AppError::UnknownAction(name.to_string()))
}
