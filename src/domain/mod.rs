pub mod action;
pub mod config;
pub mod conventions;
pub mod error;
pub mod messages;
pub mod meta;
pub mod readme;
pub mod role_directory;
pub mod severity;
pub mod stats;
pub mod yaml;

pub use action::{Action, dispatch};
pub use config::UserConfig;
pub use conventions::{AnsibleFolder, Conventions};
pub use error::AppError;
pub use messages::{MessageCatalog, MessageKey, Substitutions};
pub use role_directory::RoleDirectory;
pub use severity::{Color, Severity};
pub use stats::{GalaxySummary, RoleFailure, RoleStats, ScanReport, ScanTotals};
