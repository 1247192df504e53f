//! ansigenome: scan, document and scaffold Ansible roles.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{ActionOutcome, ActionRequest, execute, execute_with};
pub use domain::{Action, AppError, MessageCatalog, dispatch};
