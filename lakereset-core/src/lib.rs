pub mod admin;
pub mod app_config;
pub mod confirm;
pub mod registry;
pub mod reset;

// Re-export the types most callers need
pub use admin::{AdminError, TableAdmin};
pub use confirm::{Confirm, ScriptedConfirm, StdinConfirm};
pub use registry::{ColumnFamily, SchemaRegistry};
pub use reset::{ResetError, ResetOptions, ResetProcedure, ResetReport, TableOutcome};
