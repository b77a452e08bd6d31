use std::future::Future;

use crate::registry::ColumnFamily;

/// Errors that can occur during administrative table operations.
#[derive(thiserror::Error, Debug)]
pub enum AdminError {
    #[error("Store unavailable while {operation}")]
    StoreUnavailable { operation: &'static str, #[source] source: anyhow::Error },
}

/// Administrative seam over a table store.
///
/// The reset procedure only ever needs to enumerate tables and drop/create
/// them whole; everything row-level stays behind the store's own client.
/// Implementations hold a single process-scoped connection, opened once and
/// closed implicitly at process exit. No retries, no timeouts.
pub trait TableAdmin {
    /// Human-readable endpoint this connector is attached to, used when
    /// prompting the operator.
    fn endpoint(&self) -> &str;

    /// All tables currently present in the store. Side-effect free.
    fn list_tables(&self) -> impl Future<Output = Result<Vec<String>, AdminError>> + Send;

    /// Irreversibly deletes the table and all of its data.
    fn drop_table(&self, name: &str) -> impl Future<Output = Result<(), AdminError>> + Send;

    /// Creates an empty table with the given column families, in order.
    fn create_table(&self, name: &str, families: &[ColumnFamily])
        -> impl Future<Output = Result<(), AdminError>> + Send;
}

pub mod lancedb;
