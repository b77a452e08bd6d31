use log::info;

use crate::admin::{AdminError, TableAdmin};
use crate::confirm::Confirm;
use crate::registry::SchemaRegistry;

#[derive(thiserror::Error, Debug)]
pub enum ResetError {
    /// The store rejected or dropped an administrative call. Fatal; tables
    /// already processed stay in whatever state the last call left them.
    #[error("Store operation failed")]
    Store(#[from] AdminError),
    /// A live table has no registry entry, so it cannot be recreated. When
    /// hit mid-run the table has already been dropped.
    #[error("Table \"{table}\" has no schema registry entry and cannot be recreated")]
    MissingSchema { table: String },
    #[error("Error reading confirmation input")]
    Input(#[source] std::io::Error),
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ResetOptions {
    /// Verify that every live table has a registry entry before anything is
    /// dropped. Off by default: the store's live table list is normally
    /// trusted to match the registry, and the mismatch only surfaces after
    /// the offending table has been dropped.
    pub preflight_registry: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableOutcome {
    /// Dropped and recreated from the registry.
    Reset,
    /// Operator declined; the table was not touched.
    Skipped,
}

/// What a completed (or declined) run did, per table.
#[derive(Debug, Default)]
pub struct ResetReport {
    /// The operator declined the global confirmation; no table was touched.
    pub declined: bool,
    pub outcomes: Vec<(String, TableOutcome)>,
}

impl ResetReport {
    pub fn reset_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == TableOutcome::Reset).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == TableOutcome::Skipped).count()
    }

    pub fn outcome_for(&self, table: &str) -> Option<TableOutcome> {
        self.outcomes.iter()
            .find(|(name, _)| name == table)
            .map(|(_, outcome)| *outcome)
    }
}

/// Confirmable drop-and-recreate over every table the store currently holds.
///
/// All collaborators are injected: the admin connection, the registry that
/// defines what "recreate" means, and the confirmation capability. The
/// procedure owns the connection for its whole lifetime and runs strictly
/// sequentially.
pub struct ResetProcedure<A: TableAdmin> {
    admin: A,
    registry: SchemaRegistry,
    options: ResetOptions,
}

impl<A: TableAdmin> ResetProcedure<A> {
    pub fn new(admin: A, registry: SchemaRegistry) -> ResetProcedure<A> {
        Self::with_options(admin, registry, ResetOptions::default())
    }

    pub fn with_options(admin: A, registry: SchemaRegistry, options: ResetOptions) -> ResetProcedure<A> {
        ResetProcedure { admin, registry, options }
    }

    /// Runs the reset: list live tables, confirm once globally, then confirm
    /// and drop+recreate table by table. Any store failure aborts the run
    /// immediately with no rollback.
    pub async fn run<C: Confirm>(&self, confirm: &mut C) -> Result<ResetReport, ResetError> {
        let tables = self.admin.list_tables().await?;

        let mut report = ResetReport::default();

        let global_prompt = format!(
            "Are you sure you want to remove data from \"{}\"?",
            self.admin.endpoint(),
        );
        if !confirm.confirm(&global_prompt).map_err(ResetError::Input)? {
            report.declined = true;
            return Ok(report);
        }

        if self.options.preflight_registry {
            if let Some(table) = self.registry.unknown_tables(tables.iter().map(String::as_str)).into_iter().next() {
                return Err(ResetError::MissingSchema { table });
            }
        }

        for table in tables {
            let prompt = format!("Do you want to remove data from \"{table}\" table?");
            if !confirm.confirm(&prompt).map_err(ResetError::Input)? {
                report.outcomes.push((table, TableOutcome::Skipped));
                continue;
            }

            info!("Clearing data from \"{}\" table.", table);
            self.admin.drop_table(&table).await?;

            // Looked up only after the drop: a live table missing from the
            // registry halts the run with the table already gone, unless the
            // preflight option caught it up front.
            let families = self.registry.get(&table)
                .ok_or_else(|| ResetError::MissingSchema { table: table.clone() })?;
            self.admin.create_table(&table, families).await?;

            report.outcomes.push((table, TableOutcome::Reset));
        }

        Ok(report)
    }
}
