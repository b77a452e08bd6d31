use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};
use lancedb::{Connection, connect};
use log::info;

use crate::admin::{AdminError, TableAdmin};
use crate::registry::ColumnFamily;

/// LanceDB-backed administrative connector.
///
/// A column family maps onto a non-key `Utf8` column in the table's Arrow
/// schema, declared in the same order the registry lists the families.
pub struct LanceDbAdmin {
    db: Connection,
    uri: String,
}

impl LanceDbAdmin {
    /// Opens a connection to the store at `uri` (a local data directory or a
    /// remote `db://host:port` endpoint).
    pub async fn connect(uri: &str) -> Result<LanceDbAdmin, AdminError> {
        let db = connect(uri)
            .execute().await
            .map_err(|e| AdminError::StoreUnavailable { operation: "opening connection", source: e.into() })?;

        info!("Connected to store at {}", uri);

        Ok(LanceDbAdmin { db, uri: uri.to_owned() })
    }
}

impl TableAdmin for LanceDbAdmin {
    fn endpoint(&self) -> &str {
        &self.uri
    }

    async fn list_tables(&self) -> Result<Vec<String>, AdminError> {
        self.db.table_names()
            .execute().await
            .map_err(|e| AdminError::StoreUnavailable { operation: "listing tables", source: e.into() })
    }

    async fn drop_table(&self, name: &str) -> Result<(), AdminError> {
        self.db.drop_table(name, &[]).await
            .map_err(|e| AdminError::StoreUnavailable { operation: "dropping table", source: e.into() })
    }

    async fn create_table(&self, name: &str, families: &[ColumnFamily]) -> Result<(), AdminError> {
        let schema = Arc::new(build_family_schema(families));

        self.db.create_empty_table(name, schema)
            .execute().await
            .map_err(|e| AdminError::StoreUnavailable { operation: "creating table", source: e.into() })?;

        Ok(())
    }
}

/// Builds the Arrow schema for a freshly recreated table. Field order must
/// follow the registry's family order.
fn build_family_schema(families: &[ColumnFamily]) -> Schema {
    Schema::new(families.iter()
        .map(|family| Field::new(family.name(), DataType::Utf8, true))
        .collect::<Vec<Field>>())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_schema_preserves_declaration_order() {
        let families = vec![
            ColumnFamily::new("personal"),
            ColumnFamily::new("clinical"),
        ];

        let schema = build_family_schema(&families);

        let names: Vec<&str> = schema.fields().iter()
            .map(|field| field.name().as_str())
            .collect();
        assert_eq!(names, vec!["personal", "clinical"]);
    }

    #[test]
    fn family_schema_for_no_families_is_empty() {
        let schema = build_family_schema(&[]);
        assert!(schema.fields().is_empty());
    }
}
