use std::collections::BTreeMap;

use config::{Config, ConfigError};
use serde::Deserialize;

/// Opaque column-family descriptor.
///
/// The reset procedure never interprets a family beyond its name; it is
/// handed verbatim to [`TableAdmin::create_table`](crate::TableAdmin) so the
/// backing store decides what a family means for its storage layout.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ColumnFamily(String);

impl ColumnFamily {
    pub fn new(name: impl Into<String>) -> ColumnFamily {
        ColumnFamily(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Static mapping from table name to the ordered column families that table
/// must be recreated with.
///
/// This is the source of truth for what "recreate" means: a table that is
/// live in the store but absent from the registry cannot be recreated after
/// it has been dropped.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SchemaRegistry {
    tables: BTreeMap<String, Vec<ColumnFamily>>,
}

impl SchemaRegistry {
    pub fn new() -> SchemaRegistry {
        SchemaRegistry::default()
    }

    /// Loads the registry from an already-built [`Config`], e.g. one read
    /// from `schema.toml`.
    pub fn from_config(config: Config) -> Result<SchemaRegistry, ConfigError> {
        config.try_deserialize()
    }

    /// Builder-style insertion, mainly for programmatic registries.
    pub fn with_table(mut self, name: impl Into<String>, families: Vec<ColumnFamily>) -> SchemaRegistry {
        self.tables.insert(name.into(), families);
        self
    }

    /// The column families `name` must be recreated with, in declaration
    /// order.
    pub fn get(&self, name: &str) -> Option<&[ColumnFamily]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn tables(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Returns the subset of `names` that have no registry entry. Used for
    /// the optional preflight check before any table is dropped.
    pub fn unknown_tables<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        names.into_iter()
            .filter(|name| !self.contains(name))
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use config::{Config, File, FileFormat};

    use super::*;

    const SCHEMA_TOML: &str = r#"
        [tables]
        patients = ["personal", "clinical"]
        images = ["pixels"]
    "#;

    fn toml_registry(source: &str) -> SchemaRegistry {
        let config = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .expect("test toml should build");
        SchemaRegistry::from_config(config).expect("test toml should deserialize")
    }

    #[test]
    fn parses_registry_from_toml() {
        let registry = toml_registry(SCHEMA_TOML);

        assert!(registry.contains("patients"));
        assert!(registry.contains("images"));
        assert!(!registry.contains("orphan"));
    }

    #[test]
    fn preserves_family_order() {
        let registry = toml_registry(SCHEMA_TOML);

        let families: Vec<&str> = registry.get("patients")
            .expect("patients should be registered")
            .iter()
            .map(ColumnFamily::name)
            .collect();
        assert_eq!(families, vec!["personal", "clinical"]);
    }

    #[test]
    fn unknown_tables_reports_unregistered_names() {
        let registry = toml_registry(SCHEMA_TOML);

        let unknown = registry.unknown_tables(vec!["patients", "orphan", "images"]);
        assert_eq!(unknown, vec!["orphan".to_owned()]);
    }

    #[test]
    fn builder_insertion_matches_config_loading() {
        let built = SchemaRegistry::new()
            .with_table("patients", vec![ColumnFamily::new("personal"), ColumnFamily::new("clinical")])
            .with_table("images", vec![ColumnFamily::new("pixels")]);
        let parsed = toml_registry(SCHEMA_TOML);

        assert_eq!(built.get("patients"), parsed.get("patients"));
        assert_eq!(built.get("images"), parsed.get("images"));
    }
}
