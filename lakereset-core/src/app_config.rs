use std::{fs, sync::LazyLock};

use camino::{Utf8Path, Utf8PathBuf};
use config::{Config, ConfigError, File};

use crate::registry::SchemaRegistry;

/// Gets the configured store URI.
///
/// This function reads from the store configuration file and replaces the
/// `%%AppDataDirectory%%` placeholder with the actual application data
/// directory path. The URI is either a local data directory or a remote
/// `db://host:port` endpoint; it is handed to the admin connector verbatim.
///
/// # Panics
///
/// Panics if the store configuration cannot be loaded or the uri setting
/// is missing.
pub fn get_store_uri() -> String {
    let store_config = get_store_config().expect("Failed to load store config");

    store_config.get_string("uri")
        .expect("Failed to get store uri from store config")
        .replace("%%AppDataDirectory%%", get_app_folder().as_str())
}

/// Loads the schema registry from the schema configuration file.
///
/// The registry is an immutable configuration value loaded once at startup;
/// callers that need a different registry (tests, embedding applications)
/// construct a [`SchemaRegistry`] directly instead.
///
/// # Panics
///
/// Panics if the schema configuration cannot be loaded or does not parse
/// into a registry.
pub fn get_schema_registry() -> SchemaRegistry {
    let schema_config = get_schema_config().expect("Failed to load schema config");

    SchemaRegistry::from_config(schema_config)
        .expect("Failed to parse schema registry from schema config")
}

fn get_store_config() -> Result<Config, ConfigError> {
    let config_file_path = get_app_folder().join("store.toml");
    if !fs::exists(&config_file_path).expect("Error while checking if store config file exists") {
        // If the store.toml file does not exist, create it with default values
        fs::write(&config_file_path, DEFAULT_STORE_CONFIG_BYTES).expect("Failed to create default store.toml");
    }

    Config::builder()
        .add_source(File::with_name(config_file_path.as_str()))
        .build()
}

fn get_schema_config() -> Result<Config, ConfigError> {
    let config_file_path = get_app_folder().join("schema.toml");
    if !fs::exists(&config_file_path).expect("Error while checking if schema config file exists") {
        // If the schema.toml file does not exist, create it with default values
        fs::write(&config_file_path, DEFAULT_SCHEMA_CONFIG_BYTES).expect("Failed to create default schema.toml");
    }

    Config::builder()
        .add_source(File::with_name(config_file_path.as_str()))
        .build()
}

fn get_app_folder() -> &'static Utf8Path {
    let folder: &'static Utf8PathBuf = &APP_FOLDER;
    if !fs::exists(folder).expect("Error while determining if app data directory exists") {
            fs::create_dir_all(folder).expect("Failed to create local data directory");
    }
    folder.as_path()
}

// Private constants and functions
const DEFAULT_STORE_CONFIG_BYTES: &[u8] = include_bytes!("../artifacts/defaults/store.toml");
const DEFAULT_SCHEMA_CONFIG_BYTES: &[u8] = include_bytes!("../artifacts/defaults/schema.toml");

static APP_FOLDER: LazyLock<Utf8PathBuf> = LazyLock::new(|| Utf8PathBuf::from_path_buf(dirs::data_local_dir()
            .expect("Failed to get local data directory"))
            .expect("Local data directory is not a valid UTF-8 path")
            .join("lakereset"));
