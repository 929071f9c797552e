//! # Configuration Loader
//!
//! Reads catalog backend settings from, lowest precedence first:
//!
//! 1. an optional TOML file (`[supabase] url / anon_key / table`)
//! 2. the process environment (after `.env` has been loaded by `main`)
//!
//! No validation happens here. Empty values are passed through as they are and
//! interpreted by the wiring layer.

use std::path::{Path, PathBuf};

use bg_core::config::CatalogConfig;

/// Environment variable holding the service URL.
pub const ENV_SUPABASE_URL: &str = "SUPABASE_URL";
/// Environment variable holding the public access key.
pub const ENV_SUPABASE_ANON_KEY: &str = "SUPABASE_ANON_KEY";
/// Environment variable overriding the catalog table name.
pub const ENV_CATALOG_TABLE: &str = "BUKUGO_CATALOG_TABLE";

/// Names used by the web front end's `.env` files, accepted as aliases.
const ENV_URL_ALIAS: &str = "NEXT_PUBLIC_SUPABASE_URL";
const ENV_KEY_ALIAS: &str = "NEXT_PUBLIC_SUPABASE_ANON_KEY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Default location of the config file: `<config_dir>/bukugo/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bukugo").join("config.toml"))
}

/// Load a TOML config file into a [`CatalogConfig`].
pub fn load_config_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let toml_value: toml::Value = toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(CatalogConfig::from_toml(&toml_value))
}

/// Build a [`CatalogConfig`] from environment lookups.
pub fn config_from_env_with<F>(lookup: F) -> CatalogConfig
where
    F: Fn(&str) -> Option<String>,
{
    CatalogConfig {
        supabase_url: lookup(ENV_SUPABASE_URL).or_else(|| lookup(ENV_URL_ALIAS)),
        anon_key: lookup(ENV_SUPABASE_ANON_KEY).or_else(|| lookup(ENV_KEY_ALIAS)),
        table: lookup(ENV_CATALOG_TABLE),
    }
}

pub fn config_from_env() -> CatalogConfig {
    config_from_env_with(|name| std::env::var(name).ok())
}

/// Load the effective configuration.
///
/// A missing file is not an error; an unreadable or malformed one is.
/// Environment values override file values.
pub fn load_config(path: Option<&Path>) -> Result<CatalogConfig, ConfigError> {
    let file_config = match path {
        Some(path) if path.exists() => load_config_file(path)?,
        _ => CatalogConfig::default(),
    };
    Ok(file_config.merged_with(config_from_env()))
}
