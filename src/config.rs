//! # Settings
//!
//! Loaded with the `config` crate. Sources, later ones overriding earlier ones:
//!
//! 1. `inventory.yaml` in the working directory, if present
//! 2. the file passed to [`Settings::load`], if any
//! 3. the file named by `INVENTORY_CONFIG`, if set
//! 4. `INVENTORY__*` environment variables, e.g. `INVENTORY__ACTORS__BUFFER_SIZE=64`
//!
//! Every field has a default, so an empty configuration is valid.
//!
//! ```yaml
//! actors:
//!   buffer_size: 32
//! orders:
//!   number_attempts: 16
//! catalog:
//!   seed: true
//! log:
//!   filter: "info,smart_inventory=debug"
//! ```

use ::config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "inventory";
pub const CONFIG_ENV_VAR: &str = "INVENTORY_CONFIG";
pub const CONFIG_ENV_PREFIX: &str = "INVENTORY";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub actors: ActorSettings,
    pub orders: OrderSettings,
    pub catalog: CatalogSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ActorSettings {
    /// Mailbox capacity of every actor.
    pub buffer_size: usize,
}

impl Default for ActorSettings {
    fn default() -> Self {
        Self { buffer_size: 32 }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderSettings {
    /// Draws per order before giving up on finding an unused order number.
    pub number_attempts: u32,
}

impl Default for OrderSettings {
    fn default() -> Self {
        Self {
            number_attempts: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Load the starter categories and products on startup.
    pub seed: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { seed: true }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Yaml).required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::new(path, FileFormat::Yaml).required(true));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            builder = builder.add_source(File::new(&path, FileFormat::Yaml).required(true));
        }

        builder
            .add_source(
                Environment::with_prefix(CONFIG_ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Defaults with an empty catalog, for tests.
    pub fn for_test() -> Self {
        Self {
            catalog: CatalogSettings { seed: false },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.actors.buffer_size, 32);
        assert_eq!(settings.orders.number_attempts, 16);
        assert!(settings.catalog.seed);
        assert_eq!(settings.log.filter, "info");
        assert!(!Settings::for_test().catalog.seed);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = std::env::temp_dir().join(format!("inventory-test-{}.yaml", std::process::id()));
        std::fs::write(&path, "orders:\n  number_attempts: 3\ncatalog:\n  seed: false\n").unwrap();

        let settings = Settings::load(path.to_str()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(settings.orders.number_attempts, 3);
        assert!(!settings.catalog.seed);
        assert_eq!(settings.actors.buffer_size, 32);
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        assert!(Settings::load(Some("/nonexistent/inventory.yaml")).is_err());
    }
}
