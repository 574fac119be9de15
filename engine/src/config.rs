//! Application configuration.

use kvstore_primitives::store::PARTITION_SEPARATOR;
use kvstore_primitives::types::{DEFAULT_APP_NAME, DEFAULT_CODESPACE, DEFAULT_STORE_KEY};
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Configuration for the kvstore application.
///
/// Every component receives the values it needs at construction time;
/// nothing is read from globals.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Name reported by `info`.
    pub app_name: String,

    /// Partition of the store the application reads and writes.
    /// Default: `"main"`.
    pub store_key: String,

    /// Codespace attached to non-zero result codes.
    pub codespace: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_owned(),
            store_key: DEFAULT_STORE_KEY.to_owned(),
            codespace: DEFAULT_CODESPACE.to_owned(),
        }
    }
}

impl AppConfig {
    /// Check the configuration is usable.
    ///
    /// The store key must be non-empty and must not contain the partition
    /// separator, otherwise two partitions could share a key range.
    pub fn validate(&self) -> AppResult<()> {
        if self.store_key.is_empty() {
            return Err(AppError::InvalidConfig("store_key must be non-empty".into()));
        }
        if self.store_key.as_bytes().contains(&PARTITION_SEPARATOR) {
            return Err(AppError::InvalidConfig(format!(
                "store_key must not contain '{}'",
                PARTITION_SEPARATOR as char
            )));
        }
        if self.codespace.is_empty() {
            return Err(AppError::InvalidConfig("codespace must be non-empty".into()));
        }
        Ok(())
    }
}
