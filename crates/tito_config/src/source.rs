//! Key/value view over the settings store.
//!
//! The Tito client only needs a handful of string settings. Hosts that keep
//! their settings somewhere other than [`AppConfig`](crate::AppConfig) can
//! implement [`ConfigSource`] directly.

use std::collections::HashMap;

use crate::models::TitoSettings;

/// Key holding the API base URL.
pub const TITO_API_URL: &str = "tito_api_url";
/// Key holding the API token.
pub const TITO_API_TOKEN: &str = "tito_api_token";
/// Key holding the location of the settings page shown to users.
pub const TITO_SETTINGS_PATH: &str = "tito_settings_path";

/// Read access to application settings by key.
pub trait ConfigSource: Send + Sync {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;
}

impl ConfigSource for TitoSettings {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            TITO_API_URL => Some(self.api_url.clone()),
            TITO_API_TOKEN => Some(self.api_token.clone()),
            TITO_SETTINGS_PATH => Some(self.settings_path.clone()),
            _ => None,
        }
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}
