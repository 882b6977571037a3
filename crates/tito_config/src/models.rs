// --- File: crates/tito_config/src/models.rs ---

use serde::{Deserialize, Serialize};

/// Base URL of the Tito v3 admin API.
pub const DEFAULT_API_URL: &str = "https://api.tito.io/v3/";

/// Where an administrator sets the Tito credentials.
pub const DEFAULT_SETTINGS_PATH: &str = "/admin/config/services/tito";

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Tito Config ---
// The token is normally "secret_from_env" in the config file and injected from
// TITO_SECRET_TITO_API_TOKEN or TITO_API_TOKEN at load time.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TitoSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub api_token: String,
    #[serde(default = "default_settings_path")]
    pub settings_path: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_settings_path() -> String {
    DEFAULT_SETTINGS_PATH.to_string()
}

impl Default for TitoSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_token: String::new(),
            settings_path: default_settings_path(),
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub tito: TitoSettings,
}
