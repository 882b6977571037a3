//! Environment variable handling for the Tito integration.
//!
//! Configuration values can be overridden with `TITO__SECTION__KEY` variables.
//! Secrets are referenced from config files with the `secret_from_env` marker
//! and resolved from `TITO_SECRET_SECTION_KEY`, falling back to the shorter
//! `SECTION_KEY` form.

use serde_json::Value;
use std::env;
use tracing::{debug, warn};

pub const DEFAULT_PREFIX: &str = "TITO";
pub const SECRET_PREFIX: &str = "TITO_SECRET";

/// Separator between prefix, section and key in override variables.
pub const CONFIG_SEPARATOR: &str = "__";

/// Marker value that is replaced by a secret from the environment.
pub const SECRET_MARKER: &str = "secret_from_env";

const SECRET_HINTS: [&str; 4] = ["secret", "key", "password", "token"];

/// Prefix for override variables; `PREFIX` replaces the default.
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// `"tito.api_url"` becomes `"TITO__TITO__API_URL"`.
pub fn config_path_to_env_var(path: &str) -> String {
    let mut name = get_config_prefix();
    for segment in path.split('.') {
        name.push_str(CONFIG_SEPARATOR);
        name.push_str(segment);
    }
    name.to_uppercase()
}

/// Variable names checked for a secret at `path`, in lookup order.
///
/// `"tito.api_token"` yields `TITO_SECRET_TITO_API_TOKEN` then `TITO_API_TOKEN`.
pub fn secret_env_var_candidates(path: &str) -> Vec<String> {
    let flat = path.replace('.', "_").to_uppercase();
    vec![format!("{}_{}", SECRET_PREFIX, flat), flat]
}

/// Paths naming a secret, key, password or token hold credentials.
pub fn is_secret_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    SECRET_HINTS.iter().any(|hint| lower.contains(hint))
}

/// Looks up the environment value that should replace a marker at `path`.
pub fn lookup_env_value(path: &str) -> Option<String> {
    if is_secret_path(path) {
        secret_env_var_candidates(path)
            .into_iter()
            .find_map(|name| env::var(&name).ok())
    } else {
        env::var(config_path_to_env_var(path)).ok()
    }
}

/// Replace every `secret_from_env` string in `value` with its environment value.
///
/// A marker without a matching variable becomes an empty string so that it can
/// never be mistaken for a real credential.
///
/// Returns `true` if any marker was resolved from the environment.
pub fn inject_env_vars(value: &mut Value) -> bool {
    let mut path = Vec::new();
    resolve_markers(&mut path, value)
}

fn resolve_markers(path: &mut Vec<String>, node: &mut Value) -> bool {
    match node {
        Value::Object(map) => {
            let mut resolved = false;
            for (key, child) in map.iter_mut() {
                path.push(key.clone());
                resolved |= resolve_markers(path, child);
                path.pop();
            }
            resolved
        }
        Value::Array(items) => {
            let mut resolved = false;
            for (index, child) in items.iter_mut().enumerate() {
                path.push(index.to_string());
                resolved |= resolve_markers(path, child);
                path.pop();
            }
            resolved
        }
        Value::String(s) if s == SECRET_MARKER => {
            let dotted = path.join(".");
            match lookup_env_value(&dotted) {
                Some(found) => {
                    debug!("resolved {} from the environment", dotted);
                    *s = found;
                    true
                }
                None => {
                    warn!("env var for {} not found, leaving it empty", dotted);
                    s.clear();
                    false
                }
            }
        }
        _ => false,
    }
}
