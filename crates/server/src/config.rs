use std::path::PathBuf;

use assetops_core::locator::{DEFAULT_PROBE_MAX_ATTEMPTS, DEFAULT_SCOPE};
use assetops_engine::EngineConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Scope used when a tool call names none (default: `db://assets`).
    pub default_scope: String,
    /// Suffixed candidates tried by the locator prober (default: `100`).
    pub probe_max_attempts: u32,
    /// JSON catalog to preload into the in-memory store.
    pub catalog_seed_path: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var               | Default       |
    /// |-----------------------|---------------|
    /// | `ASSET_DEFAULT_SCOPE` | `db://assets` |
    /// | `PROBE_MAX_ATTEMPTS`  | `100`         |
    /// | `CATALOG_SEED_PATH`   | unset         |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_scope = lookup("ASSET_DEFAULT_SCOPE")
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SCOPE.to_string());

        let probe_max_attempts = match lookup("PROBE_MAX_ATTEMPTS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    default = DEFAULT_PROBE_MAX_ATTEMPTS,
                    "PROBE_MAX_ATTEMPTS is not a valid u32, using default",
                );
                DEFAULT_PROBE_MAX_ATTEMPTS
            }),
            None => DEFAULT_PROBE_MAX_ATTEMPTS,
        };

        let catalog_seed_path = lookup("CATALOG_SEED_PATH")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        Self {
            default_scope,
            probe_max_attempts,
            catalog_seed_path,
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            default_scope: self.default_scope.clone(),
            probe_max_attempts: self.probe_max_attempts,
        }
    }
}
