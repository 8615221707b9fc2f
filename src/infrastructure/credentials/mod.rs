//! Credentials management infrastructure
//!
//! API key resolution from environment variables:
//! - Layered lookup (generic key, service key, OpenAI key, dev fallback)
//! - Rejection of placeholder keys in production
//! - Required/optional plain configuration lookups
//!
//! Every operation reads its [`EnvSource`] afresh; nothing is cached.

use tracing::error;

use crate::adapters::env::ProcessEnv;
use crate::domain::error::ConfigError;
use crate::domain::models::EnvironmentTier;
use crate::domain::ports::EnvSource;

/// Generic key consulted before any service-specific variable.
pub const GENERIC_API_KEY_VAR: &str = "OM_API_KEY";

/// Key used for OpenAI-compatible services.
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Service name used when the caller does not name one.
pub const DEFAULT_SERVICE: &str = "openmind";

/// Free-tier key handed out in development and test tiers.
pub const DEV_FALLBACK_KEY: &str = "openmind_free";

/// Placeholder keys that must never be used in production.
pub const SENTINEL_KEYS: [&str; 4] = ["openmind_free", "test_key", "demo_key", "example"];

/// Shortest key accepted by [`SecureConfig::validate_api_key`].
pub const MIN_KEY_LEN: usize = 10;

/// Whether `key` is one of the known placeholder credentials.
pub fn is_sentinel_key(key: &str) -> bool {
    SENTINEL_KEYS.contains(&key)
}

/// Name of the service-specific variable, e.g. `OPENMIND_API_KEY`.
pub fn service_key_var(service_name: &str) -> String {
    format!("{}_API_KEY", service_name.to_uppercase())
}

/// Variables consulted by [`SecureConfig::resolve_api_key`], in priority
/// order, each listed once.
pub fn candidate_vars(service_name: &str) -> Vec<String> {
    let mut candidates = vec![GENERIC_API_KEY_VAR.to_string()];
    let mut push_unique = |var: String| {
        if !candidates.contains(&var) {
            candidates.push(var);
        }
    };

    push_unique(service_key_var(service_name));
    if service_name.to_lowercase().contains("openai") {
        push_unique(OPENAI_API_KEY_VAR.to_string());
    }
    candidates
}

/// Render a key for display without exposing it.
pub fn mask_secret(key: &str) -> String {
    if key.chars().count() <= 8 {
        return "****".to_string();
    }
    let prefix: String = key.chars().take(4).collect();
    format!("{prefix}****")
}

/// Stateless secure configuration reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecureConfig;

impl SecureConfig {
    /// Resolve the API key for `service_name`.
    ///
    /// Priority:
    /// 1. `OM_API_KEY`
    /// 2. `{SERVICE_NAME}_API_KEY`
    /// 3. `OPENAI_API_KEY`, only when the service name contains "openai"
    /// 4. `openmind_free`, only in the dev/development/test tiers
    ///
    /// Empty variables count as unset. In production a placeholder key found
    /// in steps 1-3 is skipped and the next source is tried.
    pub fn resolve_api_key<E>(env: &E, service_name: &str) -> Option<String>
    where
        E: EnvSource + ?Sized,
    {
        let tier = EnvironmentTier::from_env(env);

        for var in &candidate_vars(service_name) {
            let Some(key) = env.get_non_empty(var) else {
                continue;
            };
            if tier.is_production() && is_sentinel_key(&key) {
                error!(
                    service = service_name,
                    variable = %var,
                    "Production environment using test API key, ignoring it"
                );
                continue;
            }
            return Some(key);
        }

        if tier.allows_sentinel_fallback() {
            return Some(DEV_FALLBACK_KEY.to_string());
        }

        error!(service = service_name, tier = %tier, "API key not found for service");
        None
    }

    /// [`Self::resolve_api_key`] against the process environment.
    pub fn api_key(service_name: &str) -> Option<String> {
        Self::resolve_api_key(&ProcessEnv, service_name)
    }

    /// Check that `api_key` is usable for `service_name`.
    ///
    /// Rejects empty keys, placeholder keys in production, and keys shorter
    /// than [`MIN_KEY_LEN`] characters.
    pub fn validate_api_key<E>(env: &E, api_key: &str, service_name: &str) -> bool
    where
        E: EnvSource + ?Sized,
    {
        if api_key.is_empty() {
            return false;
        }

        if EnvironmentTier::from_env(env).is_production() && is_sentinel_key(api_key) {
            error!(
                service = service_name,
                "Production environment using test API key"
            );
            return false;
        }

        if api_key.chars().count() < MIN_KEY_LEN {
            error!(service = service_name, "API key too short");
            return false;
        }

        true
    }

    /// [`Self::validate_api_key`] against the process environment.
    pub fn is_valid_api_key(api_key: &str, service_name: &str) -> bool {
        Self::validate_api_key(&ProcessEnv, api_key, service_name)
    }

    /// Look up `key` (upper-cased), falling back to `default` when unset.
    ///
    /// A variable that is set to the empty string is returned as-is. When
    /// `required` is true an empty result is an error.
    pub fn get_config_value<E>(
        env: &E,
        key: &str,
        default: &str,
        required: bool,
    ) -> Result<String, ConfigError>
    where
        E: EnvSource + ?Sized,
    {
        let value = env
            .get(&key.to_uppercase())
            .unwrap_or_else(|| default.to_string());

        if required && value.is_empty() {
            error!(key, "Required configuration value missing");
            return Err(ConfigError::MissingRequired {
                key: key.to_string(),
            });
        }

        Ok(value)
    }

    /// [`Self::get_config_value`] against the process environment.
    pub fn config_value(key: &str, default: &str, required: bool) -> Result<String, ConfigError> {
        Self::get_config_value(&ProcessEnv, key, default, required)
    }
}
