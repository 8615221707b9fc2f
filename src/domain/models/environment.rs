//! Deployment environment tier.

use std::fmt;

use crate::domain::ports::EnvSource;

/// Variable holding the deployment tier.
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Tier assumed when `ENVIRONMENT` is unset.
pub const DEFAULT_ENVIRONMENT: &str = "production";

/// Deployment mode, gating whether placeholder credentials are acceptable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvironmentTier {
    /// `dev` or `development`
    Development,
    /// `test`
    Test,
    /// `production`, also the default
    Production,
    /// Any other value (e.g. `staging`), lowercased.
    Other(String),
}

impl EnvironmentTier {
    /// Parse a tier name case-insensitively.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Development,
            "test" => Self::Test,
            "production" => Self::Production,
            other => Self::Other(other.to_string()),
        }
    }

    /// Read the tier from `ENVIRONMENT`, defaulting to production.
    ///
    /// A variable that is set but empty is kept as an empty `Other` tier;
    /// only an unset variable falls back to the default.
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        env.get(ENVIRONMENT_VAR)
            .map_or_else(|| Self::parse(DEFAULT_ENVIRONMENT), |v| Self::parse(&v))
    }

    /// Whether the sentinel development key may be handed out.
    pub const fn allows_sentinel_fallback(&self) -> bool {
        matches!(self, Self::Development | Self::Test)
    }

    /// Only the exact `production` tier.
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Canonical tier name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for EnvironmentTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
