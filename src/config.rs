//! API endpoint configuration resolved at build time.
//!
//! DESIGN
//! ======
//! The remote endpoint differs per environment, so the base URL and request
//! timeout are compile-time inputs (`PORTAL_API_BASE`,
//! `PORTAL_API_TIMEOUT_MS`) with production defaults. `App` provides the
//! resolved record via context so views never read the environment directly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API origin used when `PORTAL_API_BASE` is not set at build time.
pub const DEFAULT_API_BASE: &str =
    "https://preet-backend-jf6icdzrj-jitendra-choudharys-projects.vercel.app";

/// Login request timeout used when `PORTAL_API_TIMEOUT_MS` is not set.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Resolved API configuration, provided to the component tree via context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin of the portal API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u32,
}

impl ApiConfig {
    /// Resolve the configuration from compile-time environment overrides.
    pub fn from_build_env() -> Self {
        Self::resolve(
            option_env!("PORTAL_API_BASE"),
            option_env!("PORTAL_API_TIMEOUT_MS"),
        )
    }

    fn resolve(base: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self {
            base_url: base
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_owned(),
            timeout_ms: timeout_ms
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Absolute URL of the login endpoint.
    pub fn login_endpoint(&self) -> String {
        format!("{}/api/login", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
