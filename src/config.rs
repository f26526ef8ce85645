//! Client configuration
//!
//! One external setting exists: the backend base URL, read from
//! `ACTIVITY_API_URL` with a local-development default. The fallback policy
//! is a construction-time choice, immutable after the client is built.

use std::env;

/// Environment variable supplying the backend base URL
pub const ENV_BASE_URL: &str = "ACTIVITY_API_URL";

/// Base URL used when [`ENV_BASE_URL`] is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:8001";

/// What the client does when a substitutable operation fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Propagate every failure to the caller
    #[default]
    Strict,
    /// Substitute built-in sample data for `transport`/`http` failures on
    /// `list_categories`, `list_activities` and `suggest`. `decode` and
    /// `cancelled` errors still propagate, and `health_check` is never
    /// substituted.
    SampleData,
}

/// Immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    fallback: FallbackPolicy,
}

impl ClientConfig {
    /// Configuration targeting [`DEFAULT_BASE_URL`] with strict errors
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with the base URL taken from [`ENV_BASE_URL`]
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env::var(ENV_BASE_URL).ok())
    }

    fn from_lookup(base_url: Option<String>) -> Self {
        match base_url {
            Some(url) if !url.trim().is_empty() => Self::new().with_base_url(url),
            _ => Self::new(),
        }
    }

    /// With an explicit base URL; a trailing slash is trimmed so paths join cleanly
    #[inline]
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// With a fallback policy
    #[inline]
    #[must_use]
    pub fn with_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    /// Configured base URL, no trailing slash
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured fallback policy
    #[inline]
    #[must_use]
    pub fn fallback(&self) -> FallbackPolicy {
        self.fallback
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            fallback: FallbackPolicy::default(),
        }
    }
}
