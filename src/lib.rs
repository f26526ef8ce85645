//! Activity Client - typed access to the Activity Selector backend
//!
//! The sole authorized path for an application to reach the
//! activity-suggestion REST API. It centralizes:
//! - URL construction and header defaults
//! - Typed JSON response decoding
//! - Error normalization into a four-kind taxonomy
//! - Per-call cancellation
//! - An explicitly opted-in sample-data fallback for offline/demo use
//!
//! # Example
//!
//! ```rust,no_run
//! use activity_client::{ActivityClient, ClientConfig, PriceLevel};
//!
//! # async fn example() -> Result<(), activity_client::ServiceError> {
//! let client = ActivityClient::new(ClientConfig::from_env());
//!
//! let categories = client.list_categories().await?;
//! let dinner = client
//!     .list_activities("Food", Some(PriceLevel::Medium))
//!     .await?;
//!
//! println!("{} categories, {} dinner options", categories.len(), dinner.len());
//! # Ok(())
//! # }
//! ```
//!
//! Errors carry a [`kind`](ServiceError::kind) (`transport`, `http`,
//! `decode`, `cancelled`) so callers can render a generic retry affordance
//! without trusting free-form backend messages.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod error;
mod fallback;
pub mod types;

// Re-exports for convenience
pub use client::{ActivityApi, ActivityClient, CallOptions};
pub use config::{ClientConfig, FallbackPolicy, DEFAULT_BASE_URL, ENV_BASE_URL};
pub use error::{ErrorKind, ServiceError};
pub use types::{
    Activity, CacheStats, Category, HealthStatus, PriceLevel, SuggestionRequest,
    SuggestionResponse, UnknownPriceLevel,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the activity client
    pub use crate::{
        ActivityApi, ActivityClient, CallOptions, ClientConfig, ErrorKind, PriceLevel,
        ServiceError, SuggestionRequest,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn client_construction_from_config() {
        let client = ActivityClient::new(
            ClientConfig::new()
                .with_base_url("http://127.0.0.1:9000/")
                .with_fallback(FallbackPolicy::SampleData),
        );
        assert_eq!(client.base_url(), "http://127.0.0.1:9000");
    }

    #[tokio::test]
    async fn strict_client_propagates_unreachable_backend() {
        // Port 9 (discard) is not listening; the call must fail as transport
        let client = ActivityClient::new(ClientConfig::new().with_base_url("http://127.0.0.1:9"));
        let err = client.list_categories().await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.is_retryable());
    }
}
