//! The activity service client
//!
//! [`ActivityClient`] is the sole authorized path to the suggestion backend.
//! It centralizes URL construction, header defaults, JSON decoding, and
//! error normalization; consumers depend on the [`ActivityApi`] trait so the
//! HTTP layer never leaks into the presentation code.
//!
//! Every operation issues exactly one HTTP call. No retries, no timers, no
//! background work; retry-on-failure means re-invoking the same operation.

use crate::config::{ClientConfig, FallbackPolicy};
use crate::error::{ErrorKind, ServiceError};
use crate::fallback;
use crate::types::{
    Activity, CacheStats, Category, HealthStatus, PriceLevel, SuggestionRequest,
    SuggestionResponse,
};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

/// Per-call extras: extra headers and an optional cancellation token.
///
/// Headers are merged over the client's `Content-Type: application/json`
/// default; caller-supplied values win. When the token fires before the
/// response completes, the call resolves to a `cancelled` [`ServiceError`]
/// and the in-flight request is dropped, aborting the connection.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    headers: HeaderMap,
    cancel: Option<CancellationToken>,
}

impl CallOptions {
    /// Empty options: default headers, no cancellation
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With an extra header, overriding any client default of the same name
    #[inline]
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// With a cancellation token
    #[inline]
    #[must_use]
    pub fn with_cancel(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// Consumer-facing contract for the four core operations.
///
/// The presentation layer should depend on this trait, not on
/// [`ActivityClient`] directly, so it can be exercised against a mock.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// Fetch all categories in backend-provided order
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;

    /// Fetch activities for a category, optionally filtered by price level
    async fn list_activities(
        &self,
        category: &str,
        price_level: Option<PriceLevel>,
    ) -> Result<Vec<Activity>, ServiceError>;

    /// Fetch a bounded set of random suggestions
    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, ServiceError>;

    /// Probe backend liveness; never substituted, never masked
    async fn health_check(&self) -> Result<HealthStatus, ServiceError>;
}

/// Typed client for the Activity Selector REST API.
///
/// Holds the immutable configuration and a pooled HTTP connection; cheap to
/// clone and share. Construct one at the application's composition root and
/// inject it where needed.
///
/// # Example
///
/// ```rust,no_run
/// use activity_client::{ActivityClient, ClientConfig, SuggestionRequest};
///
/// # async fn example() -> Result<(), activity_client::ServiceError> {
/// let client = ActivityClient::new(ClientConfig::from_env());
///
/// let request = SuggestionRequest::new("Outdoor").with_limit(6);
/// let response = client.suggest(&request).await?;
///
/// println!("{} of {} matches", response.activities.len(), response.total_found);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ActivityClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl ActivityClient {
    /// Create a client from explicit configuration
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client configured from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ClientConfig::from_env())
    }

    /// The configured base URL
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Fetch all categories in backend-provided order
    pub async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        self.list_categories_opts(CallOptions::new()).await
    }

    /// [`list_categories`](Self::list_categories) with per-call options
    pub async fn list_categories_opts(
        &self,
        opts: CallOptions,
    ) -> Result<Vec<Category>, ServiceError> {
        tracing::debug!("GET /api/categories");
        let result = self
            .execute(self.http.get(self.url("/api/categories")), &opts)
            .await;

        match result {
            Err(err) if self.substitutable(&err) => {
                tracing::warn!("categories request failed, substituting sample data: {err}");
                Ok(fallback::sample_categories())
            }
            other => other,
        }
    }

    /// Fetch activities for a category, optionally filtered by price level.
    ///
    /// `category` is forwarded as-is, empty or not; the backend owns input
    /// validation. `price_level` joins the query string only when supplied.
    pub async fn list_activities(
        &self,
        category: &str,
        price_level: Option<PriceLevel>,
    ) -> Result<Vec<Activity>, ServiceError> {
        self.list_activities_opts(category, price_level, CallOptions::new())
            .await
    }

    /// [`list_activities`](Self::list_activities) with per-call options
    pub async fn list_activities_opts(
        &self,
        category: &str,
        price_level: Option<PriceLevel>,
        opts: CallOptions,
    ) -> Result<Vec<Activity>, ServiceError> {
        tracing::debug!(category, ?price_level, "GET /api/activities");
        let mut request = self
            .http
            .get(self.url("/api/activities"))
            .query(&[("category", category)]);
        if let Some(level) = price_level {
            request = request.query(&[("price_level", level.as_str())]);
        }

        let result = self.execute(request, &opts).await;

        match result {
            Err(err) if self.substitutable(&err) => {
                tracing::warn!("activities request failed, substituting sample data: {err}");
                Ok(fallback::sample_activities(category, price_level))
            }
            other => other,
        }
    }

    /// Fetch a bounded set of random suggestions via a single POST
    pub async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, ServiceError> {
        self.suggest_opts(request, CallOptions::new()).await
    }

    /// [`suggest`](Self::suggest) with per-call options
    pub async fn suggest_opts(
        &self,
        request: &SuggestionRequest,
        opts: CallOptions,
    ) -> Result<SuggestionResponse, ServiceError> {
        tracing::debug!(category = %request.category, "POST /api/suggest");
        let result = self
            .execute(self.http.post(self.url("/api/suggest")).json(request), &opts)
            .await;

        match result {
            Err(err) if self.substitutable(&err) => {
                tracing::warn!("suggest request failed, substituting sample data: {err}");
                Ok(fallback::sample_suggestions(request))
            }
            other => other,
        }
    }

    /// Probe backend liveness.
    ///
    /// Always strict regardless of the fallback policy; a masked health
    /// check would hide real outages.
    pub async fn health_check(&self) -> Result<HealthStatus, ServiceError> {
        self.health_check_opts(CallOptions::new()).await
    }

    /// [`health_check`](Self::health_check) with per-call options
    pub async fn health_check_opts(
        &self,
        opts: CallOptions,
    ) -> Result<HealthStatus, ServiceError> {
        tracing::debug!("GET /api/health");
        self.execute(self.http.get(self.url("/api/health")), &opts)
            .await
    }

    /// Fetch backend cache diagnostics; debugging aid, always strict
    pub async fn cache_stats(&self) -> Result<CacheStats, ServiceError> {
        self.cache_stats_opts(CallOptions::new()).await
    }

    /// [`cache_stats`](Self::cache_stats) with per-call options
    pub async fn cache_stats_opts(&self, opts: CallOptions) -> Result<CacheStats, ServiceError> {
        tracing::debug!("GET /api/cache/stats");
        self.execute(self.http.get(self.url("/api/cache/stats")), &opts)
            .await
    }

    /// Clear the backend cache; debugging aid, always strict
    pub async fn clear_cache(&self) -> Result<(), ServiceError> {
        self.clear_cache_opts(CallOptions::new()).await
    }

    /// [`clear_cache`](Self::clear_cache) with per-call options
    pub async fn clear_cache_opts(&self, opts: CallOptions) -> Result<(), ServiceError> {
        tracing::debug!("DELETE /api/cache/clear");
        let _ack: serde_json::Value = self
            .execute(self.http.delete(self.url("/api/cache/clear")), &opts)
            .await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// Whether the configured policy converts this error into sample data.
    /// Only `transport` and `http` qualify; `decode` and `cancelled` always
    /// propagate.
    fn substitutable(&self, err: &ServiceError) -> bool {
        self.config.fallback() == FallbackPolicy::SampleData
            && matches!(err.kind(), ErrorKind::Transport | ErrorKind::Http)
    }

    /// Shared request algorithm: merge headers, send, classify failures,
    /// decode the success body. Racing against the cancellation token drops
    /// the in-flight future, which aborts the underlying request.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        opts: &CallOptions,
    ) -> Result<T, ServiceError> {
        let request = request.headers(merged_headers(&opts.headers));
        match &opts.cancel {
            Some(token) => {
                tokio::select! {
                    _ = token.cancelled() => Err(ServiceError::Cancelled),
                    result = dispatch(request) => result,
                }
            }
            None => dispatch(request).await,
        }
    }
}

#[async_trait]
impl ActivityApi for ActivityClient {
    async fn list_categories(&self) -> Result<Vec<Category>, ServiceError> {
        ActivityClient::list_categories(self).await
    }

    async fn list_activities(
        &self,
        category: &str,
        price_level: Option<PriceLevel>,
    ) -> Result<Vec<Activity>, ServiceError> {
        ActivityClient::list_activities(self, category, price_level).await
    }

    async fn suggest(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SuggestionResponse, ServiceError> {
        ActivityClient::suggest(self, request).await
    }

    async fn health_check(&self) -> Result<HealthStatus, ServiceError> {
        ActivityClient::health_check(self).await
    }
}

/// Default headers overlaid with the caller's; callers win on collision
fn merged_headers(extra: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.extend(extra.clone());
    headers
}

/// Send one request and map the outcome onto the error taxonomy
async fn dispatch<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ServiceError> {
    let response = request.send().await.map_err(ServiceError::transport)?;
    let status = response.status();

    if !status.is_success() {
        // Unreadable error bodies degrade to the generic message
        let body = response.text().await.unwrap_or_default();
        return Err(ServiceError::from_failure_status(status.as_u16(), &body));
    }

    let body = response.text().await.map_err(ServiceError::transport)?;
    serde_json::from_str(&body).map_err(ServiceError::decode)
}
