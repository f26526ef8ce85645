//! Wire types for the Activity Selector API
//!
//! Mirrors the backend schema one-for-one:
//! - Price levels (closed five-token enumeration)
//! - Categories and activities
//! - Suggestion request/response pairs
//! - Health and cache diagnostics payloads
//!
//! All types are plain value records: constructed from a JSON payload on
//! receipt, discarded after use. Unknown fields are ignored on decode.

use serde::{Deserialize, Serialize};

/// Price tier for an activity.
///
/// Exactly five tokens exist on the wire: `Free`, `$`, `$$`, `$$$`, `$$$$`.
/// Anything else is rejected at deserialization, never silently accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceLevel {
    /// No cost
    Free,
    /// Inexpensive
    #[serde(rename = "$")]
    Low,
    /// Moderate
    #[serde(rename = "$$")]
    Medium,
    /// Expensive
    #[serde(rename = "$$$")]
    High,
    /// Luxury
    #[serde(rename = "$$$$")]
    Luxury,
}

impl PriceLevel {
    /// All levels, cheapest first
    pub const ALL: [PriceLevel; 5] = [
        PriceLevel::Free,
        PriceLevel::Low,
        PriceLevel::Medium,
        PriceLevel::High,
        PriceLevel::Luxury,
    ];

    /// Wire token for this level
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceLevel::Free => "Free",
            PriceLevel::Low => "$",
            PriceLevel::Medium => "$$",
            PriceLevel::High => "$$$",
            PriceLevel::Luxury => "$$$$",
        }
    }
}

impl std::fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized price-level token
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown price level: {0}")]
pub struct UnknownPriceLevel(pub String);

impl std::str::FromStr for PriceLevel {
    type Err = UnknownPriceLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| UnknownPriceLevel(s.to_string()))
    }
}

/// A named grouping of activities (e.g. "Food", "Outdoor")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Backing data-source worksheet identifier
    pub sheet_name: String,
}

/// A single suggestable item with descriptive and pricing metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity name
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price tier
    pub price_level: PriceLevel,
    /// Short location label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Name of the category this activity belongs to
    pub category: String,
    /// Full street address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Website or menu URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form personal notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Labels of past orders (restaurants)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub past_orders: Option<Vec<String>>,
    /// Last bill amount, non-negative (restaurants)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_bill_price: Option<f64>,
    /// Last visit date as a YYYY-MM-DD string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit_date: Option<String>,
}

impl Activity {
    /// Create an activity with only the required fields set
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        price_level: PriceLevel,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: None,
            price_level,
            location: None,
            category: category.into(),
            address: None,
            phone: None,
            url: None,
            notes: None,
            past_orders: None,
            last_bill_price: None,
            last_visit_date: None,
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// With location label
    #[inline]
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// Parameters for a suggestion request.
///
/// `category` is forwarded as-is; validating non-emptiness is the caller's
/// job. The backend accepts `limit` in 1..=20 and applies its own default
/// (5) when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    /// Selected category name
    pub category: String,
    /// Optional price filter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<PriceLevel>,
    /// Maximum number of suggestions to return
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SuggestionRequest {
    /// Request suggestions for a category, no price filter, backend default limit
    #[inline]
    #[must_use]
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            price_level: None,
            limit: None,
        }
    }

    /// With price filter
    #[inline]
    #[must_use]
    pub fn with_price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = Some(level);
        self
    }

    /// With suggestion limit
    #[inline]
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A bounded, possibly-sampled subset of matching activities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    /// Suggested activities, at most `limit` of them
    pub activities: Vec<Activity>,
    /// Matches before truncation; always >= `activities.len()`
    pub total_found: usize,
    /// Category echoed from the request
    pub category: String,
    /// Price filter echoed from the request
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<PriceLevel>,
}

/// Liveness payload from `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Health token, e.g. "healthy"
    pub status: String,
    /// Service identifier
    pub service: String,
    /// Backend version string
    pub version: String,
}

/// Cache diagnostics from `GET /api/cache/stats`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of live cache entries
    pub total_entries: usize,
    /// Default time-to-live in seconds
    pub default_ttl: u64,
    /// Keys currently cached
    pub keys: Vec<String>,
}
