//! Functional tests for the presentation-layer seam.
//!
//! The UI depends on the `ActivityApi` trait, never on the HTTP layer.
//! These tests drive a mocked backend through a minimal view-state reducer
//! to pin down the consumer contract:
//! - Errors map to a generic failed state with a retry affordance; the
//!   free-form backend message is never trusted verbatim.
//! - Retry means re-invoking the same operation, nothing more.
//! - A cancelled call leaves previously rendered state untouched.

use activity_client::{
    ActivityApi, ErrorKind, PriceLevel, ServiceError, SuggestionRequest, SuggestionResponse,
};
use activity_client::types::{Activity, Category, HealthStatus};
use async_trait::async_trait;
use mockall::mock;
use mockall::Sequence;
use pretty_assertions::assert_eq;

mock! {
    pub Backend {}

    #[async_trait]
    impl ActivityApi for Backend {
        async fn list_categories(&self) -> Result<Vec<Category>, ServiceError>;

        async fn list_activities(
            &self,
            category: &str,
            price_level: Option<PriceLevel>,
        ) -> Result<Vec<Activity>, ServiceError>;

        async fn suggest(
            &self,
            request: &SuggestionRequest,
        ) -> Result<SuggestionResponse, ServiceError>;

        async fn health_check(&self) -> Result<HealthStatus, ServiceError>;
    }
}

/// Minimal stand-in for the UI's render states
#[derive(Debug, Clone, PartialEq)]
enum ViewState {
    Empty,
    Loaded(Vec<Activity>),
    Failed { retryable: bool },
}

/// How a well-behaved consumer maps one suggestion call onto view state
async fn load_suggestions(
    api: &dyn ActivityApi,
    request: &SuggestionRequest,
    previous: ViewState,
) -> ViewState {
    match api.suggest(request).await {
        Ok(response) if response.activities.is_empty() => ViewState::Empty,
        Ok(response) => ViewState::Loaded(response.activities),
        // Cancellation is not a failure to render; keep what was on screen
        Err(ServiceError::Cancelled) => previous,
        Err(err) => ViewState::Failed {
            retryable: err.is_retryable(),
        },
    }
}

fn suggestion_response(activities: Vec<Activity>) -> SuggestionResponse {
    let total_found = activities.len();
    SuggestionResponse {
        activities,
        total_found,
        category: "Food".to_string(),
        price_level: None,
    }
}

/// Tenet: a backend failure renders as a generic failed state with a retry
/// affordance, regardless of the backend's message text.
#[tokio::test]
async fn backend_failure_maps_to_retryable_state() {
    let mut api = MockBackend::new();
    api.expect_suggest().times(1).returning(|_| {
        Err(ServiceError::Http {
            status: 503,
            message: "<script>alert('not safe to render')</script>".to_string(),
        })
    });

    let request = SuggestionRequest::new("Food");
    let state = load_suggestions(&api, &request, ViewState::Empty).await;
    assert_eq!(state, ViewState::Failed { retryable: true });
}

/// Tenet: retry is plain re-invocation of the same operation; the second
/// call is indistinguishable from the first.
#[tokio::test]
async fn retry_reinvokes_the_same_operation() {
    let mut seq = Sequence::new();
    let mut api = MockBackend::new();

    api.expect_suggest()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Err(ServiceError::Http {
                status: 500,
                message: "HTTP error! status: 500".to_string(),
            })
        });
    api.expect_suggest()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(suggestion_response(vec![Activity::new(
                "Pizza Place",
                PriceLevel::Medium,
                "Food",
            )]))
        });

    let request = SuggestionRequest::new("Food");

    let first = load_suggestions(&api, &request, ViewState::Empty).await;
    assert_eq!(first, ViewState::Failed { retryable: true });

    let second = load_suggestions(&api, &request, ViewState::Empty).await;
    match second {
        ViewState::Loaded(activities) => assert_eq!(activities[0].name, "Pizza Place"),
        other => panic!("expected loaded state, got {other:?}"),
    }
}

/// Tenet: an empty result is its own state, distinct from failure.
#[tokio::test]
async fn empty_result_is_not_a_failure() {
    let mut api = MockBackend::new();
    api.expect_suggest()
        .times(1)
        .returning(|_| Ok(suggestion_response(Vec::new())));

    let request = SuggestionRequest::new("Food");
    let state = load_suggestions(&api, &request, ViewState::Empty).await;
    assert_eq!(state, ViewState::Empty);
}

/// Tenet: a cancelled call mutates nothing; the previous render survives.
#[tokio::test]
async fn cancelled_call_preserves_previous_state() {
    let mut api = MockBackend::new();
    api.expect_suggest()
        .times(1)
        .returning(|_| Err(ServiceError::Cancelled));

    let previous = ViewState::Loaded(vec![Activity::new(
        "Hiking Trail",
        PriceLevel::Free,
        "Outdoor",
    )]);
    let request = SuggestionRequest::new("Outdoor");

    let state = load_suggestions(&api, &request, previous.clone()).await;
    assert_eq!(state, previous);
}

/// Tenet: the consumer can route calls by selection without knowing about
/// URLs or queries.
#[tokio::test]
async fn selection_drives_typed_parameters() {
    let mut api = MockBackend::new();
    api.expect_list_activities()
        .withf(|category, price_level| {
            category == "Food" && *price_level == Some(PriceLevel::Medium)
        })
        .times(1)
        .returning(|_, _| Ok(Vec::new()));

    let result = api.list_activities("Food", Some(PriceLevel::Medium)).await;
    assert!(result.unwrap().is_empty());

    let err = ServiceError::Cancelled;
    assert_eq!(err.kind(), ErrorKind::Cancelled);
}
