//! Built-in sample data for the opt-in fallback policy
//!
//! A small fixed set of categories and activities, served locally when the
//! backend is unreachable and [`FallbackPolicy::SampleData`] was chosen.
//! Filtering mirrors what the backend would do for the same parameters.
//!
//! [`FallbackPolicy::SampleData`]: crate::config::FallbackPolicy::SampleData

use crate::types::{Activity, Category, PriceLevel, SuggestionRequest, SuggestionResponse};

/// Limit applied by the backend when a request carries none
const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// The full sample category list, in a stable order
#[must_use]
pub(crate) fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            name: "Food".to_string(),
            description: Some("Restaurants and dining options".to_string()),
            sheet_name: "Food".to_string(),
        },
        Category {
            name: "Fun".to_string(),
            description: Some("Entertainment and recreational activities".to_string()),
            sheet_name: "Fun".to_string(),
        },
        Category {
            name: "Outdoor".to_string(),
            description: Some("Outdoor activities and adventures".to_string()),
            sheet_name: "Outdoor".to_string(),
        },
        Category {
            name: "Culture".to_string(),
            description: Some("Museums, theaters, and cultural experiences".to_string()),
            sheet_name: "Culture".to_string(),
        },
    ]
}

fn all_sample_activities() -> Vec<Activity> {
    vec![
        Activity::new("Pizza Place", PriceLevel::Medium, "Food")
            .with_description("Great local pizza joint")
            .with_location("Downtown"),
        Activity::new("Movie Theater", PriceLevel::Medium, "Fun")
            .with_description("Latest blockbusters")
            .with_location("Mall"),
        Activity::new("Hiking Trail", PriceLevel::Free, "Outdoor")
            .with_description("Scenic mountain trails")
            .with_location("State Park"),
        Activity::new("Art Museum", PriceLevel::Medium, "Culture")
            .with_description("Contemporary art exhibits")
            .with_location("Cultural District"),
    ]
}

/// Sample activities filtered the way the backend filters
#[must_use]
pub(crate) fn sample_activities(
    category: &str,
    price_level: Option<PriceLevel>,
) -> Vec<Activity> {
    all_sample_activities()
        .into_iter()
        .filter(|activity| {
            activity.category == category
                && price_level.map_or(true, |level| activity.price_level == level)
        })
        .collect()
}

/// A sample suggestion response honoring the request's filter and limit
#[must_use]
pub(crate) fn sample_suggestions(request: &SuggestionRequest) -> SuggestionResponse {
    let matching = sample_activities(&request.category, request.price_level);
    let total_found = matching.len();
    let limit = request
        .limit
        .map_or(DEFAULT_SUGGESTION_LIMIT, |limit| limit as usize);

    SuggestionResponse {
        activities: matching.into_iter().take(limit).collect(),
        total_found,
        category: request.category.clone(),
        price_level: request.price_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_stable() {
        let categories = sample_categories();
        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0].name, "Food");
        assert_eq!(categories[0].sheet_name, "Food");
    }

    #[test]
    fn activities_filter_by_category() {
        let activities = sample_activities("Food", None);
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].name, "Pizza Place");
    }

    #[test]
    fn activities_filter_by_price_level() {
        assert_eq!(sample_activities("Outdoor", Some(PriceLevel::Free)).len(), 1);
        assert!(sample_activities("Outdoor", Some(PriceLevel::Luxury)).is_empty());
    }

    #[test]
    fn unknown_category_yields_empty() {
        assert!(sample_activities("Nightlife", None).is_empty());
    }

    #[test]
    fn suggestions_honor_limit_and_report_total() {
        let request = SuggestionRequest::new("Food").with_limit(0);
        let response = sample_suggestions(&request);
        assert!(response.activities.is_empty());
        assert_eq!(response.total_found, 1);
        assert_eq!(response.category, "Food");
    }

    #[test]
    fn suggestions_echo_request_fields() {
        let request = SuggestionRequest::new("Culture").with_price_level(PriceLevel::Medium);
        let response = sample_suggestions(&request);
        assert_eq!(response.category, "Culture");
        assert_eq!(response.price_level, Some(PriceLevel::Medium));
        assert_eq!(response.activities.len(), 1);
    }
}
