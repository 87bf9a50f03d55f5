use serde::{Deserialize, Serialize};

/// A destination both users will be in at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelDateOverlap {
    pub destination: String,
    /// Human readable `"{start} - {end}"` of the shared date range.
    pub overlap_range_label: String,
}

/// What two users have in common, seen from the current user's side.
///
/// Built fresh for every comparison; list order follows the current user's data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonalityReport {
    pub shared_interests: Vec<String>,
    pub shared_activities: Vec<String>,
    pub shared_events: Vec<String>,
    pub shared_city_activities: Vec<String>,
    pub shared_sexual_preferences: Vec<String>,
    pub shared_languages: Vec<String>,
    pub shared_countries: Vec<String>,
    pub shared_travel_destinations: Vec<String>,
    pub overlapping_travel_dates: Vec<TravelDateOverlap>,

    pub both_veterans: bool,
    pub both_active_duty: bool,
    pub same_hometown: bool,
    pub same_age: bool,
    pub same_gender: bool,
    pub same_travel_style: bool,

    pub shared_travel_intent: Vec<String>,
    pub other_commonalities: Vec<String>,

    pub total_count: usize,
    pub compatibility_percentage: u32,
}

impl CommonalityReport {
    /// Nothing at all in common ("No commonalities found").
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    /// Number of entries across every list in the report.
    pub(crate) fn count_entries(&self) -> usize {
        [
            &self.shared_interests,
            &self.shared_activities,
            &self.shared_events,
            &self.shared_city_activities,
            &self.shared_sexual_preferences,
            &self.shared_languages,
            &self.shared_countries,
            &self.shared_travel_destinations,
            &self.shared_travel_intent,
            &self.other_commonalities,
        ]
        .iter()
        .map(|list| list.len())
        .sum::<usize>()
            + self.overlapping_travel_dates.len()
    }
}
