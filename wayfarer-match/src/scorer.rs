use tracing::{debug, warn};
use wayfarer_core::labels::travel_interest_label;
use wayfarer_core::{CityInterestSelection, ProfileBundle, QuizField, TravelPlanEntry, UserProfile};
use wayfarer_store::ScoringConfig;

use crate::overlap::{
    distinct_count, is_valid_date_format, overlapping_dates, shared_values,
    shared_values_with_repeats,
};
use crate::report::{CommonalityReport, TravelDateOverlap};

// Category weights; they add up to 100 at full overlap.
const INTEREST_WEIGHT: f64 = 30.0;
const ACTIVITY_WEIGHT: f64 = 25.0;
const EVENT_WEIGHT: f64 = 20.0;
const CITY_ACTIVITY_WEIGHT: f64 = 15.0;
const PERSONAL_WEIGHT: f64 = 10.0;

// Points inside the personal category.
const HOMETOWN_POINTS: f64 = 2.0;
const AGE_POINTS: f64 = 2.0;
const GENDER_POINTS: f64 = 1.0;
const TRAVEL_STYLE_POINTS: f64 = 2.0;
const VETERAN_POINTS: f64 = 1.0;
const ACTIVE_DUTY_POINTS: f64 = 1.0;
const PERSONAL_POINTS_TOTAL: f64 = 9.0;

/// Computes [`CommonalityReport`]s between pairs of users.
///
/// Holds only immutable configuration, so one instance can be shared freely
/// across tasks. Every call is a pure function of its arguments.
#[derive(Debug, Clone)]
pub struct CompatibilityScorer {
    config: ScoringConfig,
}

impl Default for CompatibilityScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl CompatibilityScorer {
    pub fn new(mut config: ScoringConfig) -> Self {
        if !is_valid_date_format(&config.date_label_format) {
            let fallback = ScoringConfig::default().date_label_format;
            warn!(
                "Invalid date_label_format {:?}, using {:?}",
                config.date_label_format, fallback
            );
            config.date_label_format = fallback;
        }
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Compares `current_user` against `other_user`.
    ///
    /// Returns `None` when either profile is missing, which callers should read as
    /// "not loaded yet". The percentage is asymmetric: it measures how much of the
    /// current user's own profile the other user matches.
    pub fn compute_commonalities(
        &self,
        current_user: Option<&UserProfile>,
        other_user: Option<&UserProfile>,
        current_city_interests: &[CityInterestSelection],
        other_city_interests: &[CityInterestSelection],
        current_travel_plans: &[TravelPlanEntry],
        other_travel_plans: &[TravelPlanEntry],
    ) -> Option<CommonalityReport> {
        let current = current_user?;
        let other = other_user?;

        let current_city_activities = activity_names(current_city_interests);
        let other_city_activities = activity_names(other_city_interests);

        let mut report = CommonalityReport {
            shared_interests: shared_values(&current.interests, &other.interests),
            shared_activities: shared_values(&current.activities, &other.activities),
            shared_events: shared_values(&current.events, &other.events),
            shared_city_activities: shared_values(&current_city_activities, &other_city_activities),
            shared_sexual_preferences: shared_values(&current.sexual_preference, &other.sexual_preference),
            shared_languages: shared_values(&current.languages_spoken, &other.languages_spoken),
            shared_countries: shared_values(&current.countries_visited, &other.countries_visited),
            both_veterans: current.is_veteran && other.is_veteran,
            both_active_duty: current.is_active_duty && other.is_active_duty,
            ..Default::default()
        };

        report.shared_travel_destinations = shared_values_with_repeats(
            &destinations(current_travel_plans),
            &destinations(other_travel_plans),
        );
        report.overlapping_travel_dates = self.overlapping_travel_dates(current_travel_plans, other_travel_plans);

        report.same_hometown = matches!(
            (current.hometown(), other.hometown()),
            (Some(a), Some(b)) if a == b
        );
        report.same_age = match (current.age, other.age) {
            (Some(a), Some(b)) => (a - b).abs() <= self.config.age_tolerance_years,
            _ => false,
        };
        report.same_gender = matches!(
            (current.gender(), other.gender()),
            (Some(a), Some(b)) if a == b
        );
        let shared_style = first_shared_style(current, other);
        report.same_travel_style = shared_style.is_some();

        report.shared_travel_intent = shared_travel_intent(current, other);
        report.other_commonalities = other_commonalities(&report, current.hometown(), shared_style);

        report.total_count = report.count_entries();
        report.compatibility_percentage = self.percentage(
            &report,
            distinct_count(&current.interests),
            distinct_count(&current.activities),
            distinct_count(&current.events),
            distinct_count(&current_city_activities),
        );

        debug!(
            interests = report.shared_interests.len(),
            activities = report.shared_activities.len(),
            events = report.shared_events.len(),
            city_activities = report.shared_city_activities.len(),
            overlapping_dates = report.overlapping_travel_dates.len(),
            total = report.total_count,
            percentage = report.compatibility_percentage,
            "Computed commonalities"
        );

        Some(report)
    }

    /// Same as [`compute_commonalities`](Self::compute_commonalities) for two
    /// fully loaded users.
    pub fn compare(&self, current: &ProfileBundle, other: &ProfileBundle) -> CommonalityReport {
        self.compute_commonalities(
            Some(&current.profile),
            Some(&other.profile),
            &current.city_interests,
            &other.city_interests,
            &current.travel_plans,
            &other.travel_plans,
        )
        .unwrap_or_default()
    }

    fn overlapping_travel_dates(
        &self,
        current: &[TravelPlanEntry],
        other: &[TravelPlanEntry],
    ) -> Vec<TravelDateOverlap> {
        let mut overlaps = overlapping_dates(current, other, &self.config.date_label_format);
        if self.config.dedupe_overlapping_dates {
            let mut seen = std::collections::HashSet::new();
            overlaps.retain(|o| seen.insert(o.clone()));
        }
        overlaps
    }

    fn percentage(
        &self,
        report: &CommonalityReport,
        own_interests: usize,
        own_activities: usize,
        own_events: usize,
        own_city_activities: usize,
    ) -> u32 {
        let interest_score = ratio(report.shared_interests.len(), own_interests) * INTEREST_WEIGHT;
        let activity_score = ratio(report.shared_activities.len(), own_activities) * ACTIVITY_WEIGHT;
        let event_score = ratio(report.shared_events.len(), own_events) * EVENT_WEIGHT;
        let city_activity_score =
            ratio(report.shared_city_activities.len(), own_city_activities) * CITY_ACTIVITY_WEIGHT;

        let personal_points = points(report.same_hometown, HOMETOWN_POINTS)
            + points(report.same_age, AGE_POINTS)
            + points(report.same_gender, GENDER_POINTS)
            + points(report.same_travel_style, TRAVEL_STYLE_POINTS)
            + points(report.both_veterans, VETERAN_POINTS)
            + points(report.both_active_duty, ACTIVE_DUTY_POINTS);
        let personal_score = personal_points / PERSONAL_POINTS_TOTAL * PERSONAL_WEIGHT;

        let mut total = interest_score + activity_score + event_score + city_activity_score + personal_score;
        if self.config.clamp_percentage {
            total = total.clamp(0.0, 100.0);
        }
        // `as` saturates and maps NaN to 0
        total.round() as u32
    }
}

fn ratio(shared: usize, own: usize) -> f64 {
    shared as f64 / own.max(1) as f64
}

fn points(flag: bool, value: f64) -> f64 {
    if flag { value } else { 0.0 }
}

// Blank names come from null or missing fields and never match.
fn activity_names(selections: &[CityInterestSelection]) -> Vec<String> {
    selections
        .iter()
        .filter(|s| !s.activity_name.is_empty())
        .map(|s| s.activity_name.clone())
        .collect()
}

fn destinations(plans: &[TravelPlanEntry]) -> Vec<String> {
    plans
        .iter()
        .filter(|p| !p.destination.is_empty())
        .map(|p| p.destination.clone())
        .collect()
}

/// First of the current user's travel styles the other user also lists.
fn first_shared_style<'a>(current: &'a UserProfile, other: &UserProfile) -> Option<&'a str> {
    current
        .travel_style
        .iter()
        .find(|style| other.travel_style.contains(style))
        .map(String::as_str)
}

fn shared_travel_intent(current: &UserProfile, other: &UserProfile) -> Vec<String> {
    let mut intent: Vec<String> = QuizField::ALL
        .iter()
        .filter_map(|field| match (current.quiz_answer(*field), other.quiz_answer(*field)) {
            (Some(a), Some(b)) if a == b => Some(field.label(a).to_string()),
            _ => None,
        })
        .collect();

    intent.extend(
        shared_values(current.travel_interests(), other.travel_interests())
            .iter()
            .map(|tag| travel_interest_label(tag).to_string()),
    );
    intent
}

fn other_commonalities(
    report: &CommonalityReport,
    hometown: Option<&str>,
    shared_style: Option<&str>,
) -> Vec<String> {
    let mut sentences = Vec::new();
    if report.both_veterans {
        sentences.push("Both Veterans".to_string());
    }
    if report.both_active_duty {
        sentences.push("Both Active Duty".to_string());
    }
    if report.same_hometown {
        if let Some(city) = hometown {
            sentences.push(format!("Both from {}", city));
        }
    }
    if report.same_age {
        sentences.push("Similar age".to_string());
    }
    if report.same_gender {
        sentences.push("Same gender".to_string());
    }
    if let Some(style) = shared_style {
        sentences.push(format!("Both love {} travel", style));
    }
    sentences
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn with_interests(interests: &[&str]) -> UserProfile {
        UserProfile {
            interests: strings(interests),
            ..Default::default()
        }
    }

    fn score(current: &UserProfile, other: &UserProfile) -> CommonalityReport {
        CompatibilityScorer::default()
            .compute_commonalities(Some(current), Some(other), &[], &[], &[], &[])
            .unwrap()
    }

    #[test]
    fn test_missing_profile_returns_none() {
        let scorer = CompatibilityScorer::default();
        let user = with_interests(&["jazz"]);
        assert!(scorer.compute_commonalities(None, Some(&user), &[], &[], &[], &[]).is_none());
        assert!(scorer.compute_commonalities(Some(&user), None, &[], &[], &[], &[]).is_none());
        assert!(scorer.compute_commonalities(None, None, &[], &[], &[], &[]).is_none());
    }

    #[test]
    fn test_score_is_asymmetric() {
        let shared = ["a", "b", "c", "d", "e"];
        let a = with_interests(&shared);
        let mut many: Vec<String> = (0..45).map(|i| format!("other-{}", i)).collect();
        many.extend(strings(&shared));
        let b = UserProfile {
            interests: many,
            ..Default::default()
        };

        let a_to_b = score(&a, &b);
        let b_to_a = score(&b, &a);
        assert_eq!(a_to_b.shared_interests.len(), 5);
        assert_eq!(b_to_a.shared_interests.len(), 5);
        assert_eq!(a_to_b.compatibility_percentage, 30);
        assert_eq!(b_to_a.compatibility_percentage, 3);
    }

    #[test]
    fn test_nothing_in_common() {
        let a = UserProfile {
            interests: strings(&["jazz"]),
            activities: strings(&["climbing"]),
            languages_spoken: strings(&["English"]),
            hometown_city: Some("Denver".to_string()),
            age: Some(25.0),
            gender: Some("female".to_string()),
            ..Default::default()
        };
        let b = UserProfile {
            interests: strings(&["opera"]),
            activities: strings(&["sailing"]),
            languages_spoken: strings(&["German"]),
            hometown_city: Some("Boston".to_string()),
            age: Some(40.0),
            gender: Some("male".to_string()),
            ..Default::default()
        };
        let report = score(&a, &b);
        assert_eq!(report.total_count, 0);
        assert_eq!(report.compatibility_percentage, 0);
        assert!(report.is_empty());
    }

    #[test]
    fn test_empty_own_interests_contribute_zero() {
        let a = UserProfile::default();
        let b = with_interests(&["jazz"]);
        let report = score(&a, &b);
        assert_eq!(report.compatibility_percentage, 0);
    }

    #[test]
    fn test_overlapping_travel_dates() {
        let scorer = CompatibilityScorer::default();
        let user = UserProfile::default();
        let current = vec![TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-10")];
        let other = vec![TravelPlanEntry::new("Paris", "2025-06-05", "2025-06-15")];
        let report = scorer
            .compute_commonalities(Some(&user), Some(&user), &[], &[], &current, &other)
            .unwrap();

        assert_eq!(report.overlapping_travel_dates.len(), 1);
        assert_eq!(report.overlapping_travel_dates[0].destination, "Paris");
        assert_eq!(report.overlapping_travel_dates[0].overlap_range_label, "6/5/2025 - 6/10/2025");
        assert_eq!(report.shared_travel_destinations, strings(&["Paris"]));
        assert_eq!(report.total_count, 2);
    }

    #[test]
    fn test_disjoint_travel_dates() {
        let scorer = CompatibilityScorer::default();
        let user = UserProfile::default();
        let current = vec![TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-05")];
        let other = vec![TravelPlanEntry::new("Paris", "2025-06-10", "2025-06-15")];
        let report = scorer
            .compute_commonalities(Some(&user), Some(&user), &[], &[], &current, &other)
            .unwrap();

        assert!(report.overlapping_travel_dates.is_empty());
        assert_eq!(report.shared_travel_destinations, strings(&["Paris"]));
    }

    #[test]
    fn test_repeated_destination_is_not_collapsed() {
        let scorer = CompatibilityScorer::default();
        let user = UserProfile::default();
        let current = vec![
            TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-10"),
            TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-10"),
        ];
        let other = vec![TravelPlanEntry::new("Paris", "2025-06-05", "2025-06-15")];
        let report = scorer
            .compute_commonalities(Some(&user), Some(&user), &[], &[], &current, &other)
            .unwrap();

        assert_eq!(report.shared_travel_destinations, strings(&["Paris", "Paris"]));
        assert_eq!(report.overlapping_travel_dates.len(), 2);
        assert_eq!(report.total_count, 4);
    }

    #[test]
    fn test_dedupe_overlapping_dates_option() {
        let scorer = CompatibilityScorer::new(ScoringConfig {
            dedupe_overlapping_dates: true,
            ..Default::default()
        });
        let user = UserProfile::default();
        let current = vec![
            TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-10"),
            TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-10"),
        ];
        let other = vec![TravelPlanEntry::new("Paris", "2025-06-05", "2025-06-15")];
        let report = scorer
            .compute_commonalities(Some(&user), Some(&user), &[], &[], &current, &other)
            .unwrap();

        assert_eq!(report.overlapping_travel_dates.len(), 1);
    }

    #[test]
    fn test_snake_case_quiz_answer_matches_camel_case() {
        let a: UserProfile = serde_json::from_str(r#"{ "travel_why": "adventure" }"#).unwrap();
        let b: UserProfile = serde_json::from_str(r#"{ "travelWhy": "adventure" }"#).unwrap();
        let report = score(&a, &b);
        assert_eq!(report.shared_travel_intent, strings(&["Adventure & Discovery"]));
        assert_eq!(report.total_count, 1);
    }

    #[test]
    fn test_travel_intent_order_and_fallback_labels() {
        let a: UserProfile = serde_json::from_str(
            r#"{
                "travelGroup": "solo",
                "travelBudget": "shoestring",
                "travelHow": "spontaneous",
                "travelWhy": "culture",
                "travelInterests": ["food", "knitting", "art"]
            }"#,
        )
        .unwrap();
        let b: UserProfile = serde_json::from_str(
            r#"{
                "travel_group": "solo",
                "travel_budget": "shoestring",
                "travel_how": "spontaneous",
                "travelWhy": "relaxation",
                "travel_interests": ["art", "knitting"]
            }"#,
        )
        .unwrap();
        let report = score(&a, &b);
        assert_eq!(
            report.shared_travel_intent,
            strings(&[
                "Spontaneous Adventures",
                "shoestring",
                "Solo Travel",
                "knitting",
                "Art & Design",
            ])
        );
    }

    #[test]
    fn test_personal_flags_and_sentences() {
        let a = UserProfile {
            is_veteran: true,
            is_active_duty: true,
            hometown_city: Some("Austin".to_string()),
            age: Some(30.0),
            gender: Some("female".to_string()),
            travel_style: strings(&["luxury", "backpacking", "roadtrip"]),
            ..Default::default()
        };
        let b = UserProfile {
            is_veteran: true,
            is_active_duty: false,
            hometown_city: Some("Austin".to_string()),
            age: Some(32.0),
            gender: Some("female".to_string()),
            travel_style: strings(&["roadtrip", "backpacking"]),
            ..Default::default()
        };
        let report = score(&a, &b);
        assert!(report.both_veterans);
        assert!(!report.both_active_duty);
        assert!(report.same_hometown);
        assert!(report.same_age);
        assert!(report.same_gender);
        assert!(report.same_travel_style);
        assert_eq!(
            report.other_commonalities,
            strings(&[
                "Both Veterans",
                "Both from Austin",
                "Similar age",
                "Same gender",
                "Both love backpacking travel",
            ])
        );
        assert_eq!(report.total_count, 5);
        // (2 + 2 + 1 + 2 + 1) / 9 * 10 = 8.89
        assert_eq!(report.compatibility_percentage, 9);
    }

    #[test]
    fn test_age_outside_tolerance() {
        let a = UserProfile { age: Some(30.0), ..Default::default() };
        let b = UserProfile { age: Some(33.0), ..Default::default() };
        assert!(!score(&a, &b).same_age);

        let only_one = UserProfile::default();
        assert!(!score(&a, &only_one).same_age);
    }

    #[test]
    fn test_blank_hometowns_do_not_match() {
        let a = UserProfile { hometown_city: Some(String::new()), ..Default::default() };
        let report = score(&a, &a.clone());
        assert!(!report.same_hometown);
        assert!(report.other_commonalities.is_empty());
    }

    #[test]
    fn test_full_overlap_scores_one_hundred() {
        let profile = UserProfile {
            interests: strings(&["jazz", "hiking"]),
            activities: strings(&["climbing"]),
            events: strings(&["marathon"]),
            is_veteran: true,
            is_active_duty: true,
            hometown_city: Some("Reno".to_string()),
            age: Some(28.0),
            gender: Some("male".to_string()),
            travel_style: strings(&["roadtrip"]),
            ..Default::default()
        };
        let city = vec![CityInterestSelection::new("Casino Night")];
        let report = CompatibilityScorer::default()
            .compute_commonalities(Some(&profile), Some(&profile), &city, &city, &[], &[])
            .unwrap();
        assert_eq!(report.shared_city_activities, strings(&["Casino Night"]));
        assert_eq!(report.compatibility_percentage, 100);
    }

    #[test]
    fn test_clamp_keeps_percentage_in_range() {
        let scorer = CompatibilityScorer::default();
        let report = CommonalityReport {
            shared_interests: strings(&["a", "b", "c"]),
            shared_activities: strings(&["x", "y"]),
            shared_events: strings(&["e"]),
            shared_city_activities: strings(&["c"]),
            same_hometown: true,
            same_age: true,
            same_gender: true,
            same_travel_style: true,
            both_veterans: true,
            both_active_duty: true,
            ..Default::default()
        };
        // Denominators smaller than the shared counts push the raw sum past 100.
        assert_eq!(scorer.percentage(&report, 1, 1, 1, 1), 100);

        let unclamped = CompatibilityScorer::new(ScoringConfig {
            clamp_percentage: false,
            ..Default::default()
        });
        assert_eq!(unclamped.percentage(&report, 1, 1, 1, 1), 90 + 50 + 20 + 15 + 10);
    }

    #[test]
    fn test_shared_lists_follow_current_user_order() {
        let a = UserProfile {
            languages_spoken: strings(&["Spanish", "English", "French"]),
            countries_visited: strings(&["Peru", "Japan"]),
            sexual_preference: strings(&["women"]),
            events: strings(&["Coachella", "SXSW"]),
            ..Default::default()
        };
        let b = UserProfile {
            languages_spoken: strings(&["French", "Spanish"]),
            countries_visited: strings(&["Japan", "Peru"]),
            sexual_preference: strings(&["women", "men"]),
            events: strings(&["SXSW"]),
            ..Default::default()
        };
        let report = score(&a, &b);
        assert_eq!(report.shared_languages, strings(&["Spanish", "French"]));
        assert_eq!(report.shared_countries, strings(&["Peru", "Japan"]));
        assert_eq!(report.shared_sexual_preferences, strings(&["women"]));
        assert_eq!(report.shared_events, strings(&["SXSW"]));
        // 1/2 events * 20
        assert_eq!(report.compatibility_percentage, 10);
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let scorer = CompatibilityScorer::new(ScoringConfig {
            date_label_format: "%Q".to_string(),
            ..Default::default()
        });
        assert_eq!(scorer.config().date_label_format, "%-m/%-d/%Y");
    }

    #[test]
    fn test_null_plan_fields_contribute_nothing() {
        let plans: Vec<TravelPlanEntry> = serde_json::from_str(
            r#"[
                { "destination": "Paris", "startDate": "2025-06-01", "endDate": null },
                { "destination": null, "startDate": "2025-06-01", "endDate": "2025-06-10" }
            ]"#,
        )
        .unwrap();
        let selections: Vec<CityInterestSelection> =
            serde_json::from_str(r#"[{ "activityName": null }]"#).unwrap();
        let user = UserProfile::default();

        let report = CompatibilityScorer::default()
            .compute_commonalities(Some(&user), Some(&user), &selections, &selections, &plans, &plans)
            .unwrap();
        assert_eq!(report.shared_travel_destinations, strings(&["Paris"]));
        assert!(report.overlapping_travel_dates.is_empty());
        assert!(report.shared_city_activities.is_empty());
        assert_eq!(report.total_count, 1);
    }

    #[test]
    fn test_time_only_date_format_falls_back() {
        let scorer = CompatibilityScorer::new(ScoringConfig {
            date_label_format: "%Y-%m-%d %H:%M".to_string(),
            ..Default::default()
        });
        assert_eq!(scorer.config().date_label_format, "%-m/%-d/%Y");

        let user = UserProfile::default();
        let current = vec![TravelPlanEntry::new("Paris", "2025-06-01", "2025-06-10")];
        let other = vec![TravelPlanEntry::new("Paris", "2025-06-05", "2025-06-15")];
        let report = scorer
            .compute_commonalities(Some(&user), Some(&user), &[], &[], &current, &other)
            .unwrap();
        assert_eq!(report.overlapping_travel_dates[0].overlap_range_label, "6/5/2025 - 6/10/2025");
    }

    #[test]
    fn test_compute_is_idempotent() {
        let a: UserProfile = serde_json::from_str(
            r#"{ "interests": ["jazz", "chess"], "travelWhy": "culture", "age": 40 }"#,
        )
        .unwrap();
        let b: UserProfile = serde_json::from_str(
            r#"{ "interests": ["chess"], "travel_why": "culture", "age": 41.5 }"#,
        )
        .unwrap();
        let plans = vec![TravelPlanEntry::new("Lima", "2025-02-01", "2025-02-10")];
        let scorer = CompatibilityScorer::default();

        let first = scorer.compute_commonalities(Some(&a), Some(&b), &[], &[], &plans, &plans);
        let second = scorer.compute_commonalities(Some(&a), Some(&b), &[], &[], &plans, &plans);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_compare_bundles() {
        let current = ProfileBundle {
            profile: with_interests(&["jazz"]),
            city_interests: vec![CityInterestSelection::new("Jazz Club Night")],
            travel_plans: vec![],
        };
        let other = ProfileBundle {
            profile: with_interests(&["jazz", "opera"]),
            city_interests: vec![
                CityInterestSelection::new("Broadway Show"),
                CityInterestSelection::new("Jazz Club Night"),
            ],
            travel_plans: vec![],
        };
        let report = CompatibilityScorer::default().compare(&current, &other);
        assert_eq!(report.shared_city_activities, strings(&["Jazz Club Night"]));
        // 30 + 15
        assert_eq!(report.compatibility_percentage, 45);
    }
}
