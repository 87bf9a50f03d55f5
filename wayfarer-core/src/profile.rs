use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::labels::QuizField;

/// Treats an explicit JSON `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Profile record as served by the user-data service.
///
/// Every field is optional on the wire. Travel-quiz answers and travel interests
/// show up under either a camelCase or a snake_case key depending on which
/// client wrote the record, so both are kept and resolved through
/// [`first_present`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub activities: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub events: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub sexual_preference: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub languages_spoken: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub countries_visited: Vec<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub is_veteran: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_active_duty: bool,

    pub hometown_city: Option<String>,
    pub age: Option<f64>,
    pub gender: Option<String>,

    #[serde(deserialize_with = "null_as_default")]
    pub travel_style: Vec<String>,

    pub travel_why: Option<String>,
    #[serde(rename = "travel_why", skip_serializing_if = "Option::is_none")]
    pub travel_why_snake: Option<String>,
    pub travel_how: Option<String>,
    #[serde(rename = "travel_how", skip_serializing_if = "Option::is_none")]
    pub travel_how_snake: Option<String>,
    pub travel_budget: Option<String>,
    #[serde(rename = "travel_budget", skip_serializing_if = "Option::is_none")]
    pub travel_budget_snake: Option<String>,
    pub travel_group: Option<String>,
    #[serde(rename = "travel_group", skip_serializing_if = "Option::is_none")]
    pub travel_group_snake: Option<String>,

    pub travel_interests: Option<Vec<String>>,
    #[serde(rename = "travel_interests", skip_serializing_if = "Option::is_none")]
    pub travel_interests_snake: Option<Vec<String>>,
}

impl UserProfile {
    /// Resolved answer to one of the travel-quiz questions, camelCase key first.
    pub fn quiz_answer(&self, field: QuizField) -> Option<&str> {
        let (camel, snake) = match field {
            QuizField::Why => (&self.travel_why, &self.travel_why_snake),
            QuizField::How => (&self.travel_how, &self.travel_how_snake),
            QuizField::Budget => (&self.travel_budget, &self.travel_budget_snake),
            QuizField::Group => (&self.travel_group, &self.travel_group_snake),
        };
        first_present(&[camel.as_deref(), snake.as_deref()])
    }

    /// Travel interest tags, camelCase key first. Empty when neither key is set.
    pub fn travel_interests(&self) -> &[String] {
        first_present(&[
            self.travel_interests.as_deref(),
            self.travel_interests_snake.as_deref(),
        ])
        .unwrap_or(&[])
    }

    /// Hometown, ignoring blank strings.
    pub fn hometown(&self) -> Option<&str> {
        first_present(&[self.hometown_city.as_deref()])
    }

    pub fn gender(&self) -> Option<&str> {
        first_present(&[self.gender.as_deref()])
    }
}

/// Whether a value read from the profile counts as "set".
pub trait Present {
    fn is_present(&self) -> bool;
}

/// Blank strings count as unset.
impl Present for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

/// A list under a key counts as set even when empty.
impl<T> Present for [T] {
    fn is_present(&self) -> bool {
        true
    }
}

/// Returns the first candidate that exists and is present.
///
/// All alternate-key lookups on [`UserProfile`] go through here, so a new key
/// variant only needs to be added to the candidate list.
pub fn first_present<'a, T>(candidates: &[Option<&'a T>]) -> Option<&'a T>
where
    T: Present + ?Sized,
{
    candidates
        .iter()
        .flatten()
        .copied()
        .find(|value| value.is_present())
}

/// One activity a user marked as interesting in some city.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CityInterestSelection {
    #[serde(deserialize_with = "null_as_default")]
    pub activity_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
}

impl CityInterestSelection {
    pub fn new(activity_name: impl Into<String>) -> Self {
        Self {
            activity_name: activity_name.into(),
            city: None,
        }
    }
}

/// One entry of a user's itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TravelPlanEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
}

impl TravelPlanEntry {
    pub fn new(
        destination: impl Into<String>,
        start_date: impl Into<String>,
        end_date: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            start_date: start_date.into(),
            end_date: end_date.into(),
        }
    }

    /// Parsed `(start, end)` dates, or `None` if either side is unparseable.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let start = parse_plan_date(&self.start_date)?;
        let end = parse_plan_date(&self.end_date)?;
        Some((start, end))
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date is used).
pub fn parse_plan_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.date_naive()),
        Err(e) => {
            tracing::debug!("Ignoring unparseable travel plan date {:?}: {}", raw, e);
            None
        }
    }
}
