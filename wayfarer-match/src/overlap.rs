use std::collections::HashSet;
use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use wayfarer_core::TravelPlanEntry;

use crate::report::TravelDateOverlap;

/// Values of `current` that also appear in `other`, in `current`'s order.
/// A value repeated in `current` is reported once.
pub fn shared_values(current: &[String], other: &[String]) -> Vec<String> {
    let other: HashSet<&str> = other.iter().map(String::as_str).collect();
    let mut seen = HashSet::new();
    current
        .iter()
        .filter(|value| other.contains(value.as_str()) && seen.insert(value.as_str()))
        .cloned()
        .collect()
}

/// Like [`shared_values`] but every occurrence in `current` is tested on its own,
/// so repeats survive.
pub fn shared_values_with_repeats(current: &[String], other: &[String]) -> Vec<String> {
    let other: HashSet<&str> = other.iter().map(String::as_str).collect();
    current
        .iter()
        .filter(|value| other.contains(value.as_str()))
        .cloned()
        .collect()
}

/// Number of distinct values in `values`.
pub fn distinct_count(values: &[String]) -> usize {
    values.iter().map(String::as_str).collect::<HashSet<_>>().len()
}

/// True if `format` is a strftime pattern chrono can render for a plain date.
/// Patterns needing time or offset fields (`%H`, `%z`, ...) are rejected.
pub fn is_valid_date_format(format: &str) -> bool {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return false;
    }
    NaiveDate::from_ymd_opt(2000, 1, 31)
        .map(|date| render_date(date, format).is_some())
        .unwrap_or(false)
}

/// Renders `date` with `format`, or `None` if chrono cannot produce it.
fn render_date(date: NaiveDate, format: &str) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Label for a date, falling back to ISO `YYYY-MM-DD` on an unusable format.
fn date_label(date: NaiveDate, format: &str) -> String {
    render_date(date, format).unwrap_or_else(|| date.to_string())
}

/// Every (current, other) plan pair with the same destination and intersecting
/// date ranges, in nested-loop order. Pairs are not deduplicated.
///
/// Plans whose dates cannot be parsed never overlap anything.
pub fn overlapping_dates(
    current: &[TravelPlanEntry],
    other: &[TravelPlanEntry],
    label_format: &str,
) -> Vec<TravelDateOverlap> {
    let other_ranges: Vec<_> = other
        .iter()
        .filter_map(|plan| plan.date_range().map(|range| (plan, range)))
        .collect();

    let mut overlaps = Vec::new();
    for p1 in current {
        let Some((start1, end1)) = p1.date_range() else {
            continue;
        };
        for (p2, (start2, end2)) in &other_ranges {
            if p1.destination.is_empty() || p1.destination != p2.destination {
                continue;
            }
            if start1 <= *end2 && end1 >= *start2 {
                let from = start1.max(*start2);
                let to = end1.min(*end2);
                overlaps.push(TravelDateOverlap {
                    destination: p1.destination.clone(),
                    overlap_range_label: format!(
                        "{} - {}",
                        date_label(from, label_format),
                        date_label(to, label_format)
                    ),
                });
            }
        }
    }
    overlaps
}
