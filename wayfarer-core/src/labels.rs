use serde::{Deserialize, Serialize};

/// The four categorical travel-quiz questions on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuizField {
    Why,
    How,
    Budget,
    Group,
}

impl QuizField {
    /// Order in which quiz matches are reported.
    pub const ALL: [QuizField; 4] = [QuizField::Why, QuizField::How, QuizField::Budget, QuizField::Group];

    /// Display label for a raw answer; unknown answers are returned verbatim.
    pub fn label<'a>(&self, raw: &'a str) -> &'a str {
        let table = match self {
            QuizField::Why => TRAVEL_WHY_LABELS,
            QuizField::How => TRAVEL_HOW_LABELS,
            QuizField::Budget => TRAVEL_BUDGET_LABELS,
            QuizField::Group => TRAVEL_GROUP_LABELS,
        };
        lookup(table, raw)
    }
}

const TRAVEL_WHY_LABELS: &[(&str, &str)] = &[
    ("adventure", "Adventure & Discovery"),
    ("connection", "Connection & Community"),
    ("culture", "Culture & History"),
    ("relaxation", "Relaxation & Wellness"),
];

const TRAVEL_HOW_LABELS: &[(&str, &str)] = &[
    ("planned", "Carefully Planned Trips"),
    ("spontaneous", "Spontaneous Adventures"),
    ("flexible", "Flexible Itineraries"),
    ("guided", "Guided Tours"),
];

const TRAVEL_BUDGET_LABELS: &[(&str, &str)] = &[
    ("budget", "Budget-Friendly Travel"),
    ("moderate", "Moderate Spending"),
    ("comfort", "Comfort Travel"),
    ("luxury", "Luxury Travel"),
];

const TRAVEL_GROUP_LABELS: &[(&str, &str)] = &[
    ("solo", "Solo Travel"),
    ("couple", "Couples Travel"),
    ("friends", "Traveling with Friends"),
    ("family", "Family Travel"),
    ("group", "Group Tours"),
];

const TRAVEL_INTEREST_LABELS: &[(&str, &str)] = &[
    ("food", "Food & Cuisine"),
    ("nightlife", "Nightlife"),
    ("nature", "Nature & Outdoors"),
    ("history", "History & Museums"),
    ("art", "Art & Design"),
    ("beaches", "Beaches"),
    ("shopping", "Shopping"),
    ("sports", "Sports"),
    ("music", "Live Music"),
    ("photography", "Photography"),
    ("wellness", "Wellness & Spa"),
    ("architecture", "Architecture"),
];

/// Display label for a travel-interest tag; unknown tags are returned verbatim.
pub fn travel_interest_label(raw: &str) -> &str {
    lookup(TRAVEL_INTEREST_LABELS, raw)
}

fn lookup<'a>(table: &'static [(&'static str, &'static str)], raw: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| *key == raw)
        .map(|(_, label)| *label)
        .unwrap_or(raw)
}
