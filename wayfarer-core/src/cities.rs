use serde::Serialize;

/// Broad grouping of city activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityCategory {
    Food,
    Nightlife,
    Outdoors,
    Culture,
    Entertainment,
    Shopping,
    Sports,
    Wellness,
}

impl ActivityCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ActivityCategory::Food => "Food & Drink",
            ActivityCategory::Nightlife => "Nightlife",
            ActivityCategory::Outdoors => "Outdoors",
            ActivityCategory::Culture => "Arts & Culture",
            ActivityCategory::Entertainment => "Entertainment",
            ActivityCategory::Shopping => "Shopping",
            ActivityCategory::Sports => "Sports",
            ActivityCategory::Wellness => "Wellness",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CityActivity {
    pub name: &'static str,
    pub category: ActivityCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityCatalogEntry {
    pub city: &'static str,
    pub activities: &'static [CityActivity],
}

const fn activity(name: &'static str, category: ActivityCategory) -> CityActivity {
    CityActivity { name, category }
}

use ActivityCategory::*;

static CATALOG: &[CityCatalogEntry] = &[
    CityCatalogEntry {
        city: "Los Angeles",
        activities: &[
            activity("Hiking Griffith Park", Outdoors),
            activity("Santa Monica Pier", Entertainment),
            activity("Getty Center", Culture),
            activity("Venice Beach Skatepark", Sports),
            activity("Taco Truck Tour", Food),
            activity("Rooftop Bars Downtown", Nightlife),
        ],
    },
    CityCatalogEntry {
        city: "New York",
        activities: &[
            activity("Central Park Picnic", Outdoors),
            activity("Broadway Show", Entertainment),
            activity("Metropolitan Museum", Culture),
            activity("Brooklyn Food Crawl", Food),
            activity("Jazz Club Night", Nightlife),
            activity("Fifth Avenue Shopping", Shopping),
        ],
    },
    CityCatalogEntry {
        city: "Las Vegas",
        activities: &[
            activity("Casino Night", Nightlife),
            activity("Red Rock Canyon", Outdoors),
            activity("Cirque du Soleil", Entertainment),
            activity("Buffet Hopping", Food),
            activity("Spa Day", Wellness),
        ],
    },
    CityCatalogEntry {
        city: "Miami",
        activities: &[
            activity("South Beach", Outdoors),
            activity("Wynwood Walls", Culture),
            activity("Little Havana Food Tour", Food),
            activity("Ocean Drive Clubs", Nightlife),
            activity("Heat Game", Sports),
        ],
    },
    CityCatalogEntry {
        city: "Paris",
        activities: &[
            activity("Louvre Museum", Culture),
            activity("Seine River Cruise", Entertainment),
            activity("Montmartre Walk", Outdoors),
            activity("Bakery Tour", Food),
            activity("Le Marais Boutiques", Shopping),
        ],
    },
    CityCatalogEntry {
        city: "Tokyo",
        activities: &[
            activity("Tsukiji Outer Market", Food),
            activity("Shibuya Nightlife", Nightlife),
            activity("Senso-ji Temple", Culture),
            activity("Onsen Day Trip", Wellness),
            activity("Sumo Tournament", Sports),
            activity("Akihabara Shopping", Shopping),
        ],
    },
    CityCatalogEntry {
        city: "London",
        activities: &[
            activity("British Museum", Culture),
            activity("West End Theatre", Entertainment),
            activity("Borough Market", Food),
            activity("Hyde Park Cycling", Outdoors),
            activity("Premier League Match", Sports),
        ],
    },
];

pub fn catalog() -> &'static [CityCatalogEntry] {
    CATALOG
}

/// Activities offered in `city` (case-insensitive, surrounding whitespace ignored).
pub fn activities_for_city(city: &str) -> Option<&'static [CityActivity]> {
    let city = city.trim();
    CATALOG
        .iter()
        .find(|entry| entry.city.eq_ignore_ascii_case(city))
        .map(|entry| entry.activities)
}

/// Looks up a single activity by exact name within a city.
pub fn find_activity(city: &str, activity_name: &str) -> Option<&'static CityActivity> {
    activities_for_city(city)?
        .iter()
        .find(|a| a.name == activity_name)
}
