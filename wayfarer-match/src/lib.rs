pub mod overlap;
pub mod report;
pub mod scorer;
pub mod service;

pub use report::{CommonalityReport, TravelDateOverlap};
pub use scorer::CompatibilityScorer;
pub use service::compatibility_between;
