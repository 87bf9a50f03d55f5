use std::sync::Arc;
use wayfarer_match::CompatibilityScorer;
use wayfarer_store::{InMemoryProfileRepository, ScoringConfig};

#[derive(Clone)]
pub struct AppState {
    pub profiles: Arc<InMemoryProfileRepository>,
    pub scorer: Arc<CompatibilityScorer>,
}

impl AppState {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self {
            profiles: Arc::new(InMemoryProfileRepository::new()),
            scorer: Arc::new(CompatibilityScorer::new(scoring)),
        }
    }
}
