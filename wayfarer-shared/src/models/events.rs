use uuid::Uuid;
use crate::pii::Masked;

/// Emitted whenever a compatibility report is produced for a pair of users.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct CompatibilityComputedEvent {
    pub event_id: Uuid,
    pub current_user: Masked<String>,
    pub other_user: Masked<String>,
    pub compatibility_percentage: u32,
    pub total_count: usize,
    pub timestamp: i64,
}

impl CompatibilityComputedEvent {
    pub fn new(
        current_user: impl Into<String>,
        other_user: impl Into<String>,
        compatibility_percentage: u32,
        total_count: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            current_user: Masked(current_user.into()),
            other_user: Masked(other_user.into()),
            compatibility_percentage,
            total_count,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}

/// Emitted when a user's profile bundle is replaced in the profile store.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ProfileUpdatedEvent {
    pub user: Masked<String>,
    pub city_interest_count: usize,
    pub travel_plan_count: usize,
    pub timestamp: i64,
}
