use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use wayfarer_core::{CityInterestSelection, TravelPlanEntry, UserProfile};
use wayfarer_match::{compatibility_between, CommonalityReport};
use wayfarer_shared::models::events::CompatibilityComputedEvent;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Both users' data supplied inline. Anything may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompatibilityRequest {
    pub current_user: Option<UserProfile>,
    pub other_user: Option<UserProfile>,
    pub current_user_city_interests: Option<Vec<CityInterestSelection>>,
    pub other_user_city_interests: Option<Vec<CityInterestSelection>>,
    pub current_user_travel_plans: Option<Vec<TravelPlanEntry>>,
    pub other_user_travel_plans: Option<Vec<TravelPlanEntry>>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/compatibility
/// Responds with the report, or `null` while either profile is missing
pub async fn compute_compatibility(
    State(state): State<AppState>,
    Json(req): Json<CompatibilityRequest>,
) -> Json<Option<CommonalityReport>> {
    let report = state.scorer.compute_commonalities(
        req.current_user.as_ref(),
        req.other_user.as_ref(),
        req.current_user_city_interests.as_deref().unwrap_or(&[]),
        req.other_user_city_interests.as_deref().unwrap_or(&[]),
        req.current_user_travel_plans.as_deref().unwrap_or(&[]),
        req.other_user_travel_plans.as_deref().unwrap_or(&[]),
    );

    if let (Some(report), Some(current), Some(other)) = (&report, &req.current_user, &req.other_user) {
        log_computed(
            current.id.as_deref().unwrap_or("anonymous"),
            other.id.as_deref().unwrap_or("anonymous"),
            report,
        );
    }

    Json(report)
}

/// GET /v1/users/{current}/compatibility/{other}
pub async fn get_user_compatibility(
    State(state): State<AppState>,
    Path((current_id, other_id)): Path<(String, String)>,
) -> Result<Json<CommonalityReport>, AppError> {
    let report = compatibility_between(state.profiles.as_ref(), &state.scorer, &current_id, &other_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFoundError(format!(
                "Profile for {} or {} is not available",
                current_id, other_id
            ))
        })?;

    log_computed(&current_id, &other_id, &report);
    Ok(Json(report))
}

fn log_computed(current: &str, other: &str, report: &CommonalityReport) {
    let event = CompatibilityComputedEvent::new(
        current,
        other,
        report.compatibility_percentage,
        report.total_count,
    );
    tracing::info!(?event, "Compatibility computed");
}
