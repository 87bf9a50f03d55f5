use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;
use wayfarer_core::{CityInterestSelection, ProfileBundle, TravelPlanEntry, UserProfile};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutUserRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub city_interests: Vec<CityInterestSelection>,
    #[serde(default)]
    pub travel_plans: Vec<TravelPlanEntry>,
}

/// PUT /v1/users/{id}
/// Replace a user's profile, city interests and travel plans
pub async fn put_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    axum::Json(req): axum::Json<PutUserRequest>,
) -> Result<StatusCode, AppError> {
    if let Some(body_id) = req.profile.id.as_deref() {
        if body_id != user_id {
            return Err(AppError::ValidationError(format!(
                "Profile id {} does not match path id {}",
                body_id, user_id
            )));
        }
    }

    state
        .profiles
        .replace_bundle(
            &user_id,
            ProfileBundle {
                profile: req.profile,
                city_interests: req.city_interests,
                travel_plans: req.travel_plans,
            },
        )
        .await;

    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /v1/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.profiles.remove(&user_id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFoundError(format!("User {} not found", user_id)))
    }
}
