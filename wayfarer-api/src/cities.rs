use axum::{extract::Path, Json};
use serde::Serialize;
use wayfarer_core::cities::{activities_for_city, catalog, ActivityCategory};

use crate::error::AppError;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityActivityResponse {
    pub name: &'static str,
    pub category: ActivityCategory,
    pub category_label: &'static str,
}

/// GET /v1/cities
pub async fn list_cities() -> Json<Vec<&'static str>> {
    Json(catalog().iter().map(|entry| entry.city).collect())
}

/// GET /v1/cities/{city}/activities
pub async fn list_city_activities(
    Path(city): Path<String>,
) -> Result<Json<Vec<CityActivityResponse>>, AppError> {
    let activities = activities_for_city(&city)
        .ok_or_else(|| AppError::NotFoundError(format!("Unknown city {}", city)))?;

    Ok(Json(
        activities
            .iter()
            .map(|a| CityActivityResponse {
                name: a.name,
                category: a.category,
                category_label: a.category.label(),
            })
            .collect(),
    ))
}
