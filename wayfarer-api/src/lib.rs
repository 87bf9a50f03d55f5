use axum::{
    http::Method,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod cities;
pub mod compatibility;
pub mod error;
pub mod state;
pub mod users;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/v1/compatibility", post(compatibility::compute_compatibility))
        .route(
            "/v1/users/{current}/compatibility/{other}",
            get(compatibility::get_user_compatibility),
        )
        .route("/v1/users/{id}", put(users::put_user).delete(users::delete_user))
        .route("/v1/cities", get(cities::list_cities))
        .route("/v1/cities/{city}/activities", get(cities::list_city_activities))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
