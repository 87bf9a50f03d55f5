pub mod profile;
pub mod labels;
pub mod cities;
pub mod repository;

pub use profile::{first_present, CityInterestSelection, Present, TravelPlanEntry, UserProfile};
pub use labels::QuizField;
pub use repository::{load_bundle, ProfileBundle, ProfileRepository};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Profile store error: {0}")]
    StoreError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
