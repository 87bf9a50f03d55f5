pub mod app_config;
pub mod memory_repo;

pub use app_config::{Config, ScoringConfig};
pub use memory_repo::InMemoryProfileRepository;
