use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;
use wayfarer_core::{
    CityInterestSelection, CoreResult, ProfileBundle, ProfileRepository, TravelPlanEntry,
    UserProfile,
};
use wayfarer_shared::models::events::ProfileUpdatedEvent;
use wayfarer_shared::Masked;

/// Everything stored for one user. Lists may be set before the profile arrives.
#[derive(Debug, Clone, Default)]
struct UserRecord {
    profile: Option<UserProfile>,
    city_interests: Vec<CityInterestSelection>,
    travel_plans: Vec<TravelPlanEntry>,
}

/// Process-local stand-in for the user-data service.
///
/// All of a user's data sits behind one lock, so a bundle replace or remove is
/// never observed half done.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    users: RwLock<HashMap<String, UserRecord>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert_profile(&self, user_id: &str, profile: UserProfile) {
        let mut users = self.users.write().await;
        users.entry(user_id.to_string()).or_default().profile = Some(profile);
    }

    pub async fn set_city_interests(&self, user_id: &str, selections: Vec<CityInterestSelection>) {
        let mut users = self.users.write().await;
        users.entry(user_id.to_string()).or_default().city_interests = selections;
    }

    pub async fn set_travel_plans(&self, user_id: &str, plans: Vec<TravelPlanEntry>) {
        let mut users = self.users.write().await;
        users.entry(user_id.to_string()).or_default().travel_plans = plans;
    }

    /// Replaces everything stored for `user_id` in one go.
    pub async fn replace_bundle(&self, user_id: &str, bundle: ProfileBundle) -> ProfileUpdatedEvent {
        let event = ProfileUpdatedEvent {
            user: Masked(user_id.to_string()),
            city_interest_count: bundle.city_interests.len(),
            travel_plan_count: bundle.travel_plans.len(),
            timestamp: chrono::Utc::now().timestamp(),
        };

        self.users.write().await.insert(
            user_id.to_string(),
            UserRecord {
                profile: Some(bundle.profile),
                city_interests: bundle.city_interests,
                travel_plans: bundle.travel_plans,
            },
        );

        info!(?event, "Profile bundle replaced");
        event
    }

    /// Drops all data for `user_id`; true if a profile was stored.
    pub async fn remove(&self, user_id: &str) -> bool {
        self.users
            .write()
            .await
            .remove(user_id)
            .is_some_and(|record| record.profile.is_some())
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_profile(&self, user_id: &str) -> CoreResult<Option<UserProfile>> {
        Ok(self
            .users
            .read()
            .await
            .get(user_id)
            .and_then(|record| record.profile.clone()))
    }

    async fn list_city_interests(&self, user_id: &str) -> CoreResult<Vec<CityInterestSelection>> {
        Ok(self
            .users
            .read()
            .await
            .get(user_id)
            .map(|record| record.city_interests.clone())
            .unwrap_or_default())
    }

    async fn list_travel_plans(&self, user_id: &str) -> CoreResult<Vec<TravelPlanEntry>> {
        Ok(self
            .users
            .read()
            .await
            .get(user_id)
            .map(|record| record.travel_plans.clone())
            .unwrap_or_default())
    }

    async fn get_bundle(&self, user_id: &str) -> CoreResult<Option<ProfileBundle>> {
        let users = self.users.read().await;
        Ok(users.get(user_id).and_then(|record| {
            Some(ProfileBundle {
                profile: record.profile.clone()?,
                city_interests: record.city_interests.clone(),
                travel_plans: record.travel_plans.clone(),
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use wayfarer_core::load_bundle;

    fn bundle(interest: &str, plan_count: usize) -> ProfileBundle {
        ProfileBundle {
            profile: UserProfile {
                interests: vec![interest.to_string()],
                ..Default::default()
            },
            city_interests: vec![],
            travel_plans: (0..plan_count)
                .map(|_| TravelPlanEntry::new("Rome", "2025-05-01", "2025-05-04"))
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_unknown_user_reads_empty() {
        let repo = InMemoryProfileRepository::new();
        assert!(repo.get_profile("nobody").await.unwrap().is_none());
        assert!(repo.list_city_interests("nobody").await.unwrap().is_empty());
        assert!(repo.list_travel_plans("nobody").await.unwrap().is_empty());
        assert!(repo.get_bundle("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lists_without_profile_do_not_create_profile() {
        let repo = InMemoryProfileRepository::new();
        repo.set_travel_plans("u1", vec![TravelPlanEntry::new("Rome", "2025-05-01", "2025-05-04")])
            .await;
        assert!(repo.get_profile("u1").await.unwrap().is_none());
        assert!(load_bundle(&repo, "u1").await.unwrap().is_none());
        assert!(!repo.remove("u1").await);

        repo.set_travel_plans("u1", vec![TravelPlanEntry::new("Rome", "2025-05-01", "2025-05-04")])
            .await;
        repo.upsert_profile("u1", UserProfile::default()).await;
        let loaded = load_bundle(&repo, "u1").await.unwrap().unwrap();
        assert_eq!(loaded.travel_plans.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_bundle() {
        let repo = InMemoryProfileRepository::new();
        let bundle = ProfileBundle {
            profile: UserProfile {
                interests: vec!["chess".to_string()],
                ..Default::default()
            },
            city_interests: vec![CityInterestSelection::new("Broadway Show")],
            travel_plans: vec![TravelPlanEntry::new("Tokyo", "2025-03-01", "2025-03-09")],
        };

        let event = repo.replace_bundle("u2", bundle.clone()).await;
        assert_eq!(event.city_interest_count, 1);
        assert_eq!(event.travel_plan_count, 1);
        assert_eq!(event.user.inner(), "u2");

        let loaded = load_bundle(&repo, "u2").await.unwrap().unwrap();
        assert_eq!(loaded, bundle);

        assert!(repo.remove("u2").await);
        assert!(!repo.remove("u2").await);
        assert!(repo.list_travel_plans("u2").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_replace_never_mixes_bundles() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        repo.replace_bundle("u3", bundle("old", 1)).await;

        let writer = {
            let repo = repo.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    let next = if i % 2 == 0 { bundle("new", 3) } else { bundle("old", 1) };
                    repo.replace_bundle("u3", next).await;
                }
            })
        };

        for _ in 0..200 {
            let loaded = load_bundle(repo.as_ref(), "u3").await.unwrap().unwrap();
            let expected_plans = if loaded.profile.interests[0] == "new" { 3 } else { 1 };
            assert_eq!(loaded.travel_plans.len(), expected_plans);
            tokio::task::yield_now().await;
        }
        writer.await.unwrap();
    }
}
