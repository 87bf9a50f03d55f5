use async_trait::async_trait;

use crate::profile::{CityInterestSelection, TravelPlanEntry, UserProfile};
use crate::CoreResult;

/// Read access to the user-data service.
///
/// An unknown user is not an error: `get_profile` yields `Ok(None)` and the list
/// lookups yield empty vectors.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn get_profile(&self, user_id: &str) -> CoreResult<Option<UserProfile>>;

    async fn list_city_interests(&self, user_id: &str) -> CoreResult<Vec<CityInterestSelection>>;

    async fn list_travel_plans(&self, user_id: &str) -> CoreResult<Vec<TravelPlanEntry>>;

    /// Profile, city interests and travel plans read together. Stores that can
    /// serve one consistent snapshot should override this.
    async fn get_bundle(&self, user_id: &str) -> CoreResult<Option<ProfileBundle>> {
        let Some(profile) = self.get_profile(user_id).await? else {
            return Ok(None);
        };
        let city_interests = self.list_city_interests(user_id).await?;
        let travel_plans = self.list_travel_plans(user_id).await?;

        Ok(Some(ProfileBundle {
            profile,
            city_interests,
            travel_plans,
        }))
    }
}

/// Everything the scorer needs about one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileBundle {
    pub profile: UserProfile,
    pub city_interests: Vec<CityInterestSelection>,
    pub travel_plans: Vec<TravelPlanEntry>,
}

/// Loads a user's profile together with their city interests and travel plans.
/// Returns `Ok(None)` while the profile itself is unavailable.
pub async fn load_bundle<R>(repo: &R, user_id: &str) -> CoreResult<Option<ProfileBundle>>
where
    R: ProfileRepository + ?Sized,
{
    let bundle = repo.get_bundle(user_id).await?;
    if bundle.is_none() {
        tracing::debug!("Profile {} not available", user_id);
    }
    Ok(bundle)
}
