use wayfarer_core::{load_bundle, CoreResult, ProfileRepository};

use crate::report::CommonalityReport;
use crate::scorer::CompatibilityScorer;

/// Loads both users from `repo` and compares them.
///
/// `Ok(None)` means at least one profile is not available yet.
pub async fn compatibility_between<R>(
    repo: &R,
    scorer: &CompatibilityScorer,
    current_user_id: &str,
    other_user_id: &str,
) -> CoreResult<Option<CommonalityReport>>
where
    R: ProfileRepository + ?Sized,
{
    let (current, other) = tokio::try_join!(
        load_bundle(repo, current_user_id),
        load_bundle(repo, other_user_id),
    )?;

    let (Some(current), Some(other)) = (current, other) else {
        return Ok(None);
    };
    Ok(Some(scorer.compare(&current, &other)))
}
