//! Progression engine
//!
//! Turns experience gains into level-ups and records what a finished
//! activity leaves behind on the profile.

use crate::models::{Profile, RewardPayload};
use tracing::info;

/// Threshold after one level-up: 1.5x the old one, rounded down
pub fn next_threshold(threshold: u64) -> u64 {
    threshold.saturating_add(threshold / 2)
}

/// Add experience and normalize overflow into level-ups.
///
/// Thresholds are recomputed one level at a time because the rounding
/// makes the sequence non-uniform (100, 150, 225, 337, ...).
pub fn grant_experience(profile: &mut Profile, amount: u64) {
    profile.experience = profile.experience.saturating_add(amount);

    let start_level = profile.level;
    while profile.threshold > 0 && profile.experience >= profile.threshold {
        profile.experience -= profile.threshold;
        profile.level = profile.level.saturating_add(1);
        profile.threshold = next_threshold(profile.threshold);
    }

    if profile.level > start_level {
        info!(
            level = profile.level,
            threshold = profile.threshold,
            "level up"
        );
    }
}

/// Apply a finished activity to the profile and build its reward payload.
///
/// Badges and the activity log are appended without deduplication.
pub fn complete_activity(
    profile: &mut Profile,
    kind: &str,
    experience: u64,
    badges: Vec<String>,
    items: Vec<String>,
) -> RewardPayload {
    grant_experience(profile, experience);
    profile.completed_activities.push(kind.to_string());
    profile.badges.extend(badges.iter().cloned());
    profile.stats.activities_completed = profile.stats.activities_completed.saturating_add(1);

    info!(kind, experience, badges = badges.len(), "activity completed");

    RewardPayload {
        experience,
        badges,
        items,
    }
}

/// Progress towards the next level as a whole percentage
pub fn progress_percent(profile: &Profile) -> u16 {
    if profile.threshold == 0 {
        return 0;
    }
    let experience = profile.experience.min(profile.threshold) as u128;
    ((experience * 100) / profile.threshold as u128) as u16
}
