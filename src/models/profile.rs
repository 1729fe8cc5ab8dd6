//! Child profile and reward payload types

use serde::{Deserialize, Serialize};

/// Experience needed to leave level 1
pub const STARTING_THRESHOLD: u64 = 100;

/// Avatar descriptor. Ids are resolved to emoji/art by the screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub body: String,
    pub hair: String,
    pub outfit: String,
    pub accessories: Vec<String>,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            body: "default".to_string(),
            hair: "short".to_string(),
            outfit: "casual".to_string(),
            accessories: Vec::new(),
        }
    }
}

/// Aggregate activity statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    /// Total learning time in minutes
    pub total_time_minutes: u32,
    /// Number of completed activities
    pub activities_completed: u32,
    /// Consecutive days with at least one activity
    pub streak_days: u32,
}

/// The child record the whole session revolves around.
///
/// `experience < threshold` holds after every progression update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar: Avatar,
    pub level: u32,
    pub experience: u64,
    pub threshold: u64,
    /// Earned badges, in order, duplicates kept
    pub badges: Vec<String>,
    /// Activity kinds in completion order
    pub completed_activities: Vec<String>,
    pub stats: ProfileStats,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: Avatar::default(),
            level: 1,
            experience: 0,
            threshold: STARTING_THRESHOLD,
            badges: Vec::new(),
            completed_activities: Vec::new(),
            stats: ProfileStats::default(),
        }
    }
}

impl Profile {
    /// Create a profile with start-of-session defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an activity of this kind was completed at least once
    pub fn has_completed(&self, kind: &str) -> bool {
        self.completed_activities.iter().any(|k| k == kind)
    }

    /// Whether the badge was earned at least once
    pub fn has_badge(&self, badge: &str) -> bool {
        self.badges.iter().any(|b| b == badge)
    }

    /// Experience still missing for the next level
    pub fn experience_to_next_level(&self) -> u64 {
        self.threshold.saturating_sub(self.experience)
    }
}

/// Rewards granted by one finished activity.
///
/// Shown once by the rewards screen and then dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardPayload {
    pub experience: u64,
    pub badges: Vec<String>,
    pub items: Vec<String>,
}
