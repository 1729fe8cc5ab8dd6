//! Daily missions derived from the profile

use super::{ActivityKind, ActivityOutcome};
use crate::models::Profile;

pub const ALL_DONE_BADGE: &str = "Mission Complete!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub experience: u64,
    pub completed: bool,
}

impl Mission {
    fn new(
        id: &'static str,
        title: &'static str,
        description: &'static str,
        emoji: &'static str,
        experience: u64,
        completed: bool,
    ) -> Self {
        Self {
            id,
            title,
            description,
            emoji,
            experience,
            completed,
        }
    }
}

/// Today's missions, evaluated once when the board is opened
#[derive(Debug, Clone)]
pub struct MissionBoard {
    missions: Vec<Mission>,
}

impl MissionBoard {
    pub fn for_profile(profile: &Profile) -> Self {
        let mission = Mission::new;
        Self {
            missions: vec![
                mission("daily-quiz", "Complete a Quiz", "Test your knowledge with any quiz", "📝", 50, profile.has_completed("quiz")),
                mission("play-game", "Play a Mini Game", "Have fun with a learning game", "🎮", 50, profile.has_completed("mini-game")),
                mission("read-story", "Read a Story", "Explore a new adventure", "📚", 50, profile.has_completed("story")),
                mission("earn-xp", "Earn 100 XP", "Complete activities to earn XP", "⭐", 30, profile.experience >= 100),
                mission("login-streak", "Keep Your Streak", "Login and learn every day", "🔥", 40, profile.stats.streak_days > 0),
            ],
        }
    }

    pub fn missions(&self) -> &[Mission] {
        &self.missions
    }

    pub fn completed_count(&self) -> usize {
        self.missions.iter().filter(|m| m.completed).count()
    }

    pub fn all_completed(&self) -> bool {
        self.completed_count() == self.missions.len()
    }

    /// Experience from completed missions
    pub fn earned_experience(&self) -> u64 {
        self.missions
            .iter()
            .filter(|m| m.completed)
            .map(|m| m.experience)
            .sum()
    }

    /// Rewards for the completed missions; nothing to claim when none are done
    pub fn claim(&self) -> Option<ActivityOutcome> {
        if self.completed_count() == 0 {
            return None;
        }
        let outcome = ActivityOutcome::new(ActivityKind::Missions, self.earned_experience());
        if self.all_completed() {
            Some(outcome.with_badge(ALL_DONE_BADGE))
        } else {
            Some(outcome)
        }
    }
}
