//! Activity scoring
//!
//! Each activity runs as a small state machine driven by its screen and
//! ends with an [`ActivityOutcome`] that the session hands to the
//! progression engine.

pub mod memory;
pub mod missions;
pub mod quiz;
pub mod story;

pub use memory::{FlipResult, MemoryGame};
pub use missions::{Mission, MissionBoard};
pub use quiz::QuizRun;
pub use story::StoryRun;

/// Kinds of activity that grant rewards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    Quiz,
    MiniGame,
    Story,
    Missions,
}

impl ActivityKind {
    /// Identifier written to the profile's activity log
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Quiz => "quiz",
            ActivityKind::MiniGame => "mini-game",
            ActivityKind::Story => "story",
            ActivityKind::Missions => "missions",
        }
    }
}

/// What a finished activity grants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityOutcome {
    pub kind: ActivityKind,
    pub experience: u64,
    pub badges: Vec<String>,
    pub items: Vec<String>,
}

impl ActivityOutcome {
    pub fn new(kind: ActivityKind, experience: u64) -> Self {
        Self {
            kind,
            experience,
            badges: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_badge(mut self, badge: &str) -> Self {
        self.badges.push(badge.to_string());
        self
    }

    pub fn with_item(mut self, item: &str) -> Self {
        self.items.push(item.to_string());
        self
    }
}

/// Clamp a signed score to a grantable amount
pub fn clamp_experience(score: i64) -> u64 {
    score.max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ids() {
        assert_eq!(ActivityKind::Quiz.as_str(), "quiz");
        assert_eq!(ActivityKind::MiniGame.as_str(), "mini-game");
        assert_eq!(ActivityKind::Story.as_str(), "story");
        assert_eq!(ActivityKind::Missions.as_str(), "missions");
    }

    #[test]
    fn test_clamp_experience() {
        assert_eq!(clamp_experience(-20), 0);
        assert_eq!(clamp_experience(0), 0);
        assert_eq!(clamp_experience(75), 75);
    }
}
