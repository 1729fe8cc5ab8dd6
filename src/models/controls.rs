//! Parental control settings
//!
//! Edited from the parent dashboard sub-screens and kept in memory for the
//! session. Defaults for the limit and safe mode come from the config file.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub const MIN_DAILY_LIMIT: u32 = 15;
pub const MAX_DAILY_LIMIT: u32 = 180;
pub const DAILY_LIMIT_STEP: u32 = 15;

/// A named time window that may block app usage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleBlock {
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub blocked: bool,
}

impl ScheduleBlock {
    fn new(name: &str, start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            name: name.to_string(),
            start: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap_or_default(),
            blocked: true,
        }
    }

    /// Whether `time` falls inside the window. Windows ending before they
    /// start wrap past midnight.
    pub fn covers(&self, time: NaiveTime) -> bool {
        if self.start <= self.end {
            time >= self.start && time < self.end
        } else {
            time >= self.start || time < self.end
        }
    }

    /// "HH:MM - HH:MM"
    pub fn window_label(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

/// Daily limit and schedule settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenTimeSettings {
    pub enabled: bool,
    pub daily_limit_minutes: u32,
    pub bedtime_mode: bool,
    pub weekend_extra: bool,
    pub schedule: Vec<ScheduleBlock>,
}

impl Default for ScreenTimeSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            daily_limit_minutes: 60,
            bedtime_mode: true,
            weekend_extra: true,
            schedule: vec![
                ScheduleBlock::new("School Hours", (8, 0), (15, 0)),
                ScheduleBlock::new("Dinner Time", (18, 0), (19, 0)),
                ScheduleBlock::new("Bedtime", (20, 0), (7, 0)),
            ],
        }
    }
}

impl ScreenTimeSettings {
    /// Move the daily limit by `steps` slider notches, clamped to range
    pub fn adjust_limit(&mut self, steps: i32) {
        let delta = steps.unsigned_abs() * DAILY_LIMIT_STEP;
        let limit = if steps >= 0 {
            self.daily_limit_minutes.saturating_add(delta)
        } else {
            self.daily_limit_minutes.saturating_sub(delta)
        };
        self.daily_limit_minutes = limit.clamp(MIN_DAILY_LIMIT, MAX_DAILY_LIMIT);
    }

    /// Whether any active schedule block covers `time`
    pub fn is_blocked_at(&self, time: NaiveTime) -> bool {
        self.enabled && self.schedule.iter().any(|b| b.blocked && b.covers(time))
    }

    /// Minutes left today given minutes already used
    pub fn remaining_minutes(&self, used: u32) -> u32 {
        self.daily_limit_minutes.saturating_sub(used)
    }
}

/// A topic the child may or may not see
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCategory {
    pub id: String,
    pub name: String,
    pub allowed: bool,
}

/// Content safety settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySettings {
    pub safe_mode: bool,
    pub block_external_links: bool,
    pub age_filter: bool,
    pub content_moderation: bool,
    pub categories: Vec<ContentCategory>,
}

impl Default for SafetySettings {
    fn default() -> Self {
        let categories = [
            ("math", "Math & Numbers", true),
            ("reading", "Reading & Stories", true),
            ("science", "Science & Nature", true),
            ("art", "Art & Creativity", true),
            ("music", "Music & Sounds", true),
            ("games", "Educational Games", true),
            ("social", "Social Features", false),
            ("chat", "Chat & Messaging", false),
        ]
        .into_iter()
        .map(|(id, name, allowed)| ContentCategory {
            id: id.to_string(),
            name: name.to_string(),
            allowed,
        })
        .collect();

        Self {
            safe_mode: true,
            block_external_links: true,
            age_filter: true,
            content_moderation: true,
            categories,
        }
    }
}

impl SafetySettings {
    /// Flip the allowed flag of one category. Returns false for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.categories.iter_mut().find(|c| c.id == id) {
            Some(category) => {
                category.allowed = !category.allowed;
                true
            }
            None => false,
        }
    }

    pub fn allowed_count(&self) -> usize {
        self.categories.iter().filter(|c| c.allowed).count()
    }
}

/// Parent notification preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email_notifications: bool,
    pub weekly_reports: bool,
    pub achievement_alerts: bool,
    pub daily_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            weekly_reports: true,
            achievement_alerts: true,
            daily_reminders: false,
        }
    }
}

/// Everything the parent can configure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentalControls {
    pub screen_time: ScreenTimeSettings,
    pub safety: SafetySettings,
    pub notifications: NotificationSettings,
}
