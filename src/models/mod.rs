//! Data models module
//!
//! Contains the child profile, reward payload, parental controls and the
//! static content tables the screens draw from.

pub mod catalog;
pub mod controls;
pub mod profile;

pub use controls::{ParentalControls, SafetySettings, ScheduleBlock, ScreenTimeSettings};
pub use profile::{Avatar, Profile, ProfileStats, RewardPayload};
