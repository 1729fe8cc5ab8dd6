//! Utility functions module
//!
//! Contains helpers for formatting durations, experience and story text.

pub mod format;

// Re-export commonly used functions
pub use format::{fill_name, format_experience, format_minutes, mask_pin, on_off};
