//! Text formatting helpers for the screens

use std::time::Duration;

/// Format learning minutes in a compact human-readable way
///
/// # Examples
/// ```
/// use kidquest::util::format::format_minutes;
///
/// assert_eq!(format_minutes(0), "0m");
/// assert_eq!(format_minutes(45), "45m");
/// assert_eq!(format_minutes(90), "1h 30m");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 0 {
        return "0m".to_string();
    }
    humantime::format_duration(Duration::from_secs(u64::from(minutes) * 60)).to_string()
}

/// Replace every `{name}` placeholder with the child's name
///
/// # Examples
/// ```
/// use kidquest::util::format::fill_name;
///
/// assert_eq!(fill_name("Hi {name}, {name}!", "Leo"), "Hi Leo, Leo!");
/// ```
pub fn fill_name(template: &str, name: &str) -> String {
    let name = if name.is_empty() { "Explorer" } else { name };
    template.replace("{name}", name)
}

/// "350 / 500 XP"
pub fn format_experience(experience: u64, threshold: u64) -> String {
    format!("{} / {} XP", experience, threshold)
}

/// Masked PIN entry, one dot per digit and underscores for the rest
pub fn mask_pin(entered: usize, length: usize) -> String {
    let mut mask = "●".repeat(entered.min(length));
    mask.push_str(&"_".repeat(length.saturating_sub(entered)));
    mask
}

/// "on"/"off" for toggles
pub fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}
