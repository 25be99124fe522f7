//! Clock-style time formatting shared by the player and the UI.

use std::time::Duration;

/// Format a position in seconds as `M:SS`.
///
/// Anything that is not a finite, non-negative number renders as `0:00`,
/// which covers the "duration not known yet" case.
pub fn format_time(secs: f64) -> String {
    if !secs.is_finite() || secs < 0.0 {
        return "0:00".to_string();
    }
    let total = secs.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Format a decoded duration as `M:SS`, dropping partial seconds.
pub fn format_duration(d: Duration) -> String {
    format_time(d.as_secs() as f64)
}

/// Parse a `M:SS` display string into whole seconds.
pub fn parse_display_duration(text: &str) -> Option<u64> {
    let (m, s) = text.trim().split_once(':')?;
    let minutes: u64 = m.trim().parse().ok()?;
    let seconds: u64 = s.trim().parse().ok()?;
    minutes.checked_mul(60)?.checked_add(seconds)
}
