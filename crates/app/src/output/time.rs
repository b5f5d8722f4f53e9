use chrono::{DateTime, Duration, Utc};

/// Relative age of `t` as seen at `now`; a week or older prints as a date.
pub fn format_relative(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now - t;
    if diff < Duration::minutes(1) {
        "just now".to_string()
    } else if diff < Duration::hours(1) {
        plural(diff.num_minutes(), "minute")
    } else if diff < Duration::hours(24) {
        plural(diff.num_hours(), "hour")
    } else if diff < Duration::days(7) {
        plural(diff.num_days(), "day")
    } else {
        t.format("%b %-d, %Y").to_string()
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

/// Truncates by character count, ending in `...` when shortened.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return "...".to_string();
    }
    let mut out: String = s.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}
