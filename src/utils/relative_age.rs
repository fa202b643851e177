//! Relative age labels ("2 hours ago")
//!
//! `now` is always passed in so labels are reproducible.

use chrono::{DateTime, Utc};

use crate::error::{CoreError, CoreResult};

/// Label for how long ago `timestamp` was, relative to `now`
///
/// Whole hours are floored. Under one hour (including timestamps in the
/// future) reads "Just now".
pub fn relative_age(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_hours = (now - timestamp).num_hours();

    if diff_hours < 1 {
        return "Just now".to_string();
    }
    if diff_hours < 24 {
        return format!("{} hours ago", diff_hours);
    }

    let diff_days = diff_hours / 24;
    if diff_days == 1 {
        return "1 day ago".to_string();
    }
    if diff_days < 7 {
        return format!("{} days ago", diff_days);
    }

    let diff_weeks = diff_days / 7;
    if diff_weeks == 1 {
        return "1 week ago".to_string();
    }
    format!("{} weeks ago", diff_weeks)
}

/// Parse an RFC 3339 timestamp into UTC
pub fn parse_timestamp(value: &str) -> CoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// [`relative_age`] for a timestamp string
pub fn relative_age_str(timestamp: &str, now: DateTime<Utc>) -> CoreResult<String> {
    Ok(relative_age(parse_timestamp(timestamp)?, now))
}
