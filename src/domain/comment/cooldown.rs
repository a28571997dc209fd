// src/domain/comment/cooldown.rs
use chrono::{DateTime, Utc};

/// Minimum interval between two comments from the same visitor on the same article.
pub const COMMENT_COOLDOWN_SECS: u32 = 60;

/// Seconds left before `last_submitted_at` allows another submission.
/// Partial seconds round up so a visitor never sees `0` while still blocked.
pub fn remaining_cooldown(last_submitted_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> u32 {
    let Some(last) = last_submitted_at else {
        return 0;
    };
    let elapsed_ms = now.signed_duration_since(last).num_milliseconds().max(0);
    let window_ms = i64::from(COMMENT_COOLDOWN_SECS) * 1000;
    if elapsed_ms >= window_ms {
        return 0;
    }
    let left_ms = window_ms - elapsed_ms;
    ((left_ms + 999) / 1000) as u32
}
