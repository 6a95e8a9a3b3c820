//! Rate limit detection for the code search API

use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Remaining request quota header
pub(crate) const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Quota reset header (Unix timestamp, seconds)
pub(crate) const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Statuses the API uses to signal rate limiting
pub fn is_rate_limit_status(status: StatusCode) -> bool {
    status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS
}

/// How long to wait before retrying a rate-limited request
///
/// Returns `None` unless the quota is exhausted (`remaining == 0`) and the
/// reset timestamp parses. The wait lasts until one second past the reset.
pub fn rate_limit_wait(headers: &HeaderMap, now: SystemTime) -> Option<Duration> {
    let remaining = headers.get(RATE_LIMIT_REMAINING)?.to_str().ok()?.trim();
    if remaining != "0" {
        return None;
    }

    let reset: u64 = headers
        .get(RATE_LIMIT_RESET)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()?;

    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    Some(Duration::from_secs(reset.saturating_sub(now_secs) + 1))
}
