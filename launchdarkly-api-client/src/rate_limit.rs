use chrono::{DateTime, TimeZone, Utc};
use hyper::HeaderMap;

const GLOBAL_REMAINING_HEADER: &str = "x-ratelimit-global-remaining";
const ROUTE_REMAINING_HEADER: &str = "x-ratelimit-route-remaining";
const RESET_HEADER: &str = "x-ratelimit-reset";
const RETRY_AFTER_HEADER: &str = "retry-after";

/// The value of a `Retry-After` header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RetryAfter {
    /// Number of seconds to wait before retrying.
    Seconds(u64),
    /// Point in time after which a retry may be attempted.
    Date(DateTime<Utc>),
}

/// Rate limit information reported by the API.
///
/// The client only surfaces these values. Deciding whether and when to retry is left to the
/// caller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Requests remaining in the current global (account wide) window.
    pub global_remaining: Option<u64>,
    /// Requests remaining in the current window for the route that was called.
    pub route_remaining: Option<u64>,
    /// Time at which the current window resets.
    pub reset: Option<DateTime<Utc>>,
    /// Present when the request was rejected by IP based limiting.
    pub retry_after: Option<RetryAfter>,
}

impl RateLimit {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::trim)
        };

        Self {
            global_remaining: header(GLOBAL_REMAINING_HEADER).and_then(|v| v.parse().ok()),
            route_remaining: header(ROUTE_REMAINING_HEADER).and_then(|v| v.parse().ok()),
            reset: header(RESET_HEADER)
                .and_then(|v| v.parse::<i64>().ok())
                .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
            retry_after: header(RETRY_AFTER_HEADER).and_then(parse_retry_after),
        }
    }
}

fn parse_retry_after(value: &str) -> Option<RetryAfter> {
    if let Ok(seconds) = value.parse::<u64>() {
        return Some(RetryAfter::Seconds(seconds));
    }

    match DateTime::parse_from_rfc2822(value) {
        Ok(date) => Some(RetryAfter::Date(date.with_timezone(&Utc))),
        Err(_) => {
            debug!("Ignoring unparseable Retry-After header: {}", value);
            None
        }
    }
}
