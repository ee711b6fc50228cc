//! Server-signalled rate limits
//!
//! The API answers with 429 and three `X-Ratelimit-*` headers once the
//! request quota for the current window is used up. The client does not
//! throttle itself; it only reacts to these signals.

use crate::error::{Error, Result};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Requests allowed per window
pub const HEADER_LIMIT: &str = "x-ratelimit-limit";

/// Requests left in the current window
pub const HEADER_REMAINING: &str = "x-ratelimit-remaining";

/// Epoch milliseconds at which the window resets
pub const HEADER_RESET: &str = "x-ratelimit-reset";

/// One rate limit rejection, read from a 429 response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLimitSignal {
    pub limit: u32,
    pub remaining: u32,
    pub reset_at_millis: i64,
}

impl RateLimitSignal {
    /// Parse the three rate limit headers. All of them are required.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self> {
        Ok(Self {
            limit: header_value(headers, HEADER_LIMIT)?,
            remaining: header_value(headers, HEADER_REMAINING)?,
            reset_at_millis: header_value(headers, HEADER_RESET)?,
        })
    }

    /// Time left until the window resets, clamped at zero
    pub fn wait_duration(&self, now_millis: i64) -> Duration {
        let delta = self.reset_at_millis.saturating_sub(now_millis);
        Duration::from_millis(u64::try_from(delta).unwrap_or(0))
    }
}

impl fmt::Display for RateLimitSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rate limit reached, limit {}, remaining {}, reset {}",
            self.limit, self.remaining, self.reset_at_millis
        )
    }
}

fn header_value<T>(headers: &HeaderMap, name: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = headers
        .get(name)
        .ok_or_else(|| Error::protocol(name, "header missing"))?;
    let value = raw
        .to_str()
        .map_err(|e| Error::protocol(name, e.to_string()))?;
    value
        .trim()
        .parse()
        .map_err(|e: T::Err| Error::protocol(name, format!("invalid value '{value}': {e}")))
}
