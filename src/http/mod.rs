//! HTTP module
//!
//! The request engine: builds authenticated GET requests, decodes JSON
//! responses and waits out server-signalled rate limits.
//!
//! # Features
//!
//! - **Rate Limit Retry**: 429 responses are retried after the reset time in
//!   the `X-Ratelimit-Reset` header, with no attempt ceiling
//! - **Error Classification**: transport, decode, protocol and API errors
//!   are surfaced immediately and never retried
//! - **Cancellation**: requests and rate limit waits race a cancellation token
//! - **Injectable Clock**: waits go through a [`Clock`] so tests need not sleep

mod client;
mod clock;
mod rate_limit;
mod request;

pub use client::HttpClient;
pub use clock::{Clock, SystemClock, WaitOutcome};
pub use rate_limit::{RateLimitSignal, HEADER_LIMIT, HEADER_REMAINING, HEADER_RESET};
pub use request::{ResourcePath, Scope};

#[cfg(test)]
mod tests;
