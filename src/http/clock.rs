//! Time source and cancellable waits
//!
//! The retry loop never calls `tokio::time::sleep` directly. It asks a
//! [`Clock`] for the current time and for a wait that can be cut short by a
//! cancellation token, so tests can swap in a clock that does not sleep.

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// How a wait ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    Elapsed,
    Cancelled,
}

/// Wall clock plus a cancellable timed wait
#[async_trait]
pub trait Clock: Send + Sync + fmt::Debug {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;

    /// Wait for `duration` unless `cancel` fires first
    async fn sleep(&self, duration: Duration, cancel: &CancellationToken) -> WaitOutcome;
}

/// System time and tokio timers
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    async fn sleep(&self, duration: Duration, cancel: &CancellationToken) -> WaitOutcome {
        tokio::select! {
            biased;
            () = cancel.cancelled() => WaitOutcome::Cancelled,
            () = tokio::time::sleep(duration) => WaitOutcome::Elapsed,
        }
    }
}
