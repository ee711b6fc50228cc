use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current and previous emission timings
///
/// `current_start` is absent when no emission is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionResponse {
    #[serde(default)]
    pub current_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub previous_start: Option<DateTime<Utc>>,
    #[serde(default)]
    pub previous_end: Option<DateTime<Utc>>,
}

impl EmissionResponse {
    /// Check if an emission is happening right now
    pub fn is_active(&self) -> bool {
        self.current_start.is_some()
    }
}
