use serde::{Deserialize, Serialize};

/// A region reachable through the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionInfo {
    pub id: String,
    pub name: String,
}
