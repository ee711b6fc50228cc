//! Clans and their members

use crate::pagination::Listing;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public information about a clan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tag: Option<String>,
    pub level: u32,
    #[serde(default)]
    pub level_points: Option<u64>,
    pub registration_time: DateTime<Utc>,
    pub alliance: String,
    #[serde(default)]
    pub description: String,
    pub leader: String,
    pub member_count: u32,
}

/// Rank of a clan member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClanRank {
    Recruit,
    Commoner,
    Soldier,
    Sergeant,
    Officer,
    Colonel,
    Leader,
    #[serde(other)]
    Unknown,
}

/// A character's membership in a clan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClanMember {
    pub name: String,
    pub rank: ClanRank,
    pub join_time: String,
}

/// One page of registered clans
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClansListResponse {
    pub total_clans: u64,
    #[serde(default)]
    pub data: Vec<ClanInfo>,
}

impl Listing for ClansListResponse {
    fn total(&self) -> u64 {
        self.total_clans
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
