//! Characters and profiles

use super::clan::{ClanInfo, ClanMember};
use crate::types::JsonValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Clan a character belongs to, with the character's membership
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterClanInfo {
    pub info: ClanInfo,
    pub member: ClanMember,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterMetaInfo {
    pub id: String,
    pub name: String,
    pub creation_time: DateTime<Utc>,
}

/// Kind of value a profile statistic holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatType {
    Integer,
    Decimal,
    Date,
    Duration,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterStatValue {
    pub id: String,
    #[serde(rename = "type")]
    pub stat_type: StatType,
    #[serde(default)]
    pub value: JsonValue,
}

/// Public profile of a character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterProfileData {
    pub username: String,
    pub uuid: String,
    pub status: String,
    pub alliance: String,
    #[serde(default)]
    pub last_login: Option<DateTime<Utc>>,
    #[serde(default)]
    pub displayed_achievements: Vec<String>,
    /// Absent when the character is not in a clan
    #[serde(default)]
    pub clan: Option<CharacterClanInfo>,
    #[serde(default)]
    pub stats: Vec<CharacterStatValue>,
}

/// A character owned by the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullCharacterInfo {
    pub information: CharacterMetaInfo,
    #[serde(default)]
    pub clan: Option<CharacterClanInfo>,
}
