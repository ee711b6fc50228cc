//! Response models
//!
//! Plain data contracts for the JSON bodies the API returns. Field names
//! follow the wire format via `serde(rename_all = "camelCase")`.

mod auction;
mod character;
mod clan;
mod emission;
mod region;

pub use auction::{Lot, LotListing, PriceEntry, PricesListing};
pub use character::{
    CharacterClanInfo, CharacterMetaInfo, CharacterProfileData, CharacterStatValue,
    FullCharacterInfo, StatType,
};
pub use clan::{ClanInfo, ClanMember, ClanRank, ClansListResponse};
pub use emission::EmissionResponse;
pub use region::RegionInfo;
