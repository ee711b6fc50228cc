//! Auction listings

use crate::pagination::Listing;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lot currently up for auction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lot {
    pub item_id: String,
    pub amount: u64,
    pub start_price: u64,
    #[serde(default)]
    pub current_price: Option<u64>,
    #[serde(default)]
    pub buyout_price: Option<u64>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Only present when requested with `additional=true`
    #[serde(default)]
    pub additional: Option<JsonObject>,
}

/// One page of active lots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LotListing {
    pub total: u64,
    #[serde(default)]
    pub lots: Vec<Lot>,
}

impl Listing for LotListing {
    fn total(&self) -> u64 {
        self.total
    }

    fn len(&self) -> usize {
        self.lots.len()
    }
}

/// A completed purchase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub amount: u64,
    pub price: u64,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub additional: Option<JsonObject>,
}

/// One page of price history, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricesListing {
    pub total: u64,
    #[serde(default)]
    pub prices: Vec<PriceEntry>,
}

impl Listing for PricesListing {
    fn total(&self) -> u64 {
        self.total
    }

    fn len(&self) -> usize {
        self.prices.len()
    }
}
