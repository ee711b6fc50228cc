//! Typed API endpoints
//!
//! [`StalcraftClient`] maps each endpoint to a [`ResourcePath`] and a
//! response type and hands both to the [`HttpClient`] engine.
//!
//! API reference: <https://eapi.stalcraft.net/reference>

use crate::config::ClientConfig;
use crate::error::Result;
use crate::http::{HttpClient, ResourcePath};
use crate::models::{
    CharacterProfileData, ClanInfo, ClanMember, ClansListResponse, EmissionResponse,
    FullCharacterInfo, LotListing, PricesListing, RegionInfo,
};
use crate::pagination::{self, ActiveLotPage, LotPage, Page};
use futures::Stream;
use tokio_util::sync::CancellationToken;

/// Client for the STALCRAFT: X API
#[derive(Debug, Clone)]
pub struct StalcraftClient {
    http: HttpClient,
}

impl StalcraftClient {
    /// Create a client from a config
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// Create a client on top of a prepared engine
    pub fn from_http(http: HttpClient) -> Self {
        Self { http }
    }

    /// The underlying request engine
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Address a different region
    #[must_use]
    pub fn with_region(&self, region: impl Into<String>) -> Self {
        Self {
            http: self.http.clone().with_region(region),
        }
    }

    /// Bind requests to a caller's cancellation token
    #[must_use]
    pub fn with_cancellation_token(&self, token: CancellationToken) -> Self {
        Self {
            http: self.http.clone().with_cancellation_token(token),
        }
    }

    /// Cancel in-flight requests and rate limit waits
    pub fn cancel_all_requests(&self) {
        self.http.cancel_all_requests();
    }

    /// List the regions that can be accessed via the API
    pub async fn list_regions(&self) -> Result<Vec<RegionInfo>> {
        self.http
            .execute_with_retry(&ResourcePath::global(["regions"]))
            .await
    }

    /// Current emission, if any, and timing of the previous one
    pub async fn emission_status(&self) -> Result<EmissionResponse> {
        self.http
            .execute_with_retry(&ResourcePath::regional(["emission"]))
            .await
    }

    /// Names of the characters who are friends with `character`.
    /// Requires user authentication.
    pub async fn friend_list(&self, character: &str) -> Result<Vec<String>> {
        self.http
            .execute_with_retry(&ResourcePath::regional(["friends", character]))
            .await
    }

    /// Prices of lots of `item_id` bought from auction, newest first
    pub async fn item_price_history(&self, item_id: &str, page: LotPage) -> Result<PricesListing> {
        let path = ResourcePath::regional(["auction", item_id, "history"]).with_cursor(&page);
        self.http.execute_with_retry(&path).await
    }

    /// Lots of `item_id` currently active on auction
    pub async fn active_item_lots(&self, item_id: &str, page: ActiveLotPage) -> Result<LotListing> {
        let path = ResourcePath::regional(["auction", item_id, "lots"]).with_cursor(&page);
        self.http.execute_with_retry(&path).await
    }

    /// Public profile of a character
    pub async fn character_profile(&self, name: &str) -> Result<CharacterProfileData> {
        self.http
            .execute_with_retry(&ResourcePath::regional([
                "character",
                "by-name",
                name,
                "profile",
            ]))
            .await
    }

    /// Characters of the authenticated user. Requires user authentication.
    pub async fn list_characters(&self) -> Result<Vec<FullCharacterInfo>> {
        self.http
            .execute_with_retry(&ResourcePath::regional(["characters"]))
            .await
    }

    /// Information about a clan
    pub async fn clan_information(&self, clan_id: &str) -> Result<ClanInfo> {
        self.http
            .execute_with_retry(&ResourcePath::regional(["clan", clan_id, "info"]))
            .await
    }

    /// Members of a clan. Requires user authentication with at least one
    /// character in the clan.
    pub async fn clan_members(&self, clan_id: &str) -> Result<Vec<ClanMember>> {
        self.http
            .execute_with_retry(&ResourcePath::regional(["clan", clan_id, "members"]))
            .await
    }

    /// Clans registered in the region
    pub async fn list_clans(&self, page: Page) -> Result<ClansListResponse> {
        let path = ResourcePath::regional(["clans"]).with_cursor(&page);
        self.http.execute_with_retry(&path).await
    }

    /// Every page of active lots for `item_id`, starting at `first`
    pub fn active_item_lot_pages<'a>(
        &'a self,
        item_id: &'a str,
        first: ActiveLotPage,
    ) -> impl Stream<Item = Result<LotListing>> + 'a {
        pagination::pages(first, move |page| self.active_item_lots(item_id, page))
    }

    /// Every page of price history for `item_id`, starting at `first`
    pub fn item_price_history_pages<'a>(
        &'a self,
        item_id: &'a str,
        first: LotPage,
    ) -> impl Stream<Item = Result<PricesListing>> + 'a {
        pagination::pages(first, move |page| self.item_price_history(item_id, page))
    }

    /// Every page of clans, starting at `first`
    pub fn clan_pages(&self, first: Page) -> impl Stream<Item = Result<ClansListResponse>> + '_ {
        pagination::pages(first, move |page| self.list_clans(page))
    }
}
