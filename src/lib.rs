// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # STALCRAFT: X API client
//!
//! Typed async client for the [STALCRAFT: X API](https://eapi.stalcraft.net/overview.html):
//! regions, auctions, characters, clans and emissions.
//!
//! ## Features
//!
//! - **Typed Endpoints**: one method per API resource, decoding into plain structs
//! - **Rate Limit Handling**: 429 responses are waited out until the server's
//!   declared reset time and retried transparently
//! - **Offset Pagination**: immutable cursors plus a page stream helper
//! - **Cancellation**: every request and rate limit wait can be aborted
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stalcraft::{ClientConfig, StalcraftClient, Result};
//! use stalcraft::pagination::{ActiveLotPage, Cursor};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = StalcraftClient::new(&ClientConfig::demo("EU"))?;
//!
//!     let emission = client.emission_status().await?;
//!     println!("emission active: {}", emission.is_active());
//!
//!     let mut page = ActiveLotPage::new(100);
//!     loop {
//!         let listing = client.active_item_lots("y1q9", page).await?;
//!         if page.window().is_last(listing.total) {
//!             break;
//!         }
//!         page = page.next();
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    StalcraftClient                       │
//! │  list_regions  emission_status  active_item_lots  ...    │
//! └──────────────────────────────────────────────────────────┘
//!                 │ ResourcePath + response type
//! ┌───────────────┴──────────────┬───────────────────────────┐
//! │          HttpClient          │        Pagination         │
//! ├──────────────────────────────┼───────────────────────────┤
//! │ execute_once                 │ Page                      │
//! │ execute_with_retry (429)     │ LotPage                   │
//! │ Clock / cancellation         │ ActiveLotPage             │
//! └──────────────────────────────┴───────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document model fields once the API reference stabilises

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// Client configuration
pub mod config;

/// Offset/limit cursors
pub mod pagination;

/// Request engine with rate limit retry
pub mod http;

/// Response models
pub mod models;

/// Typed endpoints
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::StalcraftClient;
pub use config::ClientConfig;
pub use error::{ApiError, Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
