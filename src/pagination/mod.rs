//! Pagination module
//!
//! Offset/limit cursors for the listing endpoints.
//!
//! # Overview
//!
//! - [`Page`]: plain offset/limit window
//! - [`LotPage`]: adds the `additional` metadata flag
//! - [`ActiveLotPage`]: adds sort field and sort order
//!
//! Cursors render themselves as query parameters and produce the cursor for
//! the next window. Deciding when to stop is up to the caller, usually by
//! comparing the listing's `total` against [`Page::is_last`]; [`pages`]
//! does this for you.

mod stream;
mod types;

pub use stream::pages;
pub use types::{ActiveLotPage, Cursor, Listing, LotPage, Page, MAX_LOT_PAGE_LIMIT};
