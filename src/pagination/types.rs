//! Cursor types
//!
//! A cursor is an immutable offset/limit window into an ordered listing on
//! the server. Advancing a cursor produces a new value; the original is
//! never modified.

use crate::types::{LotSort, SortOrder, StringMap};

/// Largest `limit` the auction endpoints accept
pub const MAX_LOT_PAGE_LIMIT: u32 = 200;

/// A window into an ordered remote collection
pub trait Cursor: Clone + Send + Sync {
    /// The offset/limit window this cursor describes
    fn window(&self) -> Page;

    /// Query parameters describing this cursor
    fn query(&self) -> StringMap;

    /// The cursor for the following window
    #[must_use]
    fn next(&self) -> Self;

    /// One-based page number of this window
    fn page_number(&self) -> u32 {
        self.window().number()
    }
}

/// A listing response that reports the size of the full collection
pub trait Listing {
    /// Total number of items on the server
    fn total(&self) -> u64;

    /// Number of items in this response
    fn len(&self) -> usize;

    /// Check if this response carried no items
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// Page
// ============================================================================

/// Plain offset/limit window
///
/// `limit` must be greater than zero. This is a precondition of
/// [`Page::number`], not something the type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    /// Position of the first item
    pub offset: u32,
    /// Maximum items per window
    pub limit: u32,
}

impl Page {
    /// First window with the given limit
    pub fn new(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Window at an arbitrary offset
    pub fn at(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Offset just past the last item of this window, saturating at `u32::MAX`
    pub fn last_index(&self) -> u32 {
        self.offset.saturating_add(self.limit)
    }

    /// One-based page number. Panics if `limit` is zero.
    pub fn number(&self) -> u32 {
        self.offset / self.limit + 1
    }

    /// Check if this window reaches the end of a collection of `total` items
    pub fn is_last(&self, total: u64) -> bool {
        u64::from(self.last_index()) >= total
    }
}

impl Cursor for Page {
    fn window(&self) -> Page {
        *self
    }

    fn query(&self) -> StringMap {
        let mut params = StringMap::new();
        params.insert("offset".to_string(), self.offset.to_string());
        params.insert("limit".to_string(), self.limit.to_string());
        params
    }

    fn next(&self) -> Self {
        Self {
            offset: self.last_index(),
            limit: self.limit,
        }
    }
}

// ============================================================================
// Lot pages
// ============================================================================

/// Window over an item's auction price history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LotPage {
    pub page: Page,
    /// Ask the server to include the `additional` lot metadata
    pub additional: bool,
}

impl LotPage {
    pub fn new(limit: u32) -> Self {
        Self {
            page: Page::new(limit),
            additional: false,
        }
    }

    #[must_use]
    pub fn with_additional(mut self, additional: bool) -> Self {
        self.additional = additional;
        self
    }
}

impl From<Page> for LotPage {
    fn from(page: Page) -> Self {
        Self {
            page,
            additional: false,
        }
    }
}

impl Cursor for LotPage {
    fn window(&self) -> Page {
        self.page
    }

    fn query(&self) -> StringMap {
        let mut params = self.page.query();
        if self.additional {
            params.insert("additional".to_string(), "true".to_string());
        }
        params
    }

    fn next(&self) -> Self {
        Self {
            page: self.page.next(),
            additional: self.additional,
        }
    }
}

/// Window over the active lots of an item, with sorting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ActiveLotPage {
    pub lot: LotPage,
    pub sort: LotSort,
    pub order: SortOrder,
}

impl ActiveLotPage {
    pub fn new(limit: u32) -> Self {
        Self {
            lot: LotPage::new(limit),
            sort: LotSort::default(),
            order: SortOrder::default(),
        }
    }

    #[must_use]
    pub fn sorted_by(mut self, sort: LotSort, order: SortOrder) -> Self {
        self.sort = sort;
        self.order = order;
        self
    }

    #[must_use]
    pub fn with_additional(mut self, additional: bool) -> Self {
        self.lot.additional = additional;
        self
    }
}

impl Default for LotPage {
    fn default() -> Self {
        Self::new(MAX_LOT_PAGE_LIMIT)
    }
}

impl Cursor for ActiveLotPage {
    fn window(&self) -> Page {
        self.lot.page
    }

    fn query(&self) -> StringMap {
        let mut params = self.lot.query();
        params.insert("sort".to_string(), self.sort.as_str().to_string());
        params.insert("order".to_string(), self.order.as_str().to_string());
        params
    }

    fn next(&self) -> Self {
        Self {
            lot: self.lot.next(),
            sort: self.sort,
            order: self.order,
        }
    }
}
