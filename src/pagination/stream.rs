//! Walking every page of a listing
//!
//! The server reports a `total` with each listing; the walk stops after the
//! window that reaches it, or after a page that comes back empty.

use super::types::{Cursor, Listing};
use crate::error::Result;
use futures::stream::{self, Stream};
use std::future::Future;

/// Stream every page of a listing, starting at `first`
///
/// `fetch` is called with each successive cursor. An error is yielded once
/// and ends the stream.
pub fn pages<C, T, F, Fut>(first: C, fetch: F) -> impl Stream<Item = Result<T>>
where
    C: Cursor,
    T: Listing,
    F: Fn(C) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    stream::unfold(
        (Some(first), fetch),
        |(cursor, fetch)| async move {
            let cursor = cursor?;
            match fetch(cursor.clone()).await {
                Ok(listing) => {
                    let next = if listing.is_empty() || cursor.window().is_last(listing.total()) {
                        None
                    } else {
                        Some(cursor.next())
                    };
                    Some((Ok(listing), (next, fetch)))
                }
                Err(e) => Some((Err(e), (None, fetch))),
            }
        },
    )
}
