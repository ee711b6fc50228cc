//! Resource paths
//!
//! Endpoints describe what to fetch as a list of path segments plus query
//! parameters. Segments are percent-encoded one by one when the URL is
//! built, so item ids and character names never need escaping by hand.

use crate::pagination::Cursor;
use crate::types::StringMap;
use std::collections::BTreeMap;
use std::fmt;

/// Whether a resource lives under a region prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `<base>/<region>/...`
    Regional,
    /// `<base>/...`
    Global,
}

/// Path and query of a single API resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    scope: Scope,
    segments: Vec<String>,
    query: BTreeMap<String, String>,
}

impl ResourcePath {
    /// Resource below the client's region
    pub fn regional<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Scope::Regional, segments)
    }

    /// Resource at the API root
    pub fn global<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Scope::Global, segments)
    }

    fn new<I, S>(scope: Scope, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope,
            segments: segments.into_iter().map(Into::into).collect(),
            query: BTreeMap::new(),
        }
    }

    /// Add query parameters
    #[must_use]
    pub fn with_query(mut self, params: StringMap) -> Self {
        self.query.extend(params);
        self
    }

    /// Add a cursor's query parameters
    #[must_use]
    pub fn with_cursor(self, cursor: &impl Cursor) -> Self {
        self.with_query(cursor.query())
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Query parameters in key order
    pub fn query(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scope == Scope::Regional {
            f.write_str("/{region}")?;
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        let mut sep = '?';
        for (key, value) in &self.query {
            write!(f, "{sep}{key}={value}")?;
            sep = '&';
        }
        Ok(())
    }
}
