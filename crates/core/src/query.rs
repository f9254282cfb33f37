//! Query construction for the records endpoint
//!
//! Turns caller options into the `limit`/`offset`/`color[]` parameters sent on
//! the wire. A request without colors still names every known color, so the
//! server always receives an explicit filter list.

use serde::{Deserialize, Serialize};

use crate::colors::Color;

/// Number of records the endpoint returns per page
pub const PAGE_SIZE: u64 = 10;

pub const LIMIT_PARAM: &str = "limit";
pub const OFFSET_PARAM: &str = "offset";
pub const COLOR_PARAM: &str = "color[]";

/// Error type for query construction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid page {0}: pages are 1-indexed")]
    InvalidPage(u64),
}

/// Caller-supplied request shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieveOptions {
    /// 1-indexed page number, page 1 when absent
    #[serde(default)]
    pub page: Option<u64>,
    /// Color names to keep. `None` means no local filter.
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

impl RetrieveOptions {
    pub fn page(page: u64) -> Self {
        Self {
            page: Some(page),
            colors: None,
        }
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }
}

/// A fully resolved page query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordsQuery {
    pub limit: u64,
    pub offset: u64,
    pub colors: Vec<String>,
    /// Requested color names missing from the color table. These are still
    /// sent to the server; callers are expected to warn about them.
    pub unknown_colors: Vec<String>,
}

impl RecordsQuery {
    /// The same filters, pointed at another page.
    pub fn for_page(&self, page: u64) -> Self {
        Self {
            offset: offset_for(page),
            unknown_colors: Vec::new(),
            ..self.clone()
        }
    }

    /// Query parameters in wire order: limit, offset, then one color per entry.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(self.colors.len() + 2);
        pairs.push((LIMIT_PARAM, self.limit.to_string()));
        pairs.push((OFFSET_PARAM, self.offset.to_string()));
        pairs.extend(self.colors.iter().map(|c| (COLOR_PARAM, c.clone())));
        pairs
    }
}

fn offset_for(page: u64) -> u64 {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Build the query for the page described by `options`
///
/// # Errors
/// Returns `QueryError::InvalidPage` when `options.page` is `Some(0)`.
pub fn build_query(options: &RetrieveOptions) -> Result<RecordsQuery, QueryError> {
    let offset = match options.page {
        Some(0) => return Err(QueryError::InvalidPage(0)),
        Some(page) => offset_for(page),
        None => 0,
    };

    let colors: Vec<String> = match &options.colors {
        Some(colors) => colors.clone(),
        None => Color::ALL.iter().map(|c| c.name().to_string()).collect(),
    };

    let unknown_colors = colors
        .iter()
        .filter(|name| Color::from_name(name).is_none())
        .cloned()
        .collect();

    Ok(RecordsQuery {
        limit: PAGE_SIZE,
        offset,
        colors,
        unknown_colors,
    })
}
