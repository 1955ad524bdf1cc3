//! Limit/offset pagination for list endpoints.
//!
//! Pagination is opt-in per request: only when both `limit` and `offset` are present and
//! valid is the list wrapped in a `{count, next, previous, results}` envelope. Anything
//! else, including unparsable values, falls back to the bare list.

use std::collections::BTreeMap;

use serde::Deserialize;
use url::Url;

const LIMIT_PARAM: &str = "limit";
const OFFSET_PARAM: &str = "offset";

/// Largest window value the database driver binds; larger inputs are clamped to it.
const MAX_WINDOW_VALUE: u64 = i64::MAX as u64;

/// Raw pagination query parameters.
///
/// Values are kept as strings so that invalid input disables pagination instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A validated limit/offset window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LimitOffset {
    /// Maximum number of records in the page, always positive.
    pub limit: u64,
    /// Number of records skipped before the page.
    pub offset: u64,
}

impl LimitOffset {
    /// Parses the window from query parameters.
    ///
    /// # Returns
    /// - `Some(LimitOffset)` - `limit` is a positive integer and `offset` a non-negative one;
    ///   values beyond `i64::MAX` are clamped to it
    /// - `None` - Either parameter is missing or invalid; the caller returns the bare list
    pub fn from_query(query: &PaginationQuery) -> Option<Self> {
        let limit = parse_window_value(query.limit.as_deref()?)?;
        let offset = parse_window_value(query.offset.as_deref()?)?;

        if limit == 0 {
            return None;
        }

        Some(Self { limit, offset })
    }

    /// Builds the link to the following page.
    ///
    /// # Arguments
    /// - `request_url` - Absolute URL of the current request
    /// - `count` - Size of the full record set
    ///
    /// # Returns
    /// - `Some(String)` - Request URL with `limit=L&offset=O+L`
    /// - `None` - The current page reaches the end of the set
    pub fn next_link(&self, request_url: &Url, count: u64) -> Option<String> {
        if self.offset.saturating_add(self.limit) >= count {
            return None;
        }

        let mut url = request_url.clone();
        set_query_param(&mut url, LIMIT_PARAM, Some(self.limit));
        set_query_param(&mut url, OFFSET_PARAM, Some(self.offset + self.limit));

        Some(url.to_string())
    }

    /// Builds the link to the preceding page.
    ///
    /// When stepping back lands at or before the start, the link drops `offset`
    /// altogether and keeps only `limit`.
    ///
    /// # Returns
    /// - `Some(String)` - Request URL with `limit=L` and `offset=O-L` or no offset
    /// - `None` - The current page starts at offset zero
    pub fn previous_link(&self, request_url: &Url) -> Option<String> {
        if self.offset == 0 {
            return None;
        }

        let mut url = request_url.clone();
        set_query_param(&mut url, LIMIT_PARAM, Some(self.limit));

        if self.offset <= self.limit {
            set_query_param(&mut url, OFFSET_PARAM, None);
        } else {
            set_query_param(&mut url, OFFSET_PARAM, Some(self.offset - self.limit));
        }

        Some(url.to_string())
    }
}

/// Parses a non-negative decimal integer, saturating at `MAX_WINDOW_VALUE`.
fn parse_window_value(raw: &str) -> Option<u64> {
    let raw = raw.trim();

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(
        raw.parse::<u64>()
            .map_or(MAX_WINDOW_VALUE, |value| value.min(MAX_WINDOW_VALUE)),
    )
}

/// Builds the absolute URL of a request from the application base URL.
///
/// # Arguments
/// - `app_url` - Configured application base URL, e.g. `https://example.com`
/// - `path_and_query` - Path and query of the incoming request
///
/// # Returns
/// - `Ok(Url)` - Absolute request URL
/// - `Err(url::ParseError)` - The base URL is invalid
pub fn request_url(app_url: &str, path_and_query: &str) -> Result<Url, url::ParseError> {
    Url::parse(app_url)?.join(path_and_query)
}

/// Replaces (or with `None` removes) a query parameter while keeping all others.
///
/// Parameters are re-encoded sorted by key so generated links are stable.
fn set_query_param(url: &mut Url, key: &str, value: Option<u64>) {
    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();

    for (k, v) in url.query_pairs() {
        params.entry(k.into_owned()).or_default().push(v.into_owned());
    }

    match value {
        Some(value) => {
            params.insert(key.to_string(), vec![value.to_string()]);
        }
        None => {
            params.remove(key);
        }
    }

    if params.is_empty() {
        url.set_query(None);
        return;
    }

    url.query_pairs_mut()
        .clear()
        .extend_pairs(
            params
                .iter()
                .flat_map(|(k, values)| values.iter().map(move |v| (k.as_str(), v.as_str()))),
        );
}
