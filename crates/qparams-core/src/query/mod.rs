//! Query parameter extraction.
//!
//! Turns the query component of a URL into a map of decoded names to decoded
//! values. Extraction is total: missing queries, empty entries and malformed
//! escapes simply contribute fewer entries, never an error.

mod component;
pub mod decode;

use std::collections::HashMap;

pub use component::query_component;
pub use decode::percent_decode;

/// Decoded query parameters. A repeated name keeps its last value.
pub type QueryParameterMap = HashMap<String, String>;

/// Extracts the decoded query parameters of `url`.
///
/// Accepts anything that reads as a string, including `url::Url`.
///
/// # Examples
///
/// - `extract_query_params("https://x.test/?a=1&b=2")` → `{a: "1", b: "2"}`
/// - `extract_query_params("https://x.test/?a=1&a=2")` → `{a: "2"}`
/// - `extract_query_params("https://x.test/")` → `{}`
pub fn extract_query_params<U: AsRef<str>>(url: U) -> QueryParameterMap {
    match query_component(url.as_ref()) {
        Some(query) => parse_query(query),
        None => QueryParameterMap::new(),
    }
}

/// Parses a raw query string (without the leading `?`) into decoded pairs.
pub fn parse_query(query: &str) -> QueryParameterMap {
    let mut params = QueryParameterMap::new();
    for (name, value) in query.split('&').filter_map(component::split_entry) {
        params.insert(percent_decode(name), percent_decode(value));
    }
    params
}
