//! Locating the query component and splitting it into entries.

/// Returns the raw query component of `url`: the text after the first `?`
/// and before the first `#`.
///
/// Returns `None` if there is no `?` ahead of the fragment. A bare `?`
/// yields `Some("")`.
pub fn query_component(url: &str) -> Option<&str> {
    let before_fragment = match url.find('#') {
        Some(idx) => &url[..idx],
        None => url,
    };
    let (_, query) = before_fragment.split_once('?')?;
    Some(query)
}

/// Splits one `&`-separated entry into its raw name and value.
///
/// Returns `None` for entries that carry no parameter: empty entries and
/// entries with an empty name (`=v`). An entry without `=` has an empty value.
pub(super) fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let (name, value) = entry.split_once('=').unwrap_or((entry, ""));
    if name.is_empty() {
        return None;
    }
    Some((name, value))
}
