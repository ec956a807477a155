//! Rendering extracted parameters as text.

use crate::query::QueryParameterMap;
use anyhow::Result;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How extracted parameters are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name=value` per line, with `\`, newlines and `=` in names escaped.
    #[default]
    Lines,
    /// A JSON object (an array of objects for several URLs).
    Json,
    /// A TOML table (an array of `[[params]]` tables for several URLs).
    Toml,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown output format `{0}` (expected lines, json or toml)")]
pub struct UnknownFormat(pub String);

impl FromStr for OutputFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lines" => Ok(OutputFormat::Lines),
            "json" => Ok(OutputFormat::Json),
            "toml" => Ok(OutputFormat::Toml),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
            OutputFormat::Toml => "toml",
        };
        f.write_str(name)
    }
}

/// Parameter pairs in output order, serialized as a map.
struct Ordered<'a>(Vec<(&'a str, &'a str)>);

impl<'a> Ordered<'a> {
    fn new(params: &'a QueryParameterMap, sort_keys: bool) -> Self {
        let mut pairs: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if sort_keys {
            pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        }
        Ordered(pairs)
    }
}

impl Serialize for Ordered<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().copied())
    }
}

#[derive(Serialize)]
struct TomlBatch<'a> {
    params: Vec<Ordered<'a>>,
}

/// Renders one parameter map.
pub fn render(params: &QueryParameterMap, format: OutputFormat, sort_keys: bool) -> Result<String> {
    let ordered = Ordered::new(params, sort_keys);
    match format {
        OutputFormat::Lines => Ok(render_lines(&ordered)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ordered)? + "\n"),
        OutputFormat::Toml => Ok(toml::to_string_pretty(&ordered)?),
    }
}

/// Renders the maps of several URLs as one document.
///
/// `lines` separates results with a blank line; `json` emits an array;
/// `toml` emits one `[[params]]` table per URL.
pub fn render_all(
    results: &[QueryParameterMap],
    format: OutputFormat,
    sort_keys: bool,
) -> Result<String> {
    if let [single] = results {
        return render(single, format, sort_keys);
    }
    let ordered: Vec<Ordered<'_>> = results
        .iter()
        .map(|p| Ordered::new(p, sort_keys))
        .collect();
    match format {
        OutputFormat::Lines => Ok(ordered
            .iter()
            .map(render_lines)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ordered)? + "\n"),
        OutputFormat::Toml => Ok(toml::to_string_pretty(&TomlBatch { params: ordered })?),
    }
}

/// `json` and `toml` are lossless; `lines` escapes anything that would
/// split a line or move the first `=`.
fn render_lines(ordered: &Ordered<'_>) -> String {
    let mut out = String::new();
    for (name, value) in &ordered.0 {
        push_escaped(&mut out, name, true);
        out.push('=');
        push_escaped(&mut out, value, false);
        out.push('\n');
    }
    out
}

fn push_escaped(out: &mut String, field: &str, escape_eq: bool) {
    for c in field.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '=' if escape_eq => out.push_str("\\="),
            c => out.push(c),
        }
    }
}
