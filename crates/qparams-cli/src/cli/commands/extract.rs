//! `qparams extract` – print the parameters of one or more URLs.

use super::RenderSettings;
use anyhow::{Context, Result};
use qparams_core::output::render_all;
use qparams_core::{extract_query_params, QueryParameterMap};
use std::io::{BufRead, Write};

/// Extracts `urls`, or every non-blank line of `input` when `urls` is empty,
/// and writes the rendered result to `out`.
pub fn run_extract<R: BufRead, W: Write>(
    urls: &[String],
    input: R,
    out: &mut W,
    settings: RenderSettings,
) -> Result<()> {
    let results: Vec<QueryParameterMap> = if urls.is_empty() {
        let mut results = Vec::new();
        for line in input.lines() {
            let line = line.context("read URL from stdin")?;
            let url = line.trim();
            if url.is_empty() {
                continue;
            }
            results.push(extract_query_params(url));
        }
        results
    } else {
        urls.iter().map(extract_query_params).collect()
    };

    tracing::debug!(
        "extracted {} url(s), {} parameter(s) total",
        results.len(),
        results.iter().map(|p| p.len()).sum::<usize>()
    );

    let rendered = render_all(&results, settings.format, settings.sort_keys)?;
    out.write_all(rendered.as_bytes()).context("write parameters")?;
    out.flush()?;
    Ok(())
}
