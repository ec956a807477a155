//! `qparams get` – print a single parameter value.

use anyhow::{bail, Result};
use qparams_core::extract_query_params;
use std::io::Write;

/// Writes the decoded value of parameter `name` in `url`, or fails if it is absent.
pub fn run_get<W: Write>(url: &str, name: &str, out: &mut W) -> Result<()> {
    let params = extract_query_params(url);
    match params.get(name) {
        Some(value) => {
            writeln!(out, "{}", value)?;
            out.flush()?;
            Ok(())
        }
        None => {
            tracing::debug!("parameter {} not in {} ({} present)", name, url, params.len());
            bail!("parameter {} not present", name)
        }
    }
}
