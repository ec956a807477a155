//! CLI command handlers. Each command is in its own file.

mod extract;
mod get;

pub use extract::run_extract;
pub use get::run_get;

use qparams_core::output::OutputFormat;

/// Output options resolved from config and command-line flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    pub format: OutputFormat,
    pub sort_keys: bool,
}
