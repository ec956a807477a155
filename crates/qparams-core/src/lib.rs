pub mod config;
pub mod logging;
pub mod output;
pub mod query;

pub use query::{extract_query_params, parse_query, QueryParameterMap};
