// Upstream request construction
pub mod upstream;

pub use upstream::{
    build_headers, build_match_url, resolve_match_id, UpstreamRequest, COMPETITION_ID,
    DEFAULT_BASE_URL, DEFAULT_MATCH_ID, UNKNOWN_ERROR_MESSAGE, UPSTREAM_ERROR_MESSAGE,
};
