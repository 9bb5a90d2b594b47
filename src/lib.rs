//! Kings Proxy - match data proxy for the Kings League fan site
//!
//! Forwards match lookups to the official Kings League API with browser-like
//! headers and relays the JSON document, or a translated error, to the caller.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{build_headers, build_match_url, resolve_match_id, UpstreamRequest};
pub use services::{KingsLeagueClient, KingsLeagueError, MatchFeed};
