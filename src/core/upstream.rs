use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, REFERER, USER_AGENT};

/// Match shown when the caller does not ask for one
pub const DEFAULT_MATCH_ID: &str = "1913";

/// Competition every upstream request is scoped to
pub const COMPETITION_ID: u32 = 17;

/// Public Kings League host
pub const DEFAULT_BASE_URL: &str = "https://kingsleague.pro";

pub const ACCEPT_VALUE: &str = "*/*";

pub const USER_AGENT_VALUE: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// The upstream only answers requests that look like they come from its own match listing
pub const REFERER_VALUE: &str = "https://kingsleague.pro/pt/brazil/jogos/";

/// Body message when the upstream answers with a non-2xx status
pub const UPSTREAM_ERROR_MESSAGE: &str = "Erro ao buscar dados oficiais";

/// Body message when an internal failure carries no message of its own
pub const UNKNOWN_ERROR_MESSAGE: &str = "Erro desconhecido";

/// Pick the match to fetch, falling back to [`DEFAULT_MATCH_ID`] for a missing or empty value.
///
/// The value is not checked for being numeric; it is substituted into the URL as given.
pub fn resolve_match_id(match_id: Option<&str>) -> &str {
    match match_id {
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_MATCH_ID,
    }
}

/// Build the upstream match endpoint URL
///
/// Always carries `live=false` and the fixed competition id.
pub fn build_match_url(base_url: &str, match_id: &str) -> String {
    format!(
        "{}/api/v1/competition/matches/{}?live=false&competitionId={}",
        base_url.trim_end_matches('/'),
        match_id,
        COMPETITION_ID
    )
}

/// Headers impersonating a desktop browser browsing the Kings League site
pub fn build_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(REFERER, HeaderValue::from_static(REFERER_VALUE));
    headers
}

/// Fully resolved outbound request, built without touching the network
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    pub match_id: String,
    pub url: String,
    pub headers: HeaderMap,
}

impl UpstreamRequest {
    pub fn for_match(base_url: &str, match_id: Option<&str>) -> Self {
        let match_id = resolve_match_id(match_id);

        Self {
            match_id: match_id.to_string(),
            url: build_match_url(base_url, match_id),
            headers: build_headers(),
        }
    }
}
