use actix_web::{http::header, web, HttpResponse, Responder};
use crate::models::{HealthResponse, MatchQuery};
use crate::services::{KingsLeagueError, MatchFeed};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<dyn MatchFeed>,
    pub revalidate_secs: u64,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::get().to(get_match));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// `Cache-Control` value letting the hosting layer revalidate every `revalidate_secs`
pub fn cache_control(revalidate_secs: u64) -> String {
    format!("public, s-maxage={}, stale-while-revalidate", revalidate_secs)
}

/// Match data proxy endpoint
///
/// GET /api/match?matchId={matchId}
///
/// Relays the official match document unchanged. Upstream failures keep the
/// upstream status:
/// ```json
/// { "error": "Erro ao buscar dados oficiais", "status": 404 }
/// ```
/// Anything else is a 500 with `{ "error": "<message>" }`.
async fn get_match(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, KingsLeagueError> {
    let query = MatchQuery::from_pairs(query.into_inner());
    let match_id = query.match_id.as_deref();

    tracing::info!("Proxying match request: matchId={:?}", match_id);

    let document = state.feed.fetch_match(match_id).await.map_err(|e| {
        match &e {
            KingsLeagueError::Upstream(_) => {
                tracing::warn!("Official API rejected match {:?}: {}", match_id, e)
            }
            _ => tracing::error!("Failed to fetch match {:?}: {}", match_id, e),
        }
        e
    })?;

    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, cache_control(state.revalidate_secs)))
        .json(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_control_value() {
        assert_eq!(cache_control(300), "public, s-maxage=300, stale-while-revalidate");
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }
}
