use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use stylist_ai::workflows::chromatic::{
    chromatic_router, guide_for, AnalysisRepository, ChromaticAnalysisService,
    ConsultationPublisher, Season,
};

/// Entry in the season reference index.
#[derive(Debug, Serialize)]
pub(crate) struct SeasonIndexEntry {
    pub(crate) season: &'static str,
    pub(crate) undertone: &'static str,
    pub(crate) headline: &'static str,
}

pub(crate) fn with_chromatic_routes<R, P>(
    service: Arc<ChromaticAnalysisService<R, P>>,
) -> axum::Router
where
    R: AnalysisRepository + 'static,
    P: ConsultationPublisher + 'static,
{
    chromatic_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/chromatic/seasons",
            axum::routing::get(seasons_index_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Reference index of the four real seasons for presentation layers.
pub(crate) async fn seasons_index_endpoint() -> Json<Vec<SeasonIndexEntry>> {
    let entries = Season::SCORING_ORDER
        .iter()
        .map(|&season| SeasonIndexEntry {
            season: season.label(),
            undertone: season.undertone().label(),
            headline: guide_for(season).headline,
        })
        .collect();
    Json(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seasons_index_lists_the_four_real_seasons() {
        let Json(entries) = seasons_index_endpoint().await;

        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].season, "winter");
        assert_eq!(entries[0].undertone, "cool");
        assert!(entries.iter().all(|entry| entry.season != "unknown"));
    }

    #[tokio::test]
    async fn seasons_index_exposes_palette_headlines() {
        let Json(entries) = seasons_index_endpoint().await;

        assert!(entries.iter().all(|entry| !entry.headline.is_empty()));
        let undertones: Vec<&str> = entries.iter().map(|entry| entry.undertone).collect();
        assert_eq!(undertones, vec!["cool", "warm", "cool", "warm"]);
    }
}
