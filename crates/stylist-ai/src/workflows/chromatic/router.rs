use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::domain::{AnalysisId, AnalysisSubmission, Season};
use super::palette;
use super::repository::{AnalysisRepository, ConsultationPublisher, RepositoryError};
use super::service::{AnalysisServiceError, ChromaticAnalysisService};

/// Router builder exposing the chromatic analysis endpoints.
pub fn chromatic_router<R, P>(service: Arc<ChromaticAnalysisService<R, P>>) -> Router
where
    R: AnalysisRepository + 'static,
    P: ConsultationPublisher + 'static,
{
    Router::new()
        .route("/api/v1/chromatic/analyses", post(analyze_handler::<R, P>))
        .route(
            "/api/v1/chromatic/analyses/:analysis_id",
            get(analysis_handler::<R, P>),
        )
        .route(
            "/api/v1/chromatic/questionnaire",
            get(questionnaire_handler::<R, P>),
        )
        .route("/api/v1/chromatic/seasons/:season", get(season_handler))
        .with_state(service)
}

pub(crate) async fn analyze_handler<R, P>(
    State(service): State<Arc<ChromaticAnalysisService<R, P>>>,
    axum::Json(submission): axum::Json<AnalysisSubmission>,
) -> Response
where
    R: AnalysisRepository + 'static,
    P: ConsultationPublisher + 'static,
{
    match service.analyze(submission) {
        Ok(record) => {
            let view = record.public_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(AnalysisServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "analysis already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn analysis_handler<R, P>(
    State(service): State<Arc<ChromaticAnalysisService<R, P>>>,
    Path(analysis_id): Path<String>,
) -> Response
where
    R: AnalysisRepository + 'static,
    P: ConsultationPublisher + 'static,
{
    let id = AnalysisId(analysis_id);
    match service.fetch(&id) {
        Ok(record) => {
            let view = record.public_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(AnalysisServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "analysis_id": id.0,
                "error": "analysis not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questionnaire_handler<R, P>(
    State(service): State<Arc<ChromaticAnalysisService<R, P>>>,
) -> Response
where
    R: AnalysisRepository + 'static,
    P: ConsultationPublisher + 'static,
{
    let questions = service.questionnaire().questions();
    (StatusCode::OK, axum::Json(questions)).into_response()
}

/// Reference lookup; unrecognized labels resolve to the generic fallback
/// guide instead of an error.
pub(crate) async fn season_handler(Path(season): Path<String>) -> Response {
    let guide = palette::guide_for(Season::from_label(&season));
    (StatusCode::OK, axum::Json(guide)).into_response()
}
