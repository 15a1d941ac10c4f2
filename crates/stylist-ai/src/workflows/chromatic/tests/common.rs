use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::chromatic::classification::ChromaticEngine;
use crate::workflows::chromatic::domain::{AnalysisId, AnalysisSubmission, AnswerMap};
use crate::workflows::chromatic::repository::{
    AnalysisRecord, AnalysisRepository, ConsultationError, ConsultationPublisher,
    ConsultationRequest, RepositoryError,
};
use crate::workflows::chromatic::{chromatic_router, ChromaticAnalysisService};

pub(super) fn answers(entries: &[(&str, &str)]) -> AnswerMap {
    entries
        .iter()
        .map(|(question, value)| (question.to_string(), value.to_string()))
        .collect()
}

pub(super) fn cool_winter_answers() -> AnswerMap {
    answers(&[
        ("vein_color", "blue"),
        ("sun_reaction", "burns"),
        ("jewelry", "silver"),
        ("favorable_colors", "cool_intense"),
        ("makeup_base", "pink"),
    ])
}

pub(super) fn warm_autumn_answers() -> AnswerMap {
    answers(&[
        ("vein_color", "green"),
        ("sun_reaction", "tans"),
        ("jewelry", "gold"),
        ("favorable_colors", "warm_earthy"),
        ("makeup_base", "yellow"),
    ])
}

pub(super) fn submission(answers: AnswerMap) -> AnalysisSubmission {
    AnalysisSubmission {
        answers,
        client_reference: Some("studio-booking-118".to_string()),
        submitted_on: NaiveDate::from_ymd_opt(2026, 3, 14),
    }
}

pub(super) fn engine() -> ChromaticEngine {
    ChromaticEngine::new()
}

pub(super) fn build_service() -> (
    ChromaticAnalysisService<MemoryRepository, MemoryConsultations>,
    Arc<MemoryRepository>,
    Arc<MemoryConsultations>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let consultations = Arc::new(MemoryConsultations::default());
    let service = ChromaticAnalysisService::new(repository.clone(), consultations.clone());
    (service, repository, consultations)
}

pub(super) fn chromatic_router_with_service(
    service: ChromaticAnalysisService<MemoryRepository, MemoryConsultations>,
) -> axum::Router {
    chromatic_router(Arc::new(service))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AnalysisId, AnalysisRecord>>>,
}

impl AnalysisRepository for MemoryRepository {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.analysis_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.analysis_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.values().take(limit).cloned().collect())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryConsultations {
    requests: Arc<Mutex<Vec<ConsultationRequest>>>,
}

impl MemoryConsultations {
    pub(super) fn requests(&self) -> Vec<ConsultationRequest> {
        self.requests.lock().expect("consultation mutex poisoned").clone()
    }
}

impl ConsultationPublisher for MemoryConsultations {
    fn publish(&self, request: ConsultationRequest) -> Result<(), ConsultationError> {
        self.requests
            .lock()
            .expect("consultation mutex poisoned")
            .push(request);
        Ok(())
    }
}

pub(super) struct UnavailableRepository;

impl AnalysisRepository for UnavailableRepository {
    fn insert(&self, _record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
