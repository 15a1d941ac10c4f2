use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use stylist_ai::workflows::chromatic::{
    AnalysisId, AnalysisRecord, AnalysisRepository, ConsultationError, ConsultationPublisher,
    ConsultationRequest, RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAnalysisRepository {
    records: Arc<Mutex<HashMap<AnalysisId, AnalysisRecord>>>,
}

impl AnalysisRepository for InMemoryAnalysisRepository {
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
        let mut records: Vec<AnalysisRecord> = guard.values().cloned().collect();
        records.sort_by(|a, b| b.submitted_on.cmp(&a.submitted_on));
        records.truncate(limit);
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryConsultationPublisher {
    requests: Arc<Mutex<Vec<ConsultationRequest>>>,
}

impl ConsultationPublisher for InMemoryConsultationPublisher {
    fn publish(&self, request: ConsultationRequest) -> Result<(), ConsultationError> {
        let mut guard = self.requests.lock().expect("consultation mutex poisoned");
        guard.push(request);
        Ok(())
    }
}

impl InMemoryConsultationPublisher {
    pub(crate) fn requests(&self) -> Vec<ConsultationRequest> {
        self.requests.lock().expect("consultation mutex poisoned").clone()
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_answer(raw: &str) -> Result<(String, String), String> {
    let (question, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected question=value, got '{raw}'"))?;
    let question = question.trim();
    let value = value.trim();
    if question.is_empty() || value.is_empty() {
        return Err(format!("expected question=value, got '{raw}'"));
    }
    Ok((question.to_string(), value.to_string()))
}
