use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::classification::ChromaticAssessment;
use super::domain::{AnalysisId, AnswerMap, SeasonScores};
use super::palette;

/// Stored outcome of one questionnaire run: the sanitized answers that were
/// scored plus the assessment they produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub analysis_id: AnalysisId,
    pub answers: AnswerMap,
    pub client_reference: Option<String>,
    pub submitted_on: NaiveDate,
    pub assessment: ChromaticAssessment,
}

impl AnalysisRecord {
    /// Sanitized representation exposed through the API.
    pub fn public_view(&self) -> AnalysisView {
        AnalysisView {
            analysis_id: self.analysis_id.clone(),
            season: self.assessment.season.label(),
            undertone: self.assessment.undertone.label(),
            confidence: self.assessment.confidence,
            scores: self.assessment.scores,
            headline: palette::guide_for(self.assessment.season).headline,
            summary: self.assessment.summary(),
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AnalysisRepository: Send + Sync {
    fn insert(&self, record: AnalysisRecord) -> Result<AnalysisRecord, RepositoryError>;
    fn fetch(&self, id: &AnalysisId) -> Result<Option<AnalysisRecord>, RepositoryError>;
    fn recent(&self, limit: usize) -> Result<Vec<AnalysisRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("analysis already exists")]
    Conflict,
    #[error("analysis not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Outbound seam toward the downstream consultation pipeline (detailed
/// palette and outfit generation happen outside this service).
pub trait ConsultationPublisher: Send + Sync {
    fn publish(&self, request: ConsultationRequest) -> Result<(), ConsultationError>;
}

/// Payload handed to the consultation pipeline once a season is classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    pub template: String,
    pub analysis_id: AnalysisId,
    pub details: BTreeMap<String, String>,
}

/// Consultation dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum ConsultationError {
    #[error("consultation transport unavailable: {0}")]
    Transport(String),
}

/// Public status payload for one analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisView {
    pub analysis_id: AnalysisId,
    pub season: &'static str,
    pub undertone: &'static str,
    pub confidence: u8,
    pub scores: SeasonScores,
    pub headline: &'static str,
    pub summary: String,
}
