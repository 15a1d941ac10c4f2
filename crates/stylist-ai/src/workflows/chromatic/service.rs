use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Local;
use tracing::{debug, info};

use super::classification::ChromaticEngine;
use super::domain::{AnalysisId, AnalysisSubmission, Season};
use super::intake::QuestionnaireIntake;
use super::questionnaire::Questionnaire;
use super::repository::{
    AnalysisRecord, AnalysisRepository, ConsultationError, ConsultationPublisher,
    ConsultationRequest, RepositoryError,
};

/// Service composing the intake sanitizer, scoring engine, repository, and
/// the downstream consultation seam.
pub struct ChromaticAnalysisService<R, P> {
    intake: Arc<QuestionnaireIntake>,
    repository: Arc<R>,
    consultations: Arc<P>,
    engine: Arc<ChromaticEngine>,
}

static ANALYSIS_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_analysis_id() -> AnalysisId {
    let id = ANALYSIS_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AnalysisId(format!("chroma-{id:06}"))
}

impl<R, P> ChromaticAnalysisService<R, P>
where
    R: AnalysisRepository + 'static,
    P: ConsultationPublisher + 'static,
{
    pub fn new(repository: Arc<R>, consultations: Arc<P>) -> Self {
        Self {
            intake: Arc::new(QuestionnaireIntake::default()),
            repository,
            consultations,
            engine: Arc::new(ChromaticEngine::new()),
        }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        self.intake.questionnaire()
    }

    /// Run one classification: sanitize, score, persist, and hand classified
    /// results to the consultation pipeline. Never fails on malformed input;
    /// only the storage and dispatch seams can error.
    pub fn analyze(
        &self,
        submission: AnalysisSubmission,
    ) -> Result<AnalysisRecord, AnalysisServiceError> {
        let sanitized = self.intake.sanitize(&submission.answers);
        for dropped in &sanitized.discarded {
            debug!(
                question = %dropped.question,
                value = %dropped.value,
                reason = ?dropped.reason,
                "ignoring unrecognized questionnaire answer"
            );
        }

        let assessment = self.engine.classify(&sanitized.answers);
        let analysis_id = next_analysis_id();
        let submitted_on = submission
            .submitted_on
            .unwrap_or_else(|| Local::now().date_naive());

        let record = AnalysisRecord {
            analysis_id: analysis_id.clone(),
            answers: sanitized.answers,
            client_reference: submission.client_reference,
            submitted_on,
            assessment,
        };

        let stored = self.repository.insert(record)?;
        info!(
            analysis_id = %stored.analysis_id.0,
            season = stored.assessment.season.label(),
            confidence = stored.assessment.confidence,
            "chromatic analysis recorded"
        );

        if stored.assessment.season != Season::Unknown {
            let mut details = BTreeMap::new();
            details.insert(
                "season".to_string(),
                stored.assessment.season.label().to_string(),
            );
            details.insert(
                "undertone".to_string(),
                stored.assessment.undertone.label().to_string(),
            );
            details.insert(
                "confidence".to_string(),
                stored.assessment.confidence.to_string(),
            );
            self.consultations.publish(ConsultationRequest {
                template: "palette_consultation".to_string(),
                analysis_id: stored.analysis_id.clone(),
                details,
            })?;
        }

        Ok(stored)
    }

    /// Fetch a stored analysis for API responses.
    pub fn fetch(&self, analysis_id: &AnalysisId) -> Result<AnalysisRecord, AnalysisServiceError> {
        let record = self
            .repository
            .fetch(analysis_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }
}

/// Error raised by the analysis service.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Consultation(#[from] ConsultationError),
}
