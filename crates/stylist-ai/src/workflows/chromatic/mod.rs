//! Chromatic analysis workflow: questionnaire intake, rule-based season
//! scoring, and reference palette lookups.
//!
//! The scoring engine is a pure function of its answer map; everything around
//! it (intake, persistence, consultation dispatch, routing) composes through
//! the service facade so collectors and presentation layers stay decoupled.

pub(crate) mod classification;
pub mod domain;
pub mod intake;
pub mod palette;
pub mod questionnaire;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use classification::{ChromaticAssessment, ChromaticEngine, ScoreComponent};
pub use domain::{
    AnalysisId, AnalysisSubmission, AnswerMap, QuestionTopic, Season, SeasonScores, Undertone,
};
pub use intake::{DiscardReason, DiscardedAnswer, QuestionnaireIntake, SanitizedAnswers};
pub use palette::{guide_for, ColorSwatch, SeasonGuide};
pub use questionnaire::{Question, QuestionOption, Questionnaire};
pub use repository::{
    AnalysisRecord, AnalysisRepository, AnalysisView, ConsultationError, ConsultationPublisher,
    ConsultationRequest, RepositoryError,
};
pub use router::chromatic_router;
pub use service::{AnalysisServiceError, ChromaticAnalysisService};
