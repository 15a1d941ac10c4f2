mod rules;
mod verdict;

use serde::{Deserialize, Serialize};

use super::domain::{AnswerMap, QuestionTopic, Season, SeasonScores, Undertone};

/// Stateless engine applying the season scoring rubric to questionnaire
/// answers. Pure: no I/O, no shared mutable state, callable from any task
/// without synchronization.
#[derive(Debug, Default)]
pub struct ChromaticEngine;

impl ChromaticEngine {
    pub fn new() -> Self {
        Self
    }

    /// Classify a (possibly partial, possibly empty) answer map. Entries with
    /// unrecognized question ids or option values contribute no signal; the
    /// call always returns a well-formed assessment.
    pub fn classify(&self, answers: &AnswerMap) -> ChromaticAssessment {
        let (scores, components) = rules::score_answers(answers);
        let verdict = verdict::resolve(&scores);

        ChromaticAssessment {
            season: verdict.season,
            undertone: verdict.season.undertone(),
            confidence: verdict.confidence,
            scores,
            components,
        }
    }
}

/// Discrete score increment, allowing transparent audits of a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub topic: QuestionTopic,
    pub season: Season,
    pub points: f32,
    pub notes: String,
}

/// Classification output: the winning season, its derived undertone, a
/// confidence percentage, and the full score vector behind the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChromaticAssessment {
    pub season: Season,
    pub undertone: Undertone,
    pub confidence: u8,
    pub scores: SeasonScores,
    pub components: Vec<ScoreComponent>,
}

impl ChromaticAssessment {
    pub fn summary(&self) -> String {
        match self.season {
            Season::Unknown => format!(
                "not enough signal to classify (confidence {}%)",
                self.confidence
            ),
            season => format!(
                "{} with a {} undertone (confidence {}%)",
                season.label(),
                self.undertone.label(),
                self.confidence
            ),
        }
    }
}
