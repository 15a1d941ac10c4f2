use super::domain::AnswerMap;
use super::questionnaire::Questionnaire;

/// Normalizes inbound answer maps against the questionnaire before scoring.
/// Intake never rejects a submission: unrecognized entries are set aside for
/// debug logging while the remainder flows on, so a half-finished
/// questionnaire is handled like any other.
#[derive(Debug)]
pub struct QuestionnaireIntake {
    questionnaire: Questionnaire,
}

impl Default for QuestionnaireIntake {
    fn default() -> Self {
        Self::new(Questionnaire::standard())
    }
}

impl QuestionnaireIntake {
    pub fn new(questionnaire: Questionnaire) -> Self {
        Self { questionnaire }
    }

    pub fn questionnaire(&self) -> &Questionnaire {
        &self.questionnaire
    }

    /// Split an answer map into entries the questionnaire defines and entries
    /// it does not.
    pub fn sanitize(&self, answers: &AnswerMap) -> SanitizedAnswers {
        let mut sanitized = AnswerMap::new();
        let mut discarded = Vec::new();

        for (question, value) in answers {
            if self.questionnaire.question(question).is_none() {
                discarded.push(DiscardedAnswer {
                    question: question.clone(),
                    value: value.clone(),
                    reason: DiscardReason::UnknownQuestion,
                });
            } else if !self.questionnaire.is_valid_answer(question, value) {
                discarded.push(DiscardedAnswer {
                    question: question.clone(),
                    value: value.clone(),
                    reason: DiscardReason::UnknownOption,
                });
            } else {
                sanitized.insert(question.clone(), value.clone());
            }
        }

        SanitizedAnswers {
            answers: sanitized,
            discarded,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedAnswers {
    pub answers: AnswerMap,
    pub discarded: Vec<DiscardedAnswer>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscardedAnswer {
    pub question: String,
    pub value: String,
    pub reason: DiscardReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    UnknownQuestion,
    UnknownOption,
}
