use serde::Serialize;

use super::domain::QuestionTopic;

/// Static self-assessment questionnaire shared between collector UIs and the
/// scoring engine. Built once at startup, read-only afterwards.
#[derive(Debug)]
pub struct Questionnaire {
    questions: Vec<Question>,
}

impl Questionnaire {
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// Whether `value` is a defined option for the question with `id`.
    pub fn is_valid_answer(&self, id: &str, value: &str) -> bool {
        self.question(id)
            .map(|question| question.options.iter().any(|option| option.value == value))
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub topic: QuestionTopic,
    pub prompt: &'static str,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionOption {
    pub value: &'static str,
    pub label: &'static str,
}

fn standard_questions() -> Vec<Question> {
    vec![
        Question {
            id: QuestionTopic::VeinColor.id(),
            topic: QuestionTopic::VeinColor,
            prompt: "In daylight, what color do the veins on the inside of your wrist appear?",
            options: vec![
                QuestionOption {
                    value: "blue",
                    label: "Blue or purple",
                },
                QuestionOption {
                    value: "green",
                    label: "Green or olive",
                },
                QuestionOption {
                    value: "mixed",
                    label: "A mix of both, or hard to tell",
                },
            ],
        },
        Question {
            id: QuestionTopic::SunReaction.id(),
            topic: QuestionTopic::SunReaction,
            prompt: "How does your skin usually react to sun exposure?",
            options: vec![
                QuestionOption {
                    value: "burns",
                    label: "Burns easily, rarely tans",
                },
                QuestionOption {
                    value: "tans",
                    label: "Tans easily, rarely burns",
                },
                QuestionOption {
                    value: "burns_then_tans",
                    label: "Burns first, then tans",
                },
                QuestionOption {
                    value: "deep_tan",
                    label: "Tans deeply, never burns",
                },
            ],
        },
        Question {
            id: QuestionTopic::Jewelry.id(),
            topic: QuestionTopic::Jewelry,
            prompt: "Which metal tones look best against your skin?",
            options: vec![
                QuestionOption {
                    value: "silver",
                    label: "Silver, white gold, or platinum",
                },
                QuestionOption {
                    value: "gold",
                    label: "Gold or rose gold",
                },
                QuestionOption {
                    value: "both",
                    label: "Both look equally good",
                },
            ],
        },
        Question {
            id: QuestionTopic::FavorableColors.id(),
            topic: QuestionTopic::FavorableColors,
            prompt: "Which group of colors earns you the most compliments?",
            options: vec![
                QuestionOption {
                    value: "cool_intense",
                    label: "Cool and intense: black, pure white, sapphire, fuchsia",
                },
                QuestionOption {
                    value: "cool_soft",
                    label: "Cool and soft: powder blue, lavender, dusty rose",
                },
                QuestionOption {
                    value: "warm_earthy",
                    label: "Warm and earthy: rust, olive, mustard, camel",
                },
                QuestionOption {
                    value: "warm_bright",
                    label: "Warm and bright: coral, peach, golden yellow",
                },
            ],
        },
        Question {
            id: QuestionTopic::MakeupBase.id(),
            topic: QuestionTopic::MakeupBase,
            prompt: "If you wear foundation, which base tone matches your skin? (optional)",
            options: vec![
                QuestionOption {
                    value: "pink",
                    label: "Pink or rosy based",
                },
                QuestionOption {
                    value: "yellow",
                    label: "Yellow or golden based",
                },
                QuestionOption {
                    value: "neutral",
                    label: "Neutral",
                },
                QuestionOption {
                    value: "none",
                    label: "I don't wear foundation / not sure",
                },
            ],
        },
    ]
}
