use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for stored chromatic analyses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnalysisId(pub String);

/// Question id to chosen option value, as collected by a questionnaire UI.
/// Any subset of the defined questions may be present.
pub type AnswerMap = BTreeMap<String, String>;

/// The four classical color seasons plus a sentinel for signal-free input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
    Unknown,
}

impl Season {
    /// Fixed evaluation order for picking a winner; earlier entries win ties.
    pub const SCORING_ORDER: [Season; 4] =
        [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    pub const fn label(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Unknown => "unknown",
        }
    }

    /// The undertone is fully determined by the season.
    pub const fn undertone(self) -> Undertone {
        match self {
            Season::Winter | Season::Summer => Undertone::Cool,
            Season::Spring | Season::Autumn => Undertone::Warm,
            Season::Unknown => Undertone::Unknown,
        }
    }

    /// Parse an externally-sourced label, mapping anything unrecognized to
    /// `Unknown` instead of failing.
    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "winter" => Season::Winter,
            "spring" => Season::Spring,
            "summer" => Season::Summer,
            "autumn" | "fall" => Season::Autumn,
            _ => Season::Unknown,
        }
    }
}

/// Skin undertone families. `Neutral` is only ever carried through from
/// external labels; the season derivation never produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Undertone {
    Cool,
    Warm,
    Neutral,
    Unknown,
}

impl Undertone {
    pub const fn label(self) -> &'static str {
        match self {
            Undertone::Cool => "cool",
            Undertone::Warm => "warm",
            Undertone::Neutral => "neutral",
            Undertone::Unknown => "unknown",
        }
    }

    pub fn from_label(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "cool" => Undertone::Cool,
            "warm" => Undertone::Warm,
            "neutral" => Undertone::Neutral,
            _ => Undertone::Unknown,
        }
    }
}

/// The five questionnaire topics permitted to contribute score signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTopic {
    VeinColor,
    SunReaction,
    Jewelry,
    FavorableColors,
    MakeupBase,
}

impl QuestionTopic {
    pub const ALL: [QuestionTopic; 5] = [
        QuestionTopic::VeinColor,
        QuestionTopic::SunReaction,
        QuestionTopic::Jewelry,
        QuestionTopic::FavorableColors,
        QuestionTopic::MakeupBase,
    ];

    /// Wire identifier used as the `AnswerMap` key for this topic.
    pub const fn id(self) -> &'static str {
        match self {
            QuestionTopic::VeinColor => "vein_color",
            QuestionTopic::SunReaction => "sun_reaction",
            QuestionTopic::Jewelry => "jewelry",
            QuestionTopic::FavorableColors => "favorable_colors",
            QuestionTopic::MakeupBase => "makeup_base",
        }
    }
}

/// Accumulated score per real season. Keeping one field per season (rather
/// than a map) makes "exactly four keys, never `Unknown`" structural.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeasonScores {
    pub winter: f32,
    pub spring: f32,
    pub summer: f32,
    pub autumn: f32,
}

impl SeasonScores {
    pub const fn zero() -> Self {
        Self {
            winter: 0.0,
            spring: 0.0,
            summer: 0.0,
            autumn: 0.0,
        }
    }

    /// `Unknown` holds no score and reads as 0.
    pub fn get(&self, season: Season) -> f32 {
        match season {
            Season::Winter => self.winter,
            Season::Spring => self.spring,
            Season::Summer => self.summer,
            Season::Autumn => self.autumn,
            Season::Unknown => 0.0,
        }
    }

    /// Add points to a real season; crediting `Unknown` is a no-op.
    pub fn add(&mut self, season: Season, points: f32) {
        match season {
            Season::Winter => self.winter += points,
            Season::Spring => self.spring += points,
            Season::Summer => self.summer += points,
            Season::Autumn => self.autumn += points,
            Season::Unknown => {}
        }
    }

    /// Sum of the four seasons with negative entries floored at 0. The
    /// shipped weights are all non-negative, so the floor only matters if a
    /// future rule subtracts points.
    pub fn total(&self) -> f32 {
        [self.winter, self.spring, self.summer, self.autumn]
            .iter()
            .map(|score| score.max(0.0))
            .sum()
    }

    /// The four raw scores ordered highest first.
    pub fn ranked(&self) -> [f32; 4] {
        let mut ordered = [self.winter, self.spring, self.summer, self.autumn];
        ordered.sort_by(|a, b| b.total_cmp(a));
        ordered
    }
}

impl Default for SeasonScores {
    fn default() -> Self {
        Self::zero()
    }
}

/// Inbound questionnaire submission as posted by a collector UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSubmission {
    pub answers: AnswerMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_on: Option<NaiveDate>,
}
