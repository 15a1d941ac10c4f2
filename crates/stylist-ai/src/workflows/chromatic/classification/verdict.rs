use super::super::domain::{Season, SeasonScores};

// Empirically tuned constants; changing any of them changes classifications.
const BASELINE_CONFIDENCE: i16 = 50;
const TIE_GAP_THRESHOLD: f32 = 2.0;
const TIE_CONFIDENCE_PENALTY: i16 = 20;
const CONFIDENCE_FLOOR: i16 = 50;

pub(crate) struct Verdict {
    pub season: Season,
    pub confidence: u8,
}

/// Pick the winning season and its confidence from the accumulated scores.
pub(crate) fn resolve(scores: &SeasonScores) -> Verdict {
    let season = winning_season(scores);
    let confidence = confidence_for(scores, season);
    Verdict { season, confidence }
}

/// First strictly-greatest score in the fixed season order wins; an exact tie
/// keeps the earlier season. All scores at or below zero leave `Unknown`.
fn winning_season(scores: &SeasonScores) -> Season {
    let mut winner = Season::Unknown;
    let mut best = 0.0_f32;

    for season in Season::SCORING_ORDER {
        let score = scores.get(season);
        if score > best {
            winner = season;
            best = score;
        }
    }

    winner
}

fn confidence_for(scores: &SeasonScores, winner: Season) -> u8 {
    let total = scores.total();
    let mut confidence = if total <= 0.0 {
        BASELINE_CONFIDENCE
    } else {
        ((scores.get(winner) / total) * 100.0).round() as i16
    };

    // A near-tie between the top two seasons dampens confidence, floored.
    let ranked = scores.ranked();
    if ranked[0] - ranked[1] < TIE_GAP_THRESHOLD {
        confidence = (confidence - TIE_CONFIDENCE_PENALTY).max(CONFIDENCE_FLOOR);
    }

    confidence.clamp(0, 100) as u8
}
