use super::super::domain::{AnswerMap, QuestionTopic, Season, SeasonScores};
use super::ScoreComponent;

/// Run the five independent rule groups over the answer map. Each group
/// inspects one question and credits one or more seasons; groups accumulate
/// additively and never subtract. Unrecognized values fall through silently.
pub(crate) fn score_answers(answers: &AnswerMap) -> (SeasonScores, Vec<ScoreComponent>) {
    let mut scores = SeasonScores::zero();
    let mut components = Vec::new();

    score_vein_color(answers, &mut scores, &mut components);
    score_sun_reaction(answers, &mut scores, &mut components);
    score_jewelry(answers, &mut scores, &mut components);
    score_favorable_colors(answers, &mut scores, &mut components);
    score_makeup_base(answers, &mut scores, &mut components);

    (scores, components)
}

fn answer<'a>(answers: &'a AnswerMap, topic: QuestionTopic) -> Option<&'a str> {
    answers.get(topic.id()).map(String::as_str)
}

fn credit(
    scores: &mut SeasonScores,
    components: &mut Vec<ScoreComponent>,
    topic: QuestionTopic,
    season: Season,
    points: f32,
    notes: &str,
) {
    scores.add(season, points);
    components.push(ScoreComponent {
        topic,
        season,
        points,
        notes: notes.to_string(),
    });
}

fn score_vein_color(
    answers: &AnswerMap,
    scores: &mut SeasonScores,
    components: &mut Vec<ScoreComponent>,
) {
    let topic = QuestionTopic::VeinColor;
    match answer(answers, topic) {
        Some("blue") => {
            let notes = "blue-violet veins read cool";
            credit(scores, components, topic, Season::Winter, 2.0, notes);
            credit(scores, components, topic, Season::Summer, 2.0, notes);
        }
        Some("green") => {
            let notes = "green-olive veins read warm";
            credit(scores, components, topic, Season::Spring, 2.0, notes);
            credit(scores, components, topic, Season::Autumn, 2.0, notes);
        }
        // "mixed" and anything unrecognized carry no signal.
        _ => {}
    }
}

fn score_sun_reaction(
    answers: &AnswerMap,
    scores: &mut SeasonScores,
    components: &mut Vec<ScoreComponent>,
) {
    let topic = QuestionTopic::SunReaction;
    match answer(answers, topic) {
        Some("burns") => {
            let notes = "burning skin pairs with the cool seasons";
            credit(scores, components, topic, Season::Winter, 1.0, notes);
            credit(scores, components, topic, Season::Summer, 1.0, notes);
        }
        Some("tans") => {
            let notes = "ready tanning pairs with the warm seasons";
            credit(scores, components, topic, Season::Autumn, 1.0, notes);
            credit(scores, components, topic, Season::Spring, 1.0, notes);
        }
        Some("burns_then_tans") => {
            let notes = "burn-then-tan skin splits the light seasons";
            credit(scores, components, topic, Season::Spring, 0.5, notes);
            credit(scores, components, topic, Season::Summer, 0.5, notes);
        }
        // "deep_tan" gives no season signal on its own.
        _ => {}
    }
}

fn score_jewelry(
    answers: &AnswerMap,
    scores: &mut SeasonScores,
    components: &mut Vec<ScoreComponent>,
) {
    let topic = QuestionTopic::Jewelry;
    match answer(answers, topic) {
        Some("silver") => {
            let notes = "silver metals flatter a cool base";
            credit(scores, components, topic, Season::Winter, 2.0, notes);
            credit(scores, components, topic, Season::Summer, 1.0, notes);
        }
        Some("gold") => {
            let notes = "gold metals flatter a warm base";
            credit(scores, components, topic, Season::Spring, 2.0, notes);
            credit(scores, components, topic, Season::Autumn, 1.0, notes);
        }
        // "both equally" is neutral.
        _ => {}
    }
}

fn score_favorable_colors(
    answers: &AnswerMap,
    scores: &mut SeasonScores,
    components: &mut Vec<ScoreComponent>,
) {
    let topic = QuestionTopic::FavorableColors;
    // The strongest single signal: exactly one season is credited.
    let (season, notes) = match answer(answers, topic) {
        Some("cool_intense") => (Season::Winter, "cool saturated palette is the winter signature"),
        Some("cool_soft") => (Season::Summer, "cool muted palette is the summer signature"),
        Some("warm_earthy") => (Season::Autumn, "warm earthy palette is the autumn signature"),
        Some("warm_bright") => (Season::Spring, "warm bright palette is the spring signature"),
        _ => return,
    };
    credit(scores, components, topic, season, 3.0, notes);
}

fn score_makeup_base(
    answers: &AnswerMap,
    scores: &mut SeasonScores,
    components: &mut Vec<ScoreComponent>,
) {
    let topic = QuestionTopic::MakeupBase;
    match answer(answers, topic) {
        Some("pink") => {
            let notes = "pink foundation base leans cool";
            credit(scores, components, topic, Season::Winter, 1.0, notes);
            credit(scores, components, topic, Season::Summer, 1.0, notes);
        }
        Some("yellow") => {
            let notes = "golden foundation base leans warm";
            credit(scores, components, topic, Season::Spring, 1.0, notes);
            credit(scores, components, topic, Season::Autumn, 1.0, notes);
        }
        // "neutral" and "none" carry no signal.
        _ => {}
    }
}
