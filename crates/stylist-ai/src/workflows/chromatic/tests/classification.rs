use super::common::*;
use crate::workflows::chromatic::domain::{AnswerMap, Season, SeasonScores, Undertone};

#[test]
fn empty_answers_yield_unknown_with_baseline_confidence() {
    let assessment = engine().classify(&AnswerMap::new());

    assert_eq!(assessment.season, Season::Unknown);
    assert_eq!(assessment.undertone, Undertone::Unknown);
    assert_eq!(assessment.confidence, 50);
    assert_eq!(assessment.scores, SeasonScores::zero());
    assert!(assessment.components.is_empty());
}

#[test]
fn unrecognized_entries_behave_like_empty_input() {
    let noise = answers(&[
        ("favorite_animal", "heron"),
        ("vein_color", "plaid"),
        ("sun_reaction", ""),
    ]);

    let from_noise = engine().classify(&noise);
    let from_empty = engine().classify(&AnswerMap::new());

    assert_eq!(from_noise, from_empty);
}

#[test]
fn favorable_colors_alone_classifies_winter_at_full_confidence() {
    let assessment = engine().classify(&answers(&[("favorable_colors", "cool_intense")]));

    assert_eq!(assessment.season, Season::Winter);
    assert_eq!(assessment.undertone, Undertone::Cool);
    assert_eq!(assessment.scores.winter, 3.0);
    assert_eq!(assessment.scores.spring, 0.0);
    assert_eq!(assessment.scores.summer, 0.0);
    assert_eq!(assessment.scores.autumn, 0.0);
    // Winner holds the entire total and the runner-up gap is 3, so no
    // dampening applies.
    assert_eq!(assessment.confidence, 100);
}

#[test]
fn full_cool_agreement_scores_winter_nine_over_fourteen() {
    let assessment = engine().classify(&cool_winter_answers());

    assert_eq!(assessment.season, Season::Winter);
    assert_eq!(assessment.undertone, Undertone::Cool);
    assert_eq!(assessment.scores.winter, 9.0);
    assert_eq!(assessment.scores.summer, 5.0);
    assert_eq!(assessment.scores.spring, 0.0);
    assert_eq!(assessment.scores.autumn, 0.0);
    // round(9 / 14 * 100) = 64; gap of 4 to summer leaves it undampened.
    assert_eq!(assessment.confidence, 64);
}

#[test]
fn full_warm_agreement_scores_autumn_over_spring() {
    let assessment = engine().classify(&warm_autumn_answers());

    assert_eq!(assessment.season, Season::Autumn);
    assert_eq!(assessment.undertone, Undertone::Warm);
    assert_eq!(assessment.scores.autumn, 8.0);
    assert_eq!(assessment.scores.spring, 6.0);
    // round(8 / 14 * 100) = 57; the gap of exactly 2 is not "less than 2",
    // so no dampening applies.
    assert_eq!(assessment.confidence, 57);
}

#[test]
fn burn_then_tan_tie_dampens_confidence_to_the_floor() {
    let assessment = engine().classify(&answers(&[("sun_reaction", "burns_then_tans")]));

    // Spring and summer tie at 0.5; spring comes first in the fixed order.
    assert_eq!(assessment.season, Season::Spring);
    assert_eq!(assessment.undertone, Undertone::Warm);
    assert_eq!(assessment.scores.spring, 0.5);
    assert_eq!(assessment.scores.summer, 0.5);
    // round(0.5 / 1.0 * 100) = 50, dampened by 20 but floored back at 50.
    assert_eq!(assessment.confidence, 50);
}

#[test]
fn exact_cross_axis_tie_resolves_in_season_order() {
    // Silver jewelry and green veins pull in opposite directions:
    // winter 2, spring 2, summer 1, autumn 2: a three-way tie.
    let assessment = engine().classify(&answers(&[
        ("jewelry", "silver"),
        ("vein_color", "green"),
    ]));

    assert_eq!(assessment.season, Season::Winter);
    assert_eq!(assessment.scores.winter, 2.0);
    assert_eq!(assessment.scores.spring, 2.0);
    assert_eq!(assessment.scores.summer, 1.0);
    assert_eq!(assessment.scores.autumn, 2.0);
    // round(2 / 7 * 100) = 29, dampened to 9, floored at 50.
    assert_eq!(assessment.confidence, 50);
}

#[test]
fn each_color_group_maps_to_its_season_and_undertone() {
    let cases = [
        ("cool_intense", Season::Winter, Undertone::Cool),
        ("cool_soft", Season::Summer, Undertone::Cool),
        ("warm_earthy", Season::Autumn, Undertone::Warm),
        ("warm_bright", Season::Spring, Undertone::Warm),
    ];

    for (value, season, undertone) in cases {
        let assessment = engine().classify(&answers(&[("favorable_colors", value)]));
        assert_eq!(assessment.season, season, "value {value}");
        assert_eq!(assessment.undertone, undertone, "value {value}");
        assert_eq!(assessment.confidence, 100, "value {value}");
    }
}

#[test]
fn neutral_options_carry_no_signal() {
    let assessment = engine().classify(&answers(&[
        ("vein_color", "mixed"),
        ("sun_reaction", "deep_tan"),
        ("jewelry", "both"),
        ("makeup_base", "neutral"),
    ]));

    assert_eq!(assessment.season, Season::Unknown);
    assert_eq!(assessment.confidence, 50);
    assert_eq!(assessment.scores, SeasonScores::zero());
}

#[test]
fn score_vector_serializes_with_exactly_the_four_real_seasons() {
    let assessment = engine().classify(&cool_winter_answers());
    let value = serde_json::to_value(assessment.scores).expect("scores serialize");
    let object = value.as_object().expect("scores are an object");

    assert_eq!(object.len(), 4);
    for key in ["winter", "spring", "summer", "autumn"] {
        assert!(object.contains_key(key), "missing {key}");
    }
}

#[test]
fn classification_is_total_and_deterministic_over_every_option_combination() {
    let vein = [None, Some("blue"), Some("green"), Some("mixed")];
    let sun = [
        None,
        Some("burns"),
        Some("tans"),
        Some("burns_then_tans"),
        Some("deep_tan"),
    ];
    let jewelry = [None, Some("silver"), Some("gold"), Some("both")];
    let colors = [
        None,
        Some("cool_intense"),
        Some("cool_soft"),
        Some("warm_earthy"),
        Some("warm_bright"),
    ];
    let makeup = [None, Some("pink"), Some("yellow"), Some("neutral"), Some("none")];

    let engine = engine();
    for vein_value in vein {
        for sun_value in sun {
            for jewelry_value in jewelry {
                for colors_value in colors {
                    for makeup_value in makeup {
                        let mut map = AnswerMap::new();
                        let entries = [
                            ("vein_color", vein_value),
                            ("sun_reaction", sun_value),
                            ("jewelry", jewelry_value),
                            ("favorable_colors", colors_value),
                            ("makeup_base", makeup_value),
                        ];
                        for (question, value) in entries {
                            if let Some(value) = value {
                                map.insert(question.to_string(), value.to_string());
                            }
                        }

                        let assessment = engine.classify(&map);

                        assert!(assessment.confidence <= 100, "answers {map:?}");
                        for season in Season::SCORING_ORDER {
                            assert!(
                                assessment.scores.get(season) >= 0.0,
                                "answers {map:?}"
                            );
                        }
                        let expected_undertone = match assessment.season {
                            Season::Winter | Season::Summer => Undertone::Cool,
                            Season::Spring | Season::Autumn => Undertone::Warm,
                            Season::Unknown => Undertone::Unknown,
                        };
                        assert_eq!(
                            assessment.undertone, expected_undertone,
                            "answers {map:?}"
                        );
                        if assessment.season == Season::Unknown {
                            assert_eq!(
                                assessment.scores,
                                SeasonScores::zero(),
                                "answers {map:?}"
                            );
                        }

                        assert_eq!(assessment, engine.classify(&map), "answers {map:?}");
                    }
                }
            }
        }
    }
}

#[test]
fn season_label_round_trips_through_from_label() {
    for season in Season::SCORING_ORDER {
        assert_eq!(Season::from_label(season.label()), season);
    }
    assert_eq!(Season::from_label("fall"), Season::Autumn);
    assert_eq!(Season::from_label("  Winter "), Season::Winter);
    assert_eq!(Season::from_label("galaxy"), Season::Unknown);
}

#[test]
fn undertone_label_round_trips_through_from_label() {
    for undertone in [
        Undertone::Cool,
        Undertone::Warm,
        Undertone::Neutral,
        Undertone::Unknown,
    ] {
        assert_eq!(Undertone::from_label(undertone.label()), undertone);
    }
    assert_eq!(Undertone::from_label("olive"), Undertone::Unknown);
}
