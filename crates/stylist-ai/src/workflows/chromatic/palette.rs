use serde::Serialize;

use super::domain::Season;

/// Presentation-ready reference data for one season: descriptive text, the
/// recommended palette, and colors to approach with caution.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonGuide {
    pub season: Season,
    pub headline: &'static str,
    pub description: &'static str,
    pub recommended: Vec<ColorSwatch>,
    pub cautions: Vec<ColorSwatch>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
    pub rationale: &'static str,
}

/// Pure lookup. `Unknown` (including unrecognized external labels mapped to
/// it) resolves to a generic fallback with empty palettes rather than failing.
pub fn guide_for(season: Season) -> SeasonGuide {
    match season {
        Season::Winter => SeasonGuide {
            season,
            headline: "Deep, cool, and high-contrast",
            description: "Winter coloring carries cool undertones with strong \
                contrast between skin, hair, and eyes. Saturated jewel tones \
                and crisp neutrals amplify that contrast; softened or earthy \
                shades flatten it.",
            recommended: vec![
                ColorSwatch {
                    name: "True black",
                    hex: "#000000",
                    rationale: "maximum contrast anchors the winter wardrobe",
                },
                ColorSwatch {
                    name: "Pure white",
                    hex: "#FFFFFF",
                    rationale: "crisp white mirrors winter's natural contrast",
                },
                ColorSwatch {
                    name: "Sapphire",
                    hex: "#0F52BA",
                    rationale: "cool saturated blue brightens the eyes",
                },
                ColorSwatch {
                    name: "Emerald",
                    hex: "#046307",
                    rationale: "deep jewel green holds its own against strong features",
                },
                ColorSwatch {
                    name: "Fuchsia",
                    hex: "#C154C1",
                    rationale: "blue-pink intensity lifts a cool complexion",
                },
            ],
            cautions: vec![
                ColorSwatch {
                    name: "Camel",
                    hex: "#C19A6B",
                    rationale: "warm earth tones dull winter contrast",
                },
                ColorSwatch {
                    name: "Mustard",
                    hex: "#E1AD01",
                    rationale: "golden yellows clash with a cool base",
                },
            ],
        },
        Season::Spring => SeasonGuide {
            season,
            headline: "Warm, clear, and luminous",
            description: "Spring coloring is warm-toned and light-filled, with \
                golden undertones and a fresh, bright quality. Clear warm \
                shades keep the face luminous; heavy dark neutrals and cool \
                pastels drain it.",
            recommended: vec![
                ColorSwatch {
                    name: "Coral",
                    hex: "#FF7F50",
                    rationale: "warm pink-orange echoes spring's natural flush",
                },
                ColorSwatch {
                    name: "Peach",
                    hex: "#FFCBA4",
                    rationale: "soft golden warmth sits close to the skin tone",
                },
                ColorSwatch {
                    name: "Golden yellow",
                    hex: "#FFD700",
                    rationale: "sunlit yellow plays up golden undertones",
                },
                ColorSwatch {
                    name: "Warm turquoise",
                    hex: "#40E0D0",
                    rationale: "a clear warm-leaning blue keeps the palette fresh",
                },
                ColorSwatch {
                    name: "Apple green",
                    hex: "#8DB600",
                    rationale: "yellow-based green reads lively, not muddy",
                },
            ],
            cautions: vec![
                ColorSwatch {
                    name: "True black",
                    hex: "#000000",
                    rationale: "hard black overwhelms spring's light warmth",
                },
                ColorSwatch {
                    name: "Burgundy",
                    hex: "#800020",
                    rationale: "heavy blue-reds shadow a bright complexion",
                },
            ],
        },
        Season::Summer => SeasonGuide {
            season,
            headline: "Cool, soft, and muted",
            description: "Summer coloring pairs cool undertones with low \
                contrast and an ashy, muted cast. Dusty, powdery shades \
                harmonize; hot saturated warmth and stark black overpower the \
                softness.",
            recommended: vec![
                ColorSwatch {
                    name: "Powder blue",
                    hex: "#B0E0E6",
                    rationale: "soft cool blue matches summer's gentle contrast",
                },
                ColorSwatch {
                    name: "Lavender",
                    hex: "#C8A2C8",
                    rationale: "muted violet flatters an ashy cast",
                },
                ColorSwatch {
                    name: "Dusty rose",
                    hex: "#DCAE96",
                    rationale: "greyed pink warms the face without heat",
                },
                ColorSwatch {
                    name: "Slate blue",
                    hex: "#6A5ACD",
                    rationale: "a deeper cool accent that stays muted",
                },
                ColorSwatch {
                    name: "Soft white",
                    hex: "#F2F3F4",
                    rationale: "off-white keeps contrast gentle",
                },
            ],
            cautions: vec![
                ColorSwatch {
                    name: "Bright orange",
                    hex: "#FF8C00",
                    rationale: "hot saturated warmth overwhelms summer softness",
                },
                ColorSwatch {
                    name: "True black",
                    hex: "#000000",
                    rationale: "stark black is harsher than summer's own contrast",
                },
            ],
        },
        Season::Autumn => SeasonGuide {
            season,
            headline: "Warm, rich, and earthy",
            description: "Autumn coloring runs golden and deep, with warmth \
                that suits spice, moss, and soil tones. Rich earthy shades add \
                glow; icy brights and blue-based pinks turn it sallow.",
            recommended: vec![
                ColorSwatch {
                    name: "Rust",
                    hex: "#B7410E",
                    rationale: "oxidized orange-red is the autumn signature",
                },
                ColorSwatch {
                    name: "Olive",
                    hex: "#708238",
                    rationale: "yellowed green harmonizes with golden undertones",
                },
                ColorSwatch {
                    name: "Mustard",
                    hex: "#E1AD01",
                    rationale: "spiced yellow deepens a warm complexion",
                },
                ColorSwatch {
                    name: "Camel",
                    hex: "#C19A6B",
                    rationale: "warm neutral that replaces black near the face",
                },
                ColorSwatch {
                    name: "Deep teal",
                    hex: "#014D4E",
                    rationale: "the one blue that keeps autumn's richness",
                },
            ],
            cautions: vec![
                ColorSwatch {
                    name: "Fuchsia",
                    hex: "#C154C1",
                    rationale: "blue-pinks fight a golden base",
                },
                ColorSwatch {
                    name: "Icy blue",
                    hex: "#D6ECEF",
                    rationale: "frosted pastels wash out earthy warmth",
                },
            ],
        },
        Season::Unknown => SeasonGuide {
            season,
            headline: "Palette not yet determined",
            description: "The questionnaire did not produce enough signal to \
                place a season. Retake the self-assessment in natural light, \
                or book a consultation for a guided analysis.",
            recommended: Vec::new(),
            cautions: Vec::new(),
        },
    }
}
