use serde::Serialize;
use std::fmt;

/// Semantic bucket a dictionary word is assigned to.
///
/// Variants are declared in matching priority order: when a definition
/// matches keywords of several categories, the earliest one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Emotion,
    Expression,
    Movement,
    Action,
    Place,
    Quality,
    Other,
}

const EMOTION_KEYWORDS: &[&str] = &[
    "happy", "sad", "angry", "fear", "joy", "sorrow", "glad", "grief",
    "despair", "hope", "love", "hate", "envy", "jealous", "pride", "shame",
    "content", "anxious", "excited", "terrified", "delighted", "miserable",
    "jubilant", "melancholy", "serene", "volatile", "placid", "blustery",
    "despairing", "hopeful", "cheerful", "gloomy", "elated", "downcast",
    "mood", "feeling", "sentiment", "affect", "emotion",
];

const EXPRESSION_KEYWORDS: &[&str] = &[
    "say", "speak", "talk", "tell", "voice", "articulate", "utter", "express",
    "communicate", "convey", "declare", "announce", "proclaim", "state",
    "leer", "glare", "smirk", "grimace", "scowl", "sneer", "bemoan",
    "gesture", "signal", "indicate", "show", "display", "reveal", "phrase",
    "remark", "comment", "mention", "note", "observe", "exclaim", "mutter",
];

const MOVEMENT_KEYWORDS: &[&str] = &[
    "walk", "run", "move", "go", "come", "travel", "journey", "traverse",
    "meander", "trudge", "scurry", "cavort", "amble", "saunter", "skulk",
    "pace", "stride", "sprint", "jog", "dash", "rush", "hurry", "hasten",
    "creep", "crawl", "drag", "pull", "push", "roll", "slide",
    "march", "parade", "strut", "shuffle", "stagger", "stumble", "totter",
];

const ACTION_KEYWORDS: &[&str] = &[
    "do", "make", "act", "perform", "execute", "accomplish", "achieve",
    "attack", "defend", "fight", "strike", "hit", "punch", "kick",
    "build", "create", "construct", "craft", "fashion", "form", "shape",
    "break", "destroy", "ruin", "damage", "harm", "injure", "hurt",
    "take", "grab", "seize", "capture", "catch", "hold", "grasp",
    "lurk", "hide", "conceal", "prowl", "stalk", "hunt",
    "eat", "drink", "consume", "feast", "dine", "sup", "munch",
];

const PLACE_KEYWORDS: &[&str] = &[
    "place", "location", "space", "area", "region", "zone", "territory",
    "house", "home", "building", "structure", "mansion", "cottage", "cabin",
    "mountain", "hill", "valley", "vale", "precipice", "cliff", "ridge",
    "forest", "wood", "jungle", "desert", "prairie", "plain", "field",
    "sea", "ocean", "lake", "river", "stream", "creek", "spring",
    "city", "town", "village", "hamlet", "settlement", "community",
    "church", "temple", "shrine", "cathedral", "chapel", "sanctuary",
];

const QUALITY_KEYWORDS: &[&str] = &[
    "good", "bad", "nice", "ugly", "beautiful", "pretty", "handsome",
    "smart", "intelligent", "stupid", "foolish", "wise", "clever",
    "strong", "weak", "powerful", "fragile", "robust", "delicate",
    "fast", "slow", "quick", "rapid", "swift", "sluggish", "speedy",
    "big", "small", "large", "tiny", "huge", "little", "massive",
    "hot", "cold", "warm", "cool", "freezing", "scorching", "tepid",
    "bright", "dark", "light", "dim", "shining", "dull", "luminous",
];

impl Category {
    /// Every category in declared order, fallback last.
    pub const ALL: [Category; 7] = [
        Category::Emotion,
        Category::Expression,
        Category::Movement,
        Category::Action,
        Category::Place,
        Category::Quality,
        Category::Other,
    ];

    /// Bucket for definitions that match no keyword.
    pub const FALLBACK: Category = Category::Other;

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Emotion => "emotion",
            Category::Expression => "expression",
            Category::Movement => "movement",
            Category::Action => "action",
            Category::Place => "place",
            Category::Quality => "quality",
            Category::Other => "other",
        }
    }

    /// Keywords searched for in definitions. Empty for the fallback.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Emotion => EMOTION_KEYWORDS,
            Category::Expression => EXPRESSION_KEYWORDS,
            Category::Movement => MOVEMENT_KEYWORDS,
            Category::Action => ACTION_KEYWORDS,
            Category::Place => PLACE_KEYWORDS,
            Category::Quality => QUALITY_KEYWORDS,
            Category::Other => &[],
        }
    }

    /// True if any keyword occurs anywhere in `definition_lower`.
    ///
    /// This is plain substring containment, so "cold" matches "scolded".
    /// The caller is expected to lowercase the definition once.
    pub fn matches(self, definition_lower: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| definition_lower.contains(keyword))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_order() {
        let names: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            vec!["emotion", "expression", "movement", "action", "place", "quality", "other"]
        );
        assert_eq!(Category::ALL.last(), Some(&Category::FALLBACK));
    }

    #[test]
    fn test_fallback_has_no_keywords() {
        assert!(Category::Other.keywords().is_empty());
        assert!(!Category::Other.matches("happy place to walk"));
        for category in &Category::ALL[..6] {
            assert!(!category.keywords().is_empty(), "{} has no keywords", category);
        }
    }

    #[test]
    fn test_keywords_are_lowercase_and_unique() {
        for category in Category::ALL {
            let keywords = category.keywords();
            for (i, keyword) in keywords.iter().enumerate() {
                assert_eq!(*keyword, keyword.to_lowercase());
                assert!(
                    !keywords[i + 1..].contains(keyword),
                    "duplicate keyword '{}' in {}",
                    keyword,
                    category
                );
            }
        }
    }

    #[test]
    fn test_matches_inside_longer_words() {
        assert!(Category::Quality.matches("one who scolded the child"));
        assert!(Category::Movement.matches("a catalogue of gods"));
        assert!(!Category::Emotion.matches("a magic word"));
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Movement).unwrap();
        assert_eq!(json, "\"movement\"");
    }
}
