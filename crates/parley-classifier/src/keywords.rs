//! Static keyword tables
//!
//! Hand-authored word lists, not learned data. Table order matters: it is
//! the tie-break order when two entries score the same.

/// Words that short-circuit to a technology-like category
pub const TECH_INDICATORS: &[&str] = &[
    "smartphone", "phone", "mobile", "camera", "app", "device", "gadget", "tech",
];

/// Words related to common category names
pub const RELATED_WORDS: &[(&str, &[&str])] = &[
    (
        "food",
        &[
            "eat", "drink", "meal", "restaurant", "cook", "taste", "delicious", "breakfast",
            "lunch", "dinner", "snack", "recipe", "cuisine", "cheese", "meat", "vegetable",
            "fruit", "dessert", "sweet", "savory",
        ],
    ),
    (
        "learning",
        &[
            "study", "education", "school", "college", "university", "course", "learn",
            "knowledge", "teacher", "student", "class", "lecture", "book", "read", "understand",
            "comprehend", "skill", "subject",
        ],
    ),
    (
        "technology",
        &[
            "computer", "software", "hardware", "internet", "digital", "device", "app",
            "application", "program", "code", "data", "system", "network", "online",
            "electronic", "tech", "smartphone", "phone", "mobile", "camera", "gadget", "screen",
            "battery", "smart", "technology", "wifi", "bluetooth", "wireless", "processor",
            "memory", "storage", "photo", "video", "resolution", "display", "pixel", "bought",
        ],
    ),
    (
        "sports",
        &[
            "game", "play", "team", "player", "ball", "score", "win", "lose", "competition",
            "match", "tournament", "athlete", "coach", "field", "court", "stadium", "exercise",
            "fitness",
        ],
    ),
    (
        "entertainment",
        &[
            "movie", "film", "show", "tv", "television", "music", "song", "concert",
            "performance", "actor", "actress", "celebrity", "star", "watch", "listen", "enjoy",
            "fun", "amusement",
        ],
    ),
    (
        "health",
        &[
            "doctor", "hospital", "medicine", "medical", "disease", "symptom", "treatment",
            "therapy", "healthy", "wellness", "fitness", "exercise", "diet", "nutrition", "body",
            "mental", "physical",
        ],
    ),
    (
        "business",
        &[
            "company", "corporation", "firm", "enterprise", "organization", "industry", "market",
            "product", "service", "customer", "client", "profit", "revenue", "sales",
            "management", "executive", "finance",
        ],
    ),
    (
        "travel",
        &[
            "trip", "journey", "vacation", "holiday", "tour", "tourism", "destination", "hotel",
            "flight", "airplane", "airport", "country", "city", "place", "visit", "explore",
            "adventure", "sightseeing",
        ],
    ),
];

/// Broad topics used when no category word appears in the text
pub const GENERAL_TOPICS: &[(&str, &[&str])] = &[
    (
        "food",
        &[
            "food", "eat", "drink", "meal", "cook", "taste", "recipe", "cuisine", "restaurant",
            "chef", "ingredient", "flavor", "dish", "delicious",
        ],
    ),
    (
        "education",
        &[
            "learn", "study", "education", "school", "college", "university", "knowledge",
            "academic", "teacher", "student", "class", "course",
        ],
    ),
    (
        "technology",
        &[
            "tech", "computer", "digital", "software", "hardware", "internet", "online",
            "device", "app", "program", "code", "data", "system", "smartphone", "phone",
            "mobile", "camera", "gadget", "electronic", "smart", "technology", "wifi",
            "bluetooth", "wireless", "processor", "memory", "storage", "photo", "video",
            "screen", "display", "bought", "new",
        ],
    ),
    (
        "sports",
        &[
            "sport", "game", "play", "team", "player", "competition", "match", "win", "lose",
            "score", "athlete", "fitness", "exercise",
        ],
    ),
    (
        "entertainment",
        &[
            "entertain", "movie", "film", "show", "music", "song", "concert", "performance",
            "actor", "celebrity", "star", "watch", "listen",
        ],
    ),
    (
        "health",
        &[
            "health", "medical", "doctor", "hospital", "medicine", "disease", "treatment",
            "therapy", "wellness", "body", "mental", "physical",
        ],
    ),
    (
        "business",
        &[
            "business", "company", "market", "product", "service", "customer", "profit",
            "revenue", "sales", "management", "finance", "economy",
        ],
    ),
    (
        "travel",
        &[
            "travel", "trip", "journey", "vacation", "tour", "destination", "hotel", "flight",
            "country", "city", "visit", "explore", "adventure",
        ],
    ),
];

/// Related words for a category name
///
/// A table key matches when it equals the lowercased name or either one
/// contains the other; the first matching key wins.
pub fn related_words(category: &str) -> &'static [&'static str] {
    let category = category.to_lowercase();
    RELATED_WORDS
        .iter()
        .find(|(key, _)| category == *key || key.contains(category.as_str()) || category.contains(key))
        .map(|(_, words)| *words)
        .unwrap_or(&[])
}
