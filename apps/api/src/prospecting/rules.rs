//! Static keyword rule tables for prospect filtering.
//!
//! Pure data — membership tests only. The filter decides; these tables
//! only say what is excluded outright and what signals each segment.

/// Taxonomy categories that are never worth a cheese pitch.
pub const EXCLUDED_CATEGORIES: &[&str] = &[
    "catering.restaurant.asian",
    "catering.restaurant.chinese",
    "catering.restaurant.japanese",
    "catering.restaurant.thai",
    "catering.restaurant.korean",
    "catering.restaurant.vietnamese",
    "catering.restaurant.indian",
    "catering.restaurant.pizza",
    "catering.fast_food",
    "catering.cafe",
    "catering.ice_cream",
];

/// Name substrings that disqualify a candidate regardless of segment.
/// Cuisine words, casual-dining words, and chain brand names.
pub const EXCLUDED_NAME_KEYWORDS: &[&str] = &[
    // Coffee / cafe
    "coffee",
    "cafe",
    "espresso",
    "latte",
    // Pizza
    "pizza",
    "pizzeria",
    "pie",
    // Fast food — burgers / tacos
    "taco",
    "tacos",
    "burger",
    "burgers",
    // Asian, name-based
    "ramen",
    "thai",
    "sushi",
    "noodle",
    "noodles",
    "pho",
    "teriyaki",
    "wok",
    "asian",
    "china",
    "chinese",
    "japan",
    "japanese",
    "korea",
    "korean",
    "vietnam",
    "vietnamese",
    "india",
    "indian",
    "curry",
    "tikka",
    "tandoor",
    "biryani",
    "dim sum",
    "dumpling",
    "bao",
    "szechuan",
    "hunan",
    "cantonese",
    "hibachi",
    "yakitori",
    "izakaya",
    "udon",
    "soba",
    "tempura",
    "pad thai",
    "kimchi",
    "bulgogi",
    "bibimbap",
    "tofu",
    "miso",
    "siam",
    "shinsen",
    "todoroki",
    "kansaku",
    "soban",
    "paragon",
    "samosa",
    "panang",
    "massaman",
    "laksa",
    // Middle Eastern fast casual
    "kabob",
    "kebab",
    "shawarma",
    "falafel",
    "gyro",
    // Mexican fast casual
    "burrito",
    "taqueria",
    "mexican",
    "tipico",
    "taquito",
    // Casual / fast food
    "bagel",
    "bagels",
    "deli",
    "buffalo",
    "wings",
    "sandwich",
    "sandwiches",
    "hoagie",
    "sub",
    "donut",
    "donuts",
    "diner",
    "grill",
    "inn",
    "tavern",
    "tap",
    "pita",
    "kitchen",
    "eats",
    "eatery",
    // Chains
    "chili's",
    "chipotle",
    "starbucks",
    "dunkin",
    "mcdonald",
    "mcdonald's",
    "subway",
    "panera",
    "taco bell",
    "panda express",
    "olive garden",
    "applebee",
    "buffalo wild wings",
    "red lobster",
    "wendy's",
    "arbys",
    "arby's",
    "kfc",
    "popeyes",
    "five guys",
    "shake shack",
    "jimmy john",
    "potbelly",
    "qdoba",
    "moe's",
    "del taco",
    "ihop",
    "dennys",
    "denny's",
    "waffle house",
    "cracker barrel",
    "golden corral",
    "cici",
    "pizza hut",
    "domino",
    "papa john",
    "little caesar",
];

/// Categories that mark an explicit fine-dining candidate.
pub const FINE_DINING_CATEGORIES: &[&str] = &[
    "catering.restaurant.fine_dining",
    "catering.restaurant.french",
    "catering.restaurant.italian",
    "catering.restaurant.european",
    "catering.restaurant.steak_house",
    "catering.restaurant.seafood",
    "catering.restaurant.mediterranean",
];

/// Italian cuisine name signals.
pub const ITALIAN_SIGNALS: &[&str] = &[
    "trattoria",
    "osteria",
    "ristorante",
    "italian",
    "tuscany",
    "venice",
    "sicily",
    "roma",
    "florence",
];

/// Strong French name signals. "cafe" on its own is intentionally absent —
/// it only counts when paired with a French article, see the filter.
pub const FRENCH_SIGNALS_STRONG: &[&str] = &[
    "le ",
    "la ",
    "bistro",
    "brasserie",
    "chez",
    "maison",
    "french",
    "paris",
    "provence",
];

/// French articles that let "cafe" count as a fine-dining signal.
pub const FRENCH_ARTICLES: &[&str] = &["le ", "la ", "du ", "des ", "au "];

/// Coffee-shop words that veto the "cafe" signal.
pub const CAFE_VETO_WORDS: &[&str] = &["coffee", "espresso", "bagel", "corner"];

/// Steakhouse name signals.
pub const STEAKHOUSE_SIGNALS: &[&str] = &[
    "steakhouse",
    "steak house",
    "chophouse",
    "chop house",
    "prime",
    "butcher",
];

/// Minimum price tier that qualifies as fine dining on its own.
pub const FINE_DINING_MIN_PRICE: u8 = 3;

/// Categories that mark a gastropub candidate.
pub const GASTROPUB_CATEGORIES: &[&str] = &[
    "catering.pub",
    "catering.bar",
    "catering.restaurant.american",
];

/// Gastropub name signals.
pub const GASTROPUB_SIGNALS: &[&str] = &[
    "pub",
    "tavern",
    "tap",
    "brewing",
    "brewery",
    "grill",
    "ale house",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excluded_categories_cover_asian_subtypes() {
        assert!(EXCLUDED_CATEGORIES.contains(&"catering.restaurant.thai"));
        assert!(EXCLUDED_CATEGORIES.contains(&"catering.fast_food"));
        assert!(EXCLUDED_CATEGORIES.contains(&"catering.restaurant.pizza"));
    }

    #[test]
    fn test_excluded_keywords_cover_chains_and_cuisine_words() {
        assert!(EXCLUDED_NAME_KEYWORDS.contains(&"pizza"));
        assert!(EXCLUDED_NAME_KEYWORDS.contains(&"panda express"));
        assert!(EXCLUDED_NAME_KEYWORDS.contains(&"ramen"));
    }

    #[test]
    fn test_cafe_is_not_a_strong_french_signal() {
        assert!(!FRENCH_SIGNALS_STRONG.contains(&"cafe"));
        assert!(FRENCH_ARTICLES.contains(&"le "));
    }
}
