//! Topic relevance gate for enrichment lookups.
//!
//! Image and paper lookups only make sense for queries in the wildlife and
//! conservation domain; everything else gets an answer without attachments.

/// Domain keywords. A keyword ending in `s` also matches its singular form.
const WILDLIFE_KEYWORDS: &[&str] = &[
    "wildlife",
    "biodiversity",
    "conservation",
    "bird",
    "climate",
    "change",
    "endangered",
    "animals",
    "trees",
    "rain",
    "flora",
    "fauna",
    "ecosystem",
    "habitat",
    "nature",
    "forest",
    "jungle",
    "savanna",
    "marine",
    "ocean",
    "reptile",
    "mammal",
    "amphibian",
    "earth",
    "india",
    "globe",
    "species",
    "extinct",
    "environment",
    "protection",
    "sustainability",
    "ecology",
    "pollution",
    "deforestation",
    "global",
    "warming",
    "temperature",
    "development",
    "laws",
    "research",
    "studies",
    "analysis",
    "trends",
    "challenges",
    "prospects",
    "solutions",
    "ngo",
    "government",
    "policy",
    "institutions",
    "carbon",
    "footprint",
    "impact",
    "human",
    "population",
    "hunting",
    "poaching",
    "fishing",
    "agriculture",
    "urbanization",
    "waste",
    "plastic",
    "recycling",
    "renewable",
    "energy",
    "services",
    "air",
    "soil",
    "preservation",
    "restoration",
    "migration",
];

/// Whether any domain keyword (or its singular form) appears in the query.
pub fn is_query_relevant(query: &str) -> bool {
    let lowered = query.to_lowercase();
    WILDLIFE_KEYWORDS.iter().any(|keyword| {
        if lowered.contains(keyword) {
            return true;
        }
        keyword
            .strip_suffix('s')
            .is_some_and(|singular| lowered.contains(singular))
    })
}
