//! Alternate district spellings.
//!
//! Maps folded spellings (already lowercase ASCII letters, see
//! [`crate::canonical`]) to the one key both data sources should join on.
//! Covers the 2018 official romanization changes (Chittagong → Chattogram,
//! Comilla → Cumilla, ...) and common transliteration variants seen in news
//! reports and boundary files.
//!
//! Every target must itself be canonical and must not appear as a key, so
//! that resolving twice gives the same answer as resolving once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Alternate spelling → canonical district key.
static DISTRICT_ALIASES: LazyLock<BTreeMap<&'static str, &'static str>> = LazyLock::new(|| {
    BTreeMap::from([
        // Official renames
        ("chittagong", "chattogram"),
        ("chattagram", "chattogram"),
        ("comilla", "cumilla"),
        ("kumilla", "cumilla"),
        ("barisal", "barishal"),
        ("jessore", "jashore"),
        ("jossore", "jashore"),
        ("bogra", "bogura"),
        // Transliteration variants
        ("chapainababganj", "chapainawabganj"),
        ("maulvibazar", "moulvibazar"),
        ("moulavibazar", "moulvibazar"),
        ("netrakona", "netrokona"),
        ("netrokana", "netrokona"),
        ("jhalakati", "jhalokati"),
        ("jhalokathi", "jhalokati"),
        ("jhalakathi", "jhalokati"),
        ("brahamanbaria", "brahmanbaria"),
        ("narshingdi", "narsingdi"),
        ("narsindi", "narsingdi"),
        ("kishorganj", "kishoreganj"),
        ("kishorgonj", "kishoreganj"),
        ("shirajganj", "sirajganj"),
        ("sirajgonj", "sirajganj"),
        ("khagrachari", "khagrachhari"),
        ("khagrachori", "khagrachhari"),
        ("panchagar", "panchagarh"),
        ("munshigonj", "munshiganj"),
        ("hobiganj", "habiganj"),
        ("hobigonj", "habiganj"),
        ("sunamgonj", "sunamganj"),
        ("jhenaida", "jhenaidah"),
        ("jhenidah", "jhenaidah"),
        ("narayangonj", "narayanganj"),
        ("gopalgonj", "gopalganj"),
        ("lakshmipur", "laxmipur"),
        ("lakhipur", "laxmipur"),
        ("noakhaly", "noakhali"),
        ("coxbazar", "coxsbazar"),
        ("patuakhaly", "patuakhali"),
        ("chuadange", "chuadanga"),
        ("manikgonj", "manikganj"),
        ("gaibanda", "gaibandha"),
    ])
});

/// Returns the canonical key for a folded spelling, if it is a known
/// alternate.
#[must_use]
pub fn resolve(folded: &str) -> Option<&'static str> {
    DISTRICT_ALIASES.get(folded).copied()
}

/// Iterates every `(alias, canonical)` pair.
pub fn all() -> impl Iterator<Item = (&'static str, &'static str)> {
    DISTRICT_ALIASES.iter().map(|(k, v)| (*k, *v))
}
