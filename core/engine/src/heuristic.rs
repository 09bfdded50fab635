//! Keyword heuristics behind every idea score.
//!
//! Each score starts from a fixed base and moves by a fixed step when the
//! description mentions a term from one of the word lists below. Nothing here
//! is learned; the lists are domain constants.

use tracing::trace;

const IMPACT_KEYWORDS: [&str; 10] = [
    "transform",
    "revolutionize",
    "solve",
    "improve",
    "enhance",
    "scale",
    "democratize",
    "accelerate",
    "optimize",
    "empower",
];

const HIGH_MARKET_TERMS: [&str; 11] = [
    "everyone",
    "all",
    "universal",
    "global",
    "world",
    "people",
    "users",
    "customers",
    "society",
    "community",
    "market",
];

const MEDIUM_MARKET_TERMS: [&str; 8] = [
    "students",
    "professionals",
    "businesses",
    "organizations",
    "consumers",
    "patients",
    "teachers",
    "developers",
];

const SIMPLICITY_TERMS: [&str; 10] = [
    "simple",
    "easy",
    "straightforward",
    "basic",
    "fundamental",
    "standard",
    "common",
    "established",
    "existing",
    "proven",
];

const COMPLEXITY_BOOSTERS: [&str; 9] = [
    "integration",
    "real-time",
    "advanced",
    "complex",
    "cutting-edge",
    "revolutionary",
    "ground-breaking",
    "sophisticated",
    "multi-layered",
];

const RESOURCE_TERMS: [&str; 9] = [
    "enterprise",
    "platform",
    "system",
    "infrastructure",
    "ecosystem",
    "network",
    "marketplace",
    "community",
    "framework",
];

const RISK_TERMS: [&str; 9] = [
    "regulation",
    "privacy",
    "security",
    "legal",
    "compliance",
    "competition",
    "adoption",
    "resistance",
    "dependency",
];

pub const SYNERGY_KEYWORDS: [&str; 6] = [
    "connect",
    "integrate",
    "combine",
    "platform",
    "network",
    "system",
];

/// True when `text` contains any of `terms` as a substring.
/// Callers lowercase `text` first when the check is case-insensitive.
pub fn mentions_any(text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| text.contains(term))
}

/// Average of four novelty factors. Case-sensitive: "New" does not count.
pub fn originality(description: &str) -> f64 {
    let factor = |a: &str, b: &str, hit: f64, miss: f64| {
        if description.contains(a) || description.contains(b) {
            hit
        } else {
            miss
        }
    };

    let novel = factor("novel", "new", 0.9, 0.3);
    let unique = factor("unique", "original", 0.8, 0.2);
    let unconventional = factor("unusual", "different", 0.7, 0.1);
    let creative = factor("creative", "innovative", 0.6, 0.4);

    let average = (novel + unique + unconventional + creative) / 4.0;
    average.min(1.0)
}

/// Impact keyword density, boosted by 1.5 so a handful of matches saturates.
pub fn impact(description: &str) -> f64 {
    let lower = description.to_lowercase();
    let matched = IMPACT_KEYWORDS
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .count();

    trace!("impact keywords matched: {}", matched);
    (matched as f64 / IMPACT_KEYWORDS.len() as f64 * 1.5).min(1.0)
}

pub fn market_potential(description: &str, category: &str) -> f64 {
    let lower = description.to_lowercase();
    let mut score: f64 = 0.3;

    // High-market terms take precedence over medium ones
    if mentions_any(&lower, &HIGH_MARKET_TERMS) {
        score = (score + 0.4).min(1.0);
    } else if mentions_any(&lower, &MEDIUM_MARKET_TERMS) {
        score = (score + 0.2).min(1.0);
    }

    if category == "social" {
        score = (score + 0.1).min(1.0);
    }

    score
}

/// Lower is simpler. Bounded to [0.1, 0.9].
pub fn technical_complexity(description: &str) -> f64 {
    let lower = description.to_lowercase();
    let score: f64 = 0.5;

    if mentions_any(&lower, &SIMPLICITY_TERMS) {
        (score - 0.2).max(0.1)
    } else if mentions_any(&lower, &COMPLEXITY_BOOSTERS) {
        (score + 0.3).min(0.9)
    } else {
        score
    }
}

pub fn resource_requirements(description: &str, category: &str) -> f64 {
    let lower = description.to_lowercase();
    let mut score: f64 = 0.4;

    if mentions_any(&lower, &RESOURCE_TERMS) {
        score = (score + 0.3).min(1.0);
    }

    if category == "technical" {
        score = (score + 0.1).min(1.0);
    }

    score
}

/// Months: three minimum, up to twelve more for complexity, six for resources.
pub fn timeline_months(complexity: f64, resources: f64) -> u32 {
    (3.0 + complexity * 12.0 + resources * 6.0).round() as u32
}

/// Highly original ideas carry extra risk (unknown territory).
pub fn risk(description: &str, originality: f64) -> f64 {
    let lower = description.to_lowercase();
    let mut score: f64 = 0.3;

    if mentions_any(&lower, &RISK_TERMS) {
        score = (score + 0.3).min(1.0);
    }

    if originality > 0.8 {
        score = (score + 0.2).min(1.0);
    }

    score
}
