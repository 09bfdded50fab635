use ideation_schemas::{Idea, Synergy};
use tracing::{debug, info};

use crate::heuristic::{mentions_any, SYNERGY_KEYWORDS};

/// Pairs must score strictly above this to be reported
pub const SYNERGY_THRESHOLD: f64 = 0.6;

/// How well two ideas would combine, in [0, 1]
pub fn calculate_synergy(first: &Idea, second: &Idea) -> f64 {
    let mut score: f64 = 0.0;

    if first.category == second.category {
        score += 0.3;
    }

    // Complementary impact potential
    if (first.impact_potential - second.impact_potential).abs() < 0.3 {
        score += 0.2;
    }

    // Similar feasibility: can be developed together
    if (first.feasibility - second.feasibility).abs() < 0.2 {
        score += 0.2;
    }

    let first_desc = first.description.to_lowercase();
    let second_desc = second.description.to_lowercase();
    if mentions_any(&first_desc, &SYNERGY_KEYWORDS)
        && mentions_any(&second_desc, &SYNERGY_KEYWORDS)
    {
        score += 0.3;
    }

    score.min(1.0)
}

pub fn suggest_combination(first: &Idea, second: &Idea) -> String {
    format!(
        "Combine \"{}\" with \"{}\" to create a unified solution that leverages both approaches.",
        first.description, second.description
    )
}

/// Compare every unordered pair once and keep the strong ones
pub fn find_synergies<'a, I>(ideas: I) -> Vec<Synergy>
where
    I: IntoIterator<Item = &'a Idea>,
{
    let ideas: Vec<&Idea> = ideas.into_iter().collect();
    let mut synergies = Vec::new();

    for (i, first) in ideas.iter().enumerate() {
        for second in &ideas[i + 1..] {
            let synergy_score = calculate_synergy(first, second);
            debug!(
                "Synergy {} <-> {}: {:.2}",
                first.id, second.id, synergy_score
            );

            if synergy_score > SYNERGY_THRESHOLD {
                synergies.push(Synergy {
                    idea1_id: first.id.clone(),
                    idea2_id: second.id.clone(),
                    idea1: first.description.clone(),
                    idea2: second.description.clone(),
                    synergy_score,
                    suggested_combination: suggest_combination(first, second),
                });
            }
        }
    }

    info!(
        "Found {} synergies across {} ideas",
        synergies.len(),
        ideas.len()
    );
    synergies
}
