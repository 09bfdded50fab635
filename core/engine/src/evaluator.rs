use ideation_schemas::{Evaluation, Idea};
use tracing::debug;

use crate::heuristic;

/// Weights of the overall score. They sum to 1.0.
pub const FEASIBILITY_WEIGHT: f64 = 0.2;
pub const ORIGINALITY_WEIGHT: f64 = 0.2;
pub const IMPACT_WEIGHT: f64 = 0.2;
pub const MARKET_WEIGHT: f64 = 0.15;
pub const SIMPLICITY_WEIGHT: f64 = 0.1;
pub const SAFETY_WEIGHT: f64 = 0.15;

/// Score an idea as it stands right now. Pure: the idea is not modified.
pub fn evaluate(idea: &Idea) -> Evaluation {
    let market_potential = heuristic::market_potential(&idea.description, &idea.category);
    let technical_complexity = heuristic::technical_complexity(&idea.description);
    let resource_requirements =
        heuristic::resource_requirements(&idea.description, &idea.category);
    let timeline_estimate = heuristic::timeline_months(technical_complexity, resource_requirements);
    let risk_assessment = heuristic::risk(&idea.description, idea.originality);

    let overall_score = overall_score(
        idea.feasibility,
        idea.originality,
        idea.impact_potential,
        market_potential,
        technical_complexity,
        risk_assessment,
    );

    debug!(
        "Evaluated {}: overall {:.3} (market {:.2}, complexity {:.2}, risk {:.2})",
        idea.id, overall_score, market_potential, technical_complexity, risk_assessment
    );

    Evaluation {
        idea_id: idea.id.clone(),
        feasibility: idea.feasibility,
        originality: idea.originality,
        impact_potential: idea.impact_potential,
        market_potential,
        technical_complexity,
        resource_requirements,
        timeline_estimate,
        risk_assessment,
        overall_score,
    }
}

/// Weighted sum of the five scored dimensions plus the inverted complexity
pub fn overall_score(
    feasibility: f64,
    originality: f64,
    impact_potential: f64,
    market_potential: f64,
    technical_complexity: f64,
    risk_assessment: f64,
) -> f64 {
    feasibility * FEASIBILITY_WEIGHT
        + originality * ORIGINALITY_WEIGHT
        + impact_potential * IMPACT_WEIGHT
        + market_potential * MARKET_WEIGHT
        + (1.0 - technical_complexity) * SIMPLICITY_WEIGHT
        + (1.0 - risk_assessment) * SAFETY_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::IdeaRegistry;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = FEASIBILITY_WEIGHT
            + ORIGINALITY_WEIGHT
            + IMPACT_WEIGHT
            + MARKET_WEIGHT
            + SIMPLICITY_WEIGHT
            + SAFETY_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_technical_security_idea() {
        let mut registry = IdeaRegistry::new();
        let idea = registry.capture(
            "AI-powered solution to automate network security for improved reliability",
            "technical",
            0.7,
        );

        let evaluation = evaluate(&idea);
        assert_eq!(evaluation.idea_id, idea.id);
        assert!((evaluation.market_potential - 0.3).abs() < 1e-9);
        assert!((evaluation.technical_complexity - 0.5).abs() < 1e-9);
        // "network" is an infrastructure term, plus the technical bonus
        assert!((evaluation.resource_requirements - 0.8).abs() < 1e-9);
        assert_eq!(evaluation.timeline_estimate, 14);
        // "security" is a risk term
        assert!((evaluation.risk_assessment - 0.6).abs() < 1e-9);
        // 0.14 + 0.05 + 0.03 + 0.045 + 0.05 + 0.06
        assert!((evaluation.overall_score - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_is_idempotent_and_pure() {
        let mut registry = IdeaRegistry::new();
        let idea = registry.capture("A simple platform for global users", "social", 0.55);
        let before = idea.clone();

        let first = evaluate(&idea);
        let second = evaluate(&idea);
        assert_eq!(first, second);
        assert_eq!(idea.description, before.description);
        assert_eq!(idea.originality, before.originality);
    }

    #[test]
    fn test_overall_matches_weighted_sum() {
        let mut registry = IdeaRegistry::new();
        let idea = registry.capture(
            "novel real-time compliance ecosystem to transform healthcare for patients",
            "innovative",
            0.35,
        );
        let e = evaluate(&idea);

        let expected = e.feasibility * 0.2
            + e.originality * 0.2
            + e.impact_potential * 0.2
            + e.market_potential * 0.15
            + (1.0 - e.technical_complexity) * 0.1
            + (1.0 - e.risk_assessment) * 0.15;
        assert!((e.overall_score - expected).abs() < 1e-12);
    }
}
