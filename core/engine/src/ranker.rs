use ideation_schemas::{Evaluation, Idea};
use std::cmp::Ordering;
use tracing::debug;

use crate::evaluator::evaluate;

/// Field an idea list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankCriterion {
    #[default]
    Overall,
    Originality,
    Impact,
    Feasibility,
    Market,
    /// Ascending risk: safest first
    LowRisk,
}

impl RankCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            RankCriterion::Overall => "overall",
            RankCriterion::Originality => "originality",
            RankCriterion::Impact => "impact",
            RankCriterion::Feasibility => "feasibility",
            RankCriterion::Market => "market",
            RankCriterion::LowRisk => "low_risk",
        }
    }

    /// Unknown names rank by overall score.
    pub fn from_name(name: &str) -> Self {
        match name {
            "originality" => RankCriterion::Originality,
            "impact" => RankCriterion::Impact,
            "feasibility" => RankCriterion::Feasibility,
            "market" => RankCriterion::Market,
            "low_risk" => RankCriterion::LowRisk,
            _ => RankCriterion::Overall,
        }
    }

    fn compare(&self, a: &Evaluation, b: &Evaluation) -> Ordering {
        let descending = |x: f64, y: f64| y.partial_cmp(&x).unwrap_or(Ordering::Equal);
        match self {
            RankCriterion::Overall => descending(a.overall_score, b.overall_score),
            RankCriterion::Originality => descending(a.originality, b.originality),
            RankCriterion::Impact => descending(a.impact_potential, b.impact_potential),
            RankCriterion::Feasibility => descending(a.feasibility, b.feasibility),
            RankCriterion::Market => descending(a.market_potential, b.market_potential),
            RankCriterion::LowRisk => a
                .risk_assessment
                .partial_cmp(&b.risk_assessment)
                .unwrap_or(Ordering::Equal),
        }
    }
}

/// Evaluate each idea once and order the evaluations. Ties keep input order.
pub fn rank<'a, I>(ideas: I, criterion: RankCriterion) -> Vec<Evaluation>
where
    I: IntoIterator<Item = &'a Idea>,
{
    let mut evaluations: Vec<Evaluation> = ideas.into_iter().map(evaluate).collect();
    evaluations.sort_by(|a, b| criterion.compare(a, b));

    debug!(
        "Ranked {} ideas by {}",
        evaluations.len(),
        criterion.as_str()
    );
    evaluations
}
