use ideation_schemas::{IdeaId, Milestone, Phase, Roadmap};
use tracing::info;

use crate::error::Result;
use crate::evaluator::evaluate;
use crate::registry::{preview, IdeaRegistry};

/// (phase name, share of the timeline, activities)
const PHASES: [(&str, f64, [&str; 4]); 4] = [
    (
        "Research & Validation",
        0.2,
        [
            "Validate core assumptions",
            "Research existing solutions",
            "Identify target audience",
            "Assess technical requirements",
        ],
    ),
    (
        "Prototype Development",
        0.3,
        [
            "Build minimum viable product",
            "Test core functionality",
            "Gather initial feedback",
            "Iterate based on feedback",
        ],
    ),
    (
        "Refinement & Scaling",
        0.4,
        [
            "Improve user experience",
            "Scale infrastructure",
            "Develop business model",
            "Prepare for launch",
        ],
    ),
    (
        "Launch & Growth",
        0.1,
        [
            "Official launch",
            "Marketing campaign",
            "Monitor performance",
            "Plan next iterations",
        ],
    ),
];

// Labels are fixed and do not follow the computed timeline.
const MILESTONES: [(&str, &str); 4] = [
    ("Concept Validated", "Month 1-2"),
    ("Prototype Ready", "Month 3-5"),
    ("Beta Testing", "Month 6-8"),
    ("Public Launch", "Month 9-12"),
];

pub const HIGH_RISK_CHALLENGE: &str =
    "High risk factor identified - consider mitigation strategies";
pub const HIGH_COMPLEXITY_CHALLENGE: &str =
    "High technical complexity - may require specialized expertise";
pub const HIGH_RESOURCES_CHALLENGE: &str = "Significant resources required - plan accordingly";

/// Phase lengths in months, each at least one. They need not sum to `timeline`.
pub fn phase_durations(timeline: u32) -> [u32; 4] {
    PHASES.map(|(_, share, _)| ((timeline as f64 * share).floor() as u32).max(1))
}

/// Build a four-phase plan for one registered idea
pub fn generate_roadmap(registry: &IdeaRegistry, id: &IdeaId) -> Result<Roadmap> {
    let idea = registry.require(id)?;
    let evaluation = evaluate(idea);

    let durations = phase_durations(evaluation.timeline_estimate);
    let recommended_path = PHASES
        .iter()
        .zip(durations)
        .map(|((name, _, activities), duration)| Phase {
            phase: name.to_string(),
            duration,
            activities: activities.iter().map(|a| a.to_string()).collect(),
        })
        .collect();

    let milestones = MILESTONES
        .iter()
        .map(|(name, timeline)| Milestone {
            name: name.to_string(),
            timeline: timeline.to_string(),
        })
        .collect();

    let mut challenges = Vec::new();
    if evaluation.risk_assessment > 0.5 {
        challenges.push(HIGH_RISK_CHALLENGE.to_string());
    }
    if evaluation.technical_complexity > 0.7 {
        challenges.push(HIGH_COMPLEXITY_CHALLENGE.to_string());
    }
    if evaluation.resource_requirements > 0.7 {
        challenges.push(HIGH_RESOURCES_CHALLENGE.to_string());
    }

    info!(
        "Generated roadmap for {} ({} months, {} challenges)",
        preview(&idea.description, 60),
        evaluation.timeline_estimate,
        challenges.len()
    );

    Ok(Roadmap {
        idea: idea.description.clone(),
        overall_score: evaluation.overall_score,
        recommended_path,
        milestones,
        challenges,
    })
}
