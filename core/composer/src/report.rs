use anyhow::{Context, Result};
use chrono::Utc;
use ideation_schemas::{
    generate_visualization_id, Evaluation, Idea, IdeaReport, Visualization, VisualizationResult,
};
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const COMMON_ENHANCEMENTS: [&str; 7] = [
    "professional design",
    "high quality",
    "visually appealing",
    "conceptually rich",
    "symbolic representation",
    "meaningful imagery",
    "representative visualization",
];

/// Prompt characters kept in a simulated sample file name
const SAMPLE_PROMPT_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualStyle {
    Modern,
    Futuristic,
    Abstract,
    Realistic,
    Minimalist,
}

impl VisualStyle {
    pub fn for_category(category: &str) -> Self {
        match category {
            "technical" | "innovative" => VisualStyle::Futuristic,
            "social" => VisualStyle::Modern,
            "creative" => VisualStyle::Abstract,
            "practical" => VisualStyle::Realistic,
            _ => VisualStyle::Modern,
        }
    }

    pub fn modifiers(&self) -> &'static str {
        match self {
            VisualStyle::Modern => "modern, clean, minimalist, contemporary design",
            VisualStyle::Futuristic => "futuristic, tech-inspired, sleek, innovative, cutting-edge",
            VisualStyle::Abstract => "abstract, conceptual, symbolic, artistic interpretation",
            VisualStyle::Realistic => "realistic, detailed, photographic, lifelike representation",
            VisualStyle::Minimalist => {
                "simple, clean lines, uncluttered, elegant, essential elements only"
            }
        }
    }
}

/// Turns an idea and its evaluation into a shareable report.
///
/// Image generation is never called for real: with an API key configured the
/// builder attaches a simulated visualization, without one it leaves the
/// field empty.
pub struct ReportBuilder {
    api_key: Option<String>,
}

impl ReportBuilder {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Reads `BFL_API_KEY`
    pub fn from_env() -> Self {
        let api_key = std::env::var("BFL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::new(api_key)
    }

    pub fn build(&self, idea: &Idea, evaluation: &Evaluation) -> IdeaReport {
        let visualization =
            self.visualize(&idea.description, VisualStyle::for_category(&idea.category));

        IdeaReport {
            idea: idea.clone(),
            evaluation: evaluation.clone(),
            visualization,
            recommendations: recommendations(evaluation),
            implementation_notes: implementation_notes(idea, evaluation),
        }
    }

    pub fn visualize(&self, description: &str, style: VisualStyle) -> Option<Visualization> {
        if self.api_key.is_none() {
            warn!("BFL_API_KEY not set, skipping visualization");
            return None;
        }

        let prompt = visual_prompt(description, style);
        info!("Simulating visualization for prompt: {}", prompt);

        let head: String = prompt.chars().take(SAMPLE_PROMPT_CHARS).collect();
        let sample = format!("mock_visualization_for_{}.jpg", urlencoding::encode(&head));

        Some(Visualization {
            id: generate_visualization_id(),
            status: "Ready".to_string(),
            result: VisualizationResult {
                prompt,
                seed: rand::thread_rng().gen_range(0..1_000_000),
                sample,
            },
            simulated: true,
        })
    }

    /// Write the report as pretty JSON under `dir` and return the file path.
    /// Without a filename the report is named `idea_report_<id>_<millis>.json`.
    pub fn save(&self, report: &IdeaReport, dir: &Path, filename: Option<&str>) -> Result<PathBuf> {
        let filename = match filename {
            Some(name) => name.to_string(),
            None => format!(
                "idea_report_{}_{}.json",
                report.idea.id,
                Utc::now().timestamp_millis()
            ),
        };

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory {}", dir.display()))?;

        let path = dir.join(filename);
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write report {}", path.display()))?;

        info!("Report saved to: {}", path.display());
        Ok(path)
    }
}

pub fn visual_prompt(description: &str, style: VisualStyle) -> String {
    format!(
        "{}, {}, {}",
        description,
        style.modifiers(),
        COMMON_ENHANCEMENTS.join(", ")
    )
}

pub fn recommendations(evaluation: &Evaluation) -> Vec<String> {
    let mut recommendations = Vec::new();

    let headline = if evaluation.overall_score > 0.8 {
        "High-potential idea - consider rapid prototyping"
    } else if evaluation.overall_score > 0.6 {
        "Moderate-potential idea - validate with target audience"
    } else {
        "Lower-potential idea - consider pivoting or enhancing"
    };
    recommendations.push(headline.to_string());

    if evaluation.originality > 0.8 {
        recommendations.push(
            "Highly original - protect intellectual property considerations".to_string(),
        );
    }
    if evaluation.impact_potential > 0.8 {
        recommendations.push("High impact potential - prioritize development".to_string());
    }
    if evaluation.feasibility < 0.4 {
        recommendations.push(
            "Low feasibility - consider simplification or alternative approaches".to_string(),
        );
    }
    if evaluation.market_potential > 0.7 {
        recommendations.push("Strong market potential - investigate business model".to_string());
    }
    if evaluation.risk_assessment > 0.7 {
        recommendations.push("High risk - develop mitigation strategies".to_string());
    }

    recommendations
}

pub fn implementation_notes(idea: &Idea, evaluation: &Evaluation) -> Vec<String> {
    let mut notes = vec![format!(
        "Estimated timeline: {} months",
        evaluation.timeline_estimate
    )];

    if evaluation.technical_complexity > 0.7 {
        notes.push("High technical complexity - consider assembling skilled team".to_string());
    }
    if evaluation.resource_requirements > 0.7 {
        notes.push("Significant resources needed - plan funding strategy".to_string());
    }
    if !idea.connections.is_empty() {
        notes.push(format!(
            "Leverage connections with {} related ideas",
            idea.connections.len()
        ));
    }

    notes
}
