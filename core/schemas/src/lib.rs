use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// ULID and ID Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IdeaId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualizationId(pub String);

impl fmt::Display for IdeaId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for VisualizationId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for IdeaId {
    fn from(value: &str) -> Self {
        IdeaId(value.to_string())
    }
}

// ============================================================================
// Idea Schema
// ============================================================================

/// Canonical idea categories. Capture accepts any category string; these are
/// the ones the generators produce.
pub const IDEA_CATEGORIES: [&str; 5] = [
    "innovative",
    "practical",
    "creative",
    "technical",
    "social",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    pub id: IdeaId,
    pub timestamp: String, // RFC3339
    pub description: String,
    pub category: String,
    pub feasibility: f64,
    pub originality: f64,
    pub impact_potential: f64,
    pub state: IdeaState,
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: IdeaId,
    pub r#type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IdeaState {
    #[serde(rename = "conceived")]
    Conceived,
    #[serde(rename = "developing")]
    Developing,
    #[serde(rename = "feasible")]
    Feasible,
    #[serde(rename = "implemented")]
    Implemented,
    #[serde(rename = "abandoned")]
    Abandoned,
}

impl IdeaState {
    pub const ALL: [IdeaState; 5] = [
        IdeaState::Conceived,
        IdeaState::Developing,
        IdeaState::Feasible,
        IdeaState::Implemented,
        IdeaState::Abandoned,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IdeaState::Conceived => "conceived",
            IdeaState::Developing => "developing",
            IdeaState::Feasible => "feasible",
            IdeaState::Implemented => "implemented",
            IdeaState::Abandoned => "abandoned",
        }
    }

    /// Exact, case-sensitive lookup by wire name.
    pub fn parse(name: &str) -> Option<IdeaState> {
        Self::ALL.into_iter().find(|state| state.as_str() == name)
    }
}

impl fmt::Display for IdeaState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Derived Views
// ============================================================================

/// Point-in-time scores for one idea. Never stored; recomputed on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub idea_id: IdeaId,
    pub feasibility: f64,
    pub originality: f64,
    pub impact_potential: f64,
    pub market_potential: f64,
    pub technical_complexity: f64,
    pub resource_requirements: f64,
    pub timeline_estimate: u32, // months
    pub risk_assessment: f64,
    pub overall_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synergy {
    pub idea1_id: IdeaId,
    pub idea2_id: IdeaId,
    pub idea1: String,
    pub idea2: String,
    pub synergy_score: f64,
    pub suggested_combination: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub idea: String,
    pub overall_score: f64,
    pub recommended_path: Vec<Phase>,
    pub milestones: Vec<Milestone>,
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub phase: String,
    pub duration: u32, // months
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub name: String,
    pub timeline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaStats {
    pub total_ideas: usize,
    pub average_originality: f64,
    pub average_impact: f64,
    pub category_distribution: BTreeMap<String, usize>,
    pub state_distribution: BTreeMap<String, usize>,
}

// ============================================================================
// Chat Response Schema
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputAnalysis {
    pub domain: String,
    pub confidence: f64,
    pub related_domains: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestedIdea {
    pub id: String,
    pub text: String,
    pub domain: String,
    pub relevance: f64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "excited")]
    Excited,
    #[serde(rename = "happy")]
    Happy,
    #[serde(rename = "thinking")]
    Thinking,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Excited => "excited",
            Mood::Happy => "happy",
            Mood::Thinking => "thinking",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub analysis: InputAnalysis,
    pub response_text: String,
    pub ideas: Vec<SuggestedIdea>,
    pub followup_questions: Vec<String>,
    pub mood: Mood,
}

// ============================================================================
// Idea Report Schema
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaReport {
    pub idea: Idea,
    pub evaluation: Evaluation,
    pub visualization: Option<Visualization>,
    pub recommendations: Vec<String>,
    pub implementation_notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Visualization {
    pub id: VisualizationId,
    pub status: String,
    pub result: VisualizationResult,
    pub simulated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationResult {
    pub prompt: String,
    pub seed: u32,
    pub sample: String,
}

// ============================================================================
// API Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureRequest {
    pub description: String,
    pub category: Option<String>,
    pub feasibility: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormRequest {
    pub focus_area: Option<String>,
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvanceRequest {
    pub state: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRequest {
    pub pattern: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectRequest {
    pub idea1: IdeaId,
    pub idea2: IdeaId,
    pub connection_type: Option<String>,
}

// ============================================================================
// Helper Functions
// ============================================================================

pub fn generate_idea_id() -> IdeaId {
    IdeaId(format!("idea_{}", ulid::Ulid::new()))
}

pub fn generate_visualization_id() -> VisualizationId {
    VisualizationId(format!("vis_{}", ulid::Ulid::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_idea() -> Idea {
        Idea {
            id: generate_idea_id(),
            timestamp: "2025-11-02T18:00:00Z".to_string(),
            description: "Smart solution to simplify daily life for improved experience"
                .to_string(),
            category: "creative".to_string(),
            feasibility: 0.6,
            originality: 0.25,
            impact_potential: 0.15,
            state: IdeaState::Conceived,
            connections: vec![Connection {
                id: IdeaId::from("idea_other"),
                r#type: "similar".to_string(),
            }],
        }
    }

    #[test]
    fn test_id_generation() {
        let idea_id = generate_idea_id();
        assert!(idea_id.0.starts_with("idea_"));
        assert_eq!(idea_id.0.len(), 31); // "idea_" + 26 chars

        let vis_id = generate_visualization_id();
        assert!(vis_id.0.starts_with("vis_"));

        assert_ne!(generate_idea_id(), generate_idea_id());
    }

    #[test]
    fn test_state_names() {
        for state in IdeaState::ALL {
            assert_eq!(IdeaState::parse(state.as_str()), Some(state));
        }
        assert_eq!(IdeaState::parse("bogus-state"), None);
        assert_eq!(IdeaState::parse("Developing"), None);
    }

    #[test]
    fn test_idea_wire_fields() {
        let idea = sample_idea();
        let json = serde_json::to_value(&idea).unwrap();

        assert!(json.get("impactPotential").is_some());
        assert_eq!(json["state"], "conceived");
        assert_eq!(json["connections"][0]["type"], "similar");
        assert_eq!(json["connections"][0]["id"], "idea_other");

        let restored: Idea = serde_json::from_value(json).unwrap();
        assert_eq!(restored.description, idea.description);
        assert_eq!(restored.connections, idea.connections);
    }

    #[test]
    fn test_evaluation_wire_fields() {
        let evaluation = Evaluation {
            idea_id: IdeaId::from("idea_x"),
            feasibility: 0.7,
            originality: 0.4,
            impact_potential: 0.15,
            market_potential: 0.3,
            technical_complexity: 0.5,
            resource_requirements: 0.8,
            timeline_estimate: 14,
            risk_assessment: 0.6,
            overall_score: 0.5,
        };

        let json = serde_json::to_value(&evaluation).unwrap();
        for field in [
            "ideaId",
            "marketPotential",
            "technicalComplexity",
            "resourceRequirements",
            "timelineEstimate",
            "riskAssessment",
            "overallScore",
        ] {
            assert!(json.get(field).is_some(), "missing field {}", field);
        }
    }

    #[test]
    fn test_report_serialization() {
        let idea = sample_idea();
        let report = IdeaReport {
            evaluation: Evaluation {
                idea_id: idea.id.clone(),
                feasibility: 0.6,
                originality: 0.25,
                impact_potential: 0.15,
                market_potential: 0.3,
                technical_complexity: 0.5,
                resource_requirements: 0.4,
                timeline_estimate: 11,
                risk_assessment: 0.3,
                overall_score: 0.4,
            },
            idea,
            visualization: None,
            recommendations: vec!["Lower-potential idea - consider pivoting or enhancing".into()],
            implementation_notes: vec!["Estimated timeline: 11 months".into()],
        };

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["visualization"].is_null());
        assert!(json.get("implementationNotes").is_some());

        let restored: IdeaReport = serde_json::from_value(json).unwrap();
        assert_eq!(restored.recommendations.len(), 1);
    }

    #[test]
    fn test_chat_response_wire_fields() {
        let response = ChatResponse {
            analysis: InputAnalysis {
                domain: "general".into(),
                confidence: 0.0,
                related_domains: vec![],
            },
            response_text: "That sounds interesting!".into(),
            ideas: vec![],
            followup_questions: vec!["Who would benefit most from this?".into()],
            mood: Mood::Thinking,
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mood"], "thinking");
        assert!(json.get("responseText").is_some());
        assert!(json.get("followupQuestions").is_some());
        assert!(json["analysis"].get("relatedDomains").is_some());
    }
}
