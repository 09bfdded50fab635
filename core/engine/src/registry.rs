use chrono::Utc;
use ideation_schemas::{generate_idea_id, Connection, Idea, IdeaId, IdeaState, IdeaStats};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{IdeaError, Result};
use crate::heuristic;

pub const DEFAULT_CONNECTION_TYPE: &str = "similar";

/// In-memory store of ideas, keyed by id.
///
/// The registry is the only owner of idea records. Ids are never reused and
/// records are never removed; every mutation goes through `capture`,
/// `connect`, `advance` or the generator's thinking-pattern step.
#[derive(Debug, Default)]
pub struct IdeaRegistry {
    ideas: IndexMap<IdeaId, Idea>,
}

/// Serializable summary of a registry, as shown by `ideation demo`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrySnapshot {
    pub config: EngineConfig,
    pub idea_count: usize,
    pub stats: IdeaStats,
}

impl IdeaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new idea and derive its originality and impact scores
    pub fn capture(
        &mut self,
        description: impl Into<String>,
        category: impl Into<String>,
        feasibility: f64,
    ) -> Idea {
        let description = description.into();
        let idea = Idea {
            id: generate_idea_id(),
            timestamp: Utc::now().to_rfc3339(),
            originality: heuristic::originality(&description),
            impact_potential: heuristic::impact(&description),
            description,
            category: category.into(),
            feasibility: feasibility.clamp(0.0, 1.0),
            state: IdeaState::Conceived,
            connections: Vec::new(),
        };

        info!(
            "Idea captured: {} (category: {}, feasibility: {:.2})",
            preview(&idea.description, 60),
            idea.category,
            idea.feasibility
        );

        self.ideas.insert(idea.id.clone(), idea.clone());
        idea
    }

    pub fn get(&self, id: &IdeaId) -> Option<&Idea> {
        self.ideas.get(id)
    }

    /// Lookup that reports a missing id as `IdeaError::NotFound`
    pub fn require(&self, id: &IdeaId) -> Result<&Idea> {
        self.ideas.get(id).ok_or_else(|| IdeaError::not_found(id))
    }

    pub(crate) fn get_mut(&mut self, id: &IdeaId) -> Result<&mut Idea> {
        self.ideas.get_mut(id).ok_or_else(|| IdeaError::not_found(id))
    }

    /// Link two ideas both ways with the same connection type
    pub fn connect(
        &mut self,
        first: &IdeaId,
        second: &IdeaId,
        connection_type: &str,
    ) -> Result<()> {
        // Validate both ids before touching either record
        self.require(first)?;
        self.require(second)?;

        self.get_mut(first)?.connections.push(Connection {
            id: second.clone(),
            r#type: connection_type.to_string(),
        });
        self.get_mut(second)?.connections.push(Connection {
            id: first.clone(),
            r#type: connection_type.to_string(),
        });

        info!("Connected ideas: {} <-> {} ({})", first, second, connection_type);
        Ok(())
    }

    /// Move an idea to `new_state`, which must be one of the lifecycle names
    pub fn advance(&mut self, id: &IdeaId, new_state: &str) -> Result<Idea> {
        let idea = self.get_mut(id)?;
        let state = IdeaState::parse(new_state).ok_or_else(|| IdeaError::InvalidState {
            state: new_state.to_string(),
        })?;

        idea.state = state;
        info!("Idea {} advanced to state: {}", id, state);
        Ok(idea.clone())
    }

    pub fn find_where<P>(&self, predicate: P) -> Vec<&Idea>
    where
        P: Fn(&Idea) -> bool,
    {
        self.ideas.values().filter(|idea| predicate(*idea)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Idea> {
        self.ideas.values()
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn stats(&self) -> IdeaStats {
        if self.ideas.is_empty() {
            return IdeaStats::default();
        }

        let mut stats = IdeaStats {
            total_ideas: self.ideas.len(),
            ..IdeaStats::default()
        };

        let mut total_originality = 0.0;
        let mut total_impact = 0.0;

        for idea in self.ideas.values() {
            total_originality += idea.originality;
            total_impact += idea.impact_potential;

            *stats
                .category_distribution
                .entry(idea.category.clone())
                .or_insert(0) += 1;
            *stats
                .state_distribution
                .entry(idea.state.as_str().to_string())
                .or_insert(0) += 1;
        }

        stats.average_originality = total_originality / stats.total_ideas as f64;
        stats.average_impact = total_impact / stats.total_ideas as f64;

        debug!("Computed stats over {} ideas", stats.total_ideas);
        stats
    }

    pub fn snapshot(&self, config: &EngineConfig) -> RegistrySnapshot {
        RegistrySnapshot {
            config: config.clone(),
            idea_count: self.ideas.len(),
            stats: self.stats(),
        }
    }
}

/// First `max_chars` characters of `text`, with an ellipsis when cut
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_assigns_fresh_ids() {
        let mut registry = IdeaRegistry::new();
        let a = registry.capture("An idea", "creative", 0.5);
        let b = registry.capture("An idea", "creative", 0.5);

        assert_ne!(a.id, b.id);
        assert_eq!(registry.len(), 2);
        assert_eq!(a.state, IdeaState::Conceived);
        assert!(a.connections.is_empty());
        assert_eq!(registry.get(&a.id).unwrap().description, "An idea");
    }

    #[test]
    fn test_capture_clamps_feasibility() {
        let mut registry = IdeaRegistry::new();
        assert_eq!(registry.capture("x", "practical", 1.7).feasibility, 1.0);
        assert_eq!(registry.capture("y", "practical", -0.2).feasibility, 0.0);
    }

    #[test]
    fn test_connect_is_symmetric() {
        let mut registry = IdeaRegistry::new();
        let a = registry.capture("First", "social", 0.6);
        let b = registry.capture("Second", "social", 0.6);

        registry.connect(&a.id, &b.id, "similar").unwrap();

        let a_links = &registry.get(&a.id).unwrap().connections;
        let b_links = &registry.get(&b.id).unwrap().connections;
        assert!(a_links.contains(&Connection {
            id: b.id.clone(),
            r#type: "similar".into()
        }));
        assert!(b_links.contains(&Connection {
            id: a.id.clone(),
            r#type: "similar".into()
        }));
    }

    #[test]
    fn test_connect_missing_leaves_records_untouched() {
        let mut registry = IdeaRegistry::new();
        let a = registry.capture("First", "social", 0.6);
        let missing = IdeaId::from("idea_missing");

        let err = registry.connect(&a.id, &missing, "similar").unwrap_err();
        assert_eq!(err, IdeaError::NotFound { id: missing });
        assert!(registry.get(&a.id).unwrap().connections.is_empty());
    }

    #[test]
    fn test_advance_validation() {
        let mut registry = IdeaRegistry::new();
        let idea = registry.capture("Something", "technical", 0.4);

        let advanced = registry.advance(&idea.id, "developing").unwrap();
        assert_eq!(advanced.state, IdeaState::Developing);

        let err = registry.advance(&idea.id, "bogus-state").unwrap_err();
        assert!(matches!(err, IdeaError::InvalidState { .. }));
        assert_eq!(registry.get(&idea.id).unwrap().state, IdeaState::Developing);

        let err = registry
            .advance(&IdeaId::from("missing-id"), "developing")
            .unwrap_err();
        assert!(matches!(err, IdeaError::NotFound { .. }));
    }

    #[test]
    fn test_find_where() {
        let mut registry = IdeaRegistry::new();
        registry.capture("solve and improve", "social", 0.9);
        registry.capture("plain", "social", 0.2);

        let feasible = registry.find_where(|idea| idea.feasibility > 0.5);
        assert_eq!(feasible.len(), 1);
        assert_eq!(feasible[0].description, "solve and improve");
        assert!(registry.find_where(|_| false).is_empty());
    }

    #[test]
    fn test_stats_empty_and_populated() {
        let mut registry = IdeaRegistry::new();
        let empty = registry.stats();
        assert_eq!(empty.total_ideas, 0);
        assert_eq!(empty.average_originality, 0.0);
        assert!(empty.category_distribution.is_empty());

        let a = registry.capture("plain", "social", 0.5);
        registry.capture("plain", "technical", 0.5);
        registry.advance(&a.id, "feasible").unwrap();

        let stats = registry.stats();
        assert_eq!(stats.total_ideas, 2);
        assert!((stats.average_originality - 0.25).abs() < 1e-9);
        assert_eq!(stats.category_distribution["social"], 1);
        assert_eq!(stats.category_distribution["technical"], 1);
        assert_eq!(stats.state_distribution["feasible"], 1);
        assert_eq!(stats.state_distribution["conceived"], 1);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 60), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
    }
}
