use ideation_schemas::{Idea, IdeaId, IDEA_CATEGORIES};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{IdeaError, Result};
use crate::registry::IdeaRegistry;

/// Word lists for one brainstorming context
#[derive(Debug)]
pub struct ContextGrammar {
    pub prefixes: &'static [&'static str],
    pub verbs: &'static [&'static str],
    pub domains: &'static [&'static str],
    pub outcomes: &'static [&'static str],
}

static TECHNOLOGY: ContextGrammar = ContextGrammar {
    prefixes: &[
        "AI-driven",
        "Blockchain-based",
        "IoT-enabled",
        "Quantum-enhanced",
        "Neural Network-powered",
    ],
    verbs: &[
        "automate",
        "optimize",
        "secure",
        "integrate",
        "scale",
        "monitor",
    ],
    domains: &[
        "data processing",
        "network security",
        "cloud computing",
        "edge devices",
        "machine learning",
    ],
    outcomes: &[
        "performance",
        "reliability",
        "efficiency",
        "scalability",
        "intelligence",
    ],
};

static BUSINESS: ContextGrammar = ContextGrammar {
    prefixes: &[
        "Platform-based",
        "Subscription",
        "Freemium",
        "Marketplace",
        "SaaS",
    ],
    verbs: &[
        "monetize",
        "streamline",
        "disrupt",
        "optimize",
        "automate",
        "expand",
    ],
    domains: &[
        "customer acquisition",
        "retention",
        "operations",
        "marketing",
        "sales",
    ],
    outcomes: &[
        "revenue",
        "growth",
        "efficiency",
        "market share",
        "profitability",
    ],
};

static SOCIAL_IMPACT: ContextGrammar = ContextGrammar {
    prefixes: &[
        "Community-driven",
        "Crowdsourced",
        "Open-source",
        "Peer-to-peer",
        "Decentralized",
    ],
    verbs: &[
        "empower",
        "connect",
        "educate",
        "support",
        "enable",
        "facilitate",
    ],
    domains: &[
        "education",
        "healthcare",
        "environment",
        "equality",
        "accessibility",
    ],
    outcomes: &[
        "inclusion",
        "awareness",
        "participation",
        "change",
        "impact",
    ],
};

static GENERAL: ContextGrammar = ContextGrammar {
    prefixes: &[
        "AI-powered",
        "Smart",
        "Connected",
        "Adaptive",
        "Personalized",
    ],
    verbs: &[
        "enhance",
        "simplify",
        "improve",
        "transform",
        "connect",
        "enable",
    ],
    domains: &[
        "daily life",
        "productivity",
        "communication",
        "creativity",
        "wellbeing",
    ],
    outcomes: &[
        "experience",
        "efficiency",
        "satisfaction",
        "engagement",
        "results",
    ],
};

/// Grammar of the free-form `generate_idea` generator
static FREEFORM: ContextGrammar = ContextGrammar {
    prefixes: &[
        "AI-powered",
        "Blockchain-based",
        "IoT-enhanced",
        "VR/AR-enabled",
        "Quantum-inspired",
    ],
    verbs: &[
        "streamline",
        "revolutionize",
        "automate",
        "optimize",
        "enhance",
        "connect",
        "empower",
    ],
    domains: &[
        "education",
        "healthcare",
        "finance",
        "communication",
        "productivity",
        "creativity",
        "collaboration",
    ],
    outcomes: &[
        "user experience",
        "efficiency",
        "accessibility",
        "personalization",
        "sustainability",
    ],
};

pub const KNOWLEDGE_DOMAINS: [&str; 10] = [
    "technology",
    "business",
    "art",
    "science",
    "education",
    "healthcare",
    "environment",
    "social_impact",
    "entertainment",
    "productivity",
];

const STIMULI: [&str; 5] = ["nature", "music", "architecture", "biology", "physics"];
const ATTRIBUTES: [&str; 5] = [
    "speed",
    "durability",
    "aesthetics",
    "usability",
    "sustainability",
];
const SCENARIOS: [&str; 5] = [
    "remote work",
    "climate change",
    "aging population",
    "urbanization",
    "digital transformation",
];

/// Unknown contexts use the general grammar
pub fn grammar_for(context: &str) -> &'static ContextGrammar {
    match context {
        "technology" => &TECHNOLOGY,
        "business" => &BUSINESS,
        "social_impact" => &SOCIAL_IMPACT,
        _ => &GENERAL,
    }
}

pub fn category_for(context: &str) -> &'static str {
    match context {
        "technology" => "technical",
        "business" => "practical",
        "social_impact" => "social",
        _ => "creative",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinkingPattern {
    Analogical,
    /// Appends no text; only the score bump applies
    Functional,
    Reverse,
    RandomStimulus,
    AttributeAnalysis,
    ScenarioPlanning,
    Combination,
}

impl ThinkingPattern {
    /// Round-robin order used by `brainstorm`
    pub const ALL: [ThinkingPattern; 7] = [
        ThinkingPattern::Analogical,
        ThinkingPattern::Functional,
        ThinkingPattern::Reverse,
        ThinkingPattern::RandomStimulus,
        ThinkingPattern::AttributeAnalysis,
        ThinkingPattern::ScenarioPlanning,
        ThinkingPattern::Combination,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingPattern::Analogical => "analogical",
            ThinkingPattern::Functional => "functional",
            ThinkingPattern::Reverse => "reverse",
            ThinkingPattern::RandomStimulus => "random_stimulus",
            ThinkingPattern::AttributeAnalysis => "attribute_analysis",
            ThinkingPattern::ScenarioPlanning => "scenario_planning",
            ThinkingPattern::Combination => "combination",
        }
    }
}

impl fmt::Display for ThinkingPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThinkingPattern {
    type Err = IdeaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == s)
            .ok_or_else(|| IdeaError::UnknownPattern {
                pattern: s.to_string(),
            })
    }
}

/// Template-driven idea generator.
///
/// Owns its random source so a seeded generator reproduces the same word
/// choices, feasibility samples and pattern suffixes run after run. Ideas are
/// written into the registry passed to each call.
pub struct IdeaGenerator<R: Rng = StdRng> {
    rng: R,
}

impl IdeaGenerator<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Seeded when the config carries a seed, entropy otherwise
    pub fn from_config(config: &EngineConfig) -> Self {
        match config.seed {
            Some(seed) => {
                info!("Idea generator seeded with {}", seed);
                Self::seeded(seed)
            }
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> IdeaGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    fn pick(&mut self, options: &'static [&'static str]) -> &'static str {
        options[self.rng.gen_range(0..options.len())]
    }

    /// Uniform in [0.3, 0.8]
    fn sample_feasibility(&mut self) -> f64 {
        0.3 + self.rng.gen::<f64>() * 0.5
    }

    fn compose(&mut self, grammar: &'static ContextGrammar, prefix: Option<&str>) -> String {
        let prefix = match prefix {
            Some(prefix) => prefix.to_string(),
            None => self.pick(grammar.prefixes).to_string(),
        };
        let verb = self.pick(grammar.verbs);
        let domain = self.pick(grammar.domains);
        let outcome = self.pick(grammar.outcomes);

        format!("{} solution to {} {} for improved {}", prefix, verb, domain, outcome)
    }

    /// Compose an idea from the context's grammar and register it
    pub fn generate_contextual(&mut self, registry: &mut IdeaRegistry, context: &str) -> Idea {
        let description = self.compose(grammar_for(context), None);
        let feasibility = self.sample_feasibility();

        debug!("Generated contextual idea for {}: {}", context, description);
        registry.capture(description, category_for(context), feasibility)
    }

    /// Free-form generator. A non-empty seed concept replaces the random prefix.
    pub fn generate_idea(
        &mut self,
        registry: &mut IdeaRegistry,
        seed_concept: Option<&str>,
    ) -> Idea {
        let seed_concept = seed_concept.filter(|concept| !concept.trim().is_empty());
        let description = self.compose(&FREEFORM, seed_concept);
        let category = self.pick(&IDEA_CATEGORIES);
        let feasibility = self.sample_feasibility();

        registry.capture(description, category, feasibility)
    }

    fn pattern_suffix(&mut self, pattern: ThinkingPattern) -> Option<String> {
        match pattern {
            ThinkingPattern::Analogical => Some(format!(
                " (using principles from {})",
                self.pick(&KNOWLEDGE_DOMAINS)
            )),
            ThinkingPattern::Functional => None,
            ThinkingPattern::Reverse => Some(" (considering reverse/inverse approach)".to_string()),
            ThinkingPattern::RandomStimulus => {
                Some(format!(" (triggered by {} metaphor)", self.pick(&STIMULI)))
            }
            ThinkingPattern::AttributeAnalysis => {
                Some(format!(" (focusing on {} attribute)", self.pick(&ATTRIBUTES)))
            }
            ThinkingPattern::ScenarioPlanning => {
                Some(format!(" (designed for {} scenario)", self.pick(&SCENARIOS)))
            }
            ThinkingPattern::Combination => Some(format!(
                " (combined with {} concepts)",
                self.pick(&KNOWLEDGE_DOMAINS)
            )),
        }
    }

    /// Append the pattern's suffix to a registered idea and nudge its scores up
    pub fn apply_thinking_pattern(
        &mut self,
        registry: &mut IdeaRegistry,
        id: &IdeaId,
        pattern: ThinkingPattern,
    ) -> Result<Idea> {
        // Fail before drawing from the random source
        registry.require(id)?;
        let suffix = self.pattern_suffix(pattern);

        let idea = registry.get_mut(id)?;
        if let Some(suffix) = suffix {
            idea.description.push_str(&suffix);
        }
        idea.originality = (idea.originality + 0.1).min(1.0);
        idea.impact_potential = (idea.impact_potential + 0.05).min(1.0);

        debug!("Applied {} pattern to {}", pattern, id);
        Ok(idea.clone())
    }

    /// Generate `count` ideas, applying the thinking patterns round-robin
    pub fn brainstorm(
        &mut self,
        registry: &mut IdeaRegistry,
        focus_area: &str,
        count: usize,
    ) -> Result<Vec<Idea>> {
        info!("Starting brainstorming session for: {} ({} ideas)", focus_area, count);

        let mut ideas = Vec::with_capacity(count);
        for i in 0..count {
            let idea = self.generate_contextual(registry, focus_area);
            let pattern = ThinkingPattern::ALL[i % ThinkingPattern::ALL.len()];
            ideas.push(self.apply_thinking_pattern(registry, &idea.id, pattern)?);
        }

        Ok(ideas)
    }
}
