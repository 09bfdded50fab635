pub mod config;
pub mod error;
pub mod evaluator;
pub mod generator;
pub mod heuristic;
pub mod ranker;
pub mod registry;
pub mod roadmap;
pub mod synergy;

pub use config::EngineConfig;
pub use error::{IdeaError, Result};
pub use evaluator::evaluate;
pub use generator::{IdeaGenerator, ThinkingPattern};
pub use ranker::{rank, RankCriterion};
pub use registry::{IdeaRegistry, RegistrySnapshot, DEFAULT_CONNECTION_TYPE};
pub use roadmap::generate_roadmap;
pub use synergy::{calculate_synergy, find_synergies, SYNERGY_THRESHOLD};
