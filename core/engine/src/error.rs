use ideation_schemas::IdeaId;

/// Failures surfaced by registry and pipeline operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IdeaError {
    #[error("idea not found: {id}")]
    NotFound { id: IdeaId },

    #[error("invalid state: {state}")]
    InvalidState { state: String },

    #[error("unknown thinking pattern: {pattern}")]
    UnknownPattern { pattern: String },
}

impl IdeaError {
    pub fn not_found(id: &IdeaId) -> Self {
        IdeaError::NotFound { id: id.clone() }
    }
}

pub type Result<T> = std::result::Result<T, IdeaError>;
