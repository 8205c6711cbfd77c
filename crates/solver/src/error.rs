use thiserror::Error;

#[derive(Error, Debug)]
pub enum CfrError {
    #[error("Illegal action: {0}")]
    IllegalAction(String),

    #[error("Invalid subgame: {0}")]
    InvalidSubgame(String),

    #[error("Information set not covered by the last resolve: {0}")]
    UnknownInfoSet(String),

    #[error("Player acted before init")]
    Uninitialized,

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type CfrResult<T> = Result<T, CfrError>;
