use thiserror::Error;

/// Errors raised while configuring a tree or scoring features.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("unsupported criterion: '{0}'")]
    UnsupportedCriterion(String),

    #[error("not implemented: {0}")]
    Unimplemented(&'static str),

    #[error("expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("feature columns have different lengths")]
    RaggedColumns,

    #[error("input contains no samples")]
    EmptyInput,

    #[error("category has no samples")]
    EmptyCategory,

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, TreeError>;
