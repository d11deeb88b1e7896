use thiserror::Error;

/// Failure of a generation call.
///
/// Both variants are deterministic input errors: the message is meant to be
/// shown to the user once, and retrying with the same input fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A parameter is outside its closed enumeration, or a count that must be
    /// positive is not.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The target has no usable geometry.
    #[error("missing target: {0}")]
    MissingTarget(String),
}

impl GenerateError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub(crate) fn missing_target(msg: impl Into<String>) -> Self {
        Self::MissingTarget(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, GenerateError>;
