/// Convenience result type used across Asthesis.
pub type AsthesisResult<T> = Result<T, AsthesisError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum AsthesisError {
    /// Invalid user-provided or chain-configuration data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or evaluating a scroll sequence.
    #[error("sequence error: {0}")]
    Sequence(String),

    /// Errors raised by the Figma proxy outside the normal HTTP reply path.
    #[error("proxy error: {0}")]
    Proxy(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AsthesisError {
    /// Build an [`AsthesisError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`AsthesisError::Sequence`] value.
    pub fn sequence(msg: impl Into<String>) -> Self {
        Self::Sequence(msg.into())
    }

    /// Build an [`AsthesisError::Proxy`] value.
    pub fn proxy(msg: impl Into<String>) -> Self {
        Self::Proxy(msg.into())
    }

    /// Build an [`AsthesisError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
