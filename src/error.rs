//! Error types for resource resolution.

use thiserror::Error;

/// Errors raised while registering or resolving resource kinds.
///
/// Every variant is fatal for the single call that produced it and leaves the
/// registry untouched, so a caller can keep resolving other inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The attribute bag carries no resource-kind discriminator at all.
    #[error("attribute bag has no `{0}` attribute")]
    InvalidInput(&'static str),

    /// The discriminator names a kind nobody registered for this provider.
    #[error("unknown resource type `{type_key}` for provider `{provider}`")]
    UnknownType { provider: String, type_key: String },

    /// The kind is known but companion attributes are absent or empty.
    #[error("resource type `{kind}` is missing required attributes: {}", .missing.join(", "))]
    MissingAttribute { kind: String, missing: Vec<String> },

    /// No kinds are registered under this provider namespace.
    #[error("unknown provider `{0}`")]
    UnknownProvider(String),

    /// A second handler was registered under an already bound key.
    #[error("resource type `{type_key}` is already registered for provider `{provider}`")]
    DuplicateType { provider: String, type_key: String },

    /// An attribute value could not be read as a scalar.
    #[error("attribute `{name}` is invalid: {reason}")]
    InvalidAttribute { name: String, reason: String },
}

/// Result type for resource resolution.
pub type Result<T> = std::result::Result<T, ResourceError>;
