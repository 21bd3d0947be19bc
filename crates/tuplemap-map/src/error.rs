//! Error types for mapping operations.

use thiserror::Error;

/// Errors from registry configuration and mapping calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MappingError {
    /// No descriptor is registered for the requested pair.
    #[error("No mapping registered from {source_type} to {destination_type}")]
    UnregisteredMapping {
        source_type: &'static str,
        destination_type: &'static str,
    },

    /// The requested positional destination is not a tuple shape.
    #[error("Type {type_name} is not a tuple type: {reason}")]
    InvalidDestinationShape { type_name: String, reason: String },

    /// The destination could not be assembled from the mapped values.
    #[error("Cannot construct {type_name}: {reason}")]
    ConstructionFailure { type_name: String, reason: String },

    /// A second descriptor was registered for the same pair.
    #[error("Mapping from {source_type} to {destination_type} is already registered")]
    DuplicateMapping {
        source_type: &'static str,
        destination_type: &'static str,
    },

    /// A descriptor carries two rules for one destination member.
    #[error(
        "Member '{member}' has more than one rule in mapping from {source_type} to {destination_type}"
    )]
    DuplicateMember {
        source_type: &'static str,
        destination_type: &'static str,
        member: &'static str,
    },

    /// A rule names a member the destination does not declare.
    #[error("Member '{member}' is not declared by {destination_type} (mapping from {source_type})")]
    UnknownMember {
        source_type: &'static str,
        destination_type: &'static str,
        member: &'static str,
    },

    /// The global registry was read before it was published.
    #[error("Mapping registry has not been initialized")]
    NotInitialized,

    /// The global registry was published more than once.
    #[error("Mapping registry is already initialized")]
    AlreadyInitialized,
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MappingError>;
