//! Construction-time validation errors for the navigation registry.
//!
//! Silent misrouting is worse than startup failure, so a malformed registry
//! refuses to start instead of resolving to the wrong entry.

use thiserror::Error;

/// Navigation registry validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two entries share the same route path.
    #[error("duplicate route path in navigation registry: {0}")]
    DuplicatePath(String),

    /// Two sections share the same id.
    #[error("duplicate section id in navigation registry: {0}")]
    DuplicateSectionId(String),

    /// A section is missing a required field.
    #[error("navigation section is missing a required field: {0}")]
    EmptySectionField(&'static str),

    /// An entry under `section` is missing a required field.
    #[error("entry in section '{section}' is missing a required field: {field}")]
    EmptyEntryField {
        section: String,
        field: &'static str,
    },
}
