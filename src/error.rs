//! Error types for the EL classifier

use thiserror::Error;

/// Classifier error type (§7 of the design).
///
/// Three variants, each with a real construction site: a reserved-name collision
/// during interning, an unresolved reference left over after normalization, and
/// allocation failure surfaced from context construction. Everything else the
/// spec calls a "warning" is logged, not returned.
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A caller tried to intern `owl:Thing` or `owl:Nothing` to a non-reserved id.
    #[error("reserved name collision: {0}")]
    DuplicateReservedName(String),

    /// A relationship target could not be interned; this indicates a bug in the
    /// normalizer, not malformed user data (the spec calls this out explicitly).
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// Allocation failed while growing a context, worklist, or axiom-store table.
    #[error("resource exhausted: {0}")]
    ResourceExhaustion(String),
}

/// Result type for classifier operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;
