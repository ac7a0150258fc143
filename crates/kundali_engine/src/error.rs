//! Engine error taxonomy.
//!
//! Two failure classes cover the whole request path: bad input and a bad
//! upstream ephemeris. There are no retries — the first error aborts the
//! request and no partial chart is ever returned. Unknown-body and
//! unknown-sign configuration errors are unrepresentable: the base crate's
//! closed enums make them impossible to construct.

use thiserror::Error;

/// Terminal errors surfaced to the transport layer, which owns the mapping
/// to protocol-specific codes.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// The ephemeris provider failed or returned out-of-range values.
    #[error("ephemeris error: {0}")]
    UpstreamEphemeris(String),
    /// Malformed instant, coordinates, or timezone.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
