//! Fatal generation errors.
//!
//! There are no recoverable error states inside the backend: both variants
//! signal a contract violation and abort the whole generation run. The
//! caller discards any partially built output.

use thiserror::Error;

/// Errors that abort generation.
#[derive(Debug, Error)]
pub enum GenError {
    /// A type expression could not be mapped onto the Rust type system.
    /// The Thrift type system is closed by construction, so this signals
    /// an AST contract violation from the front end, not bad user input.
    #[error("unsupported type reached the Rust backend: {0}")]
    UnsupportedType(String),

    /// A service inheritance chain deeper than the generics encoding can
    /// express (one generic parameter per letter of the alphabet).
    #[error(
        "service `{service}` has an inheritance chain {depth} levels deep; \
         the generics encoding supports at most 26 levels"
    )]
    ChainTooDeep { service: String, depth: usize },
}
