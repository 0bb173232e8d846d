//! The error taxonomy shared by compilation, ε-closure refinement, and
//! matching. Every variant here is fatal at its operation boundary: none of
//! `compile`, `refine_epsilon`, or `matches` attempt internal recovery.

use thiserror::Error;

/// Failure modes that can arise while compiling, refining, or running an
/// NFA.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Compilation needed more states than `Limits::max_states` allows.
    #[error("state capacity exceeded: requested a state beyond the {max_states} allotted")]
    CapacityExceeded {
        /// The configured limit that was hit.
        max_states: usize,
    },

    /// ε-closure refinement or matching recursed past `Limits::max_stack`.
    #[error("explicit stack depth exceeded the configured limit of {max_stack}")]
    StackOverflow {
        /// The configured limit that was hit.
        max_stack: usize,
    },

    /// An AST literal, range endpoint, or input byte fell outside the
    /// printable-ASCII alphabet `32..=126`.
    #[error("character {byte} (0x{byte:02x}) is outside the printable ASCII range 32..=126")]
    InvalidCharacter {
        /// The offending byte.
        byte: u8,
    },

    /// The allocator refused to grow an internal table.
    #[error("allocation failed while growing an internal table")]
    AllocationFailure,

    /// Defensive: an AST node did not match any known variant.
    ///
    /// Unreachable in this crate. `Regex` is a five-variant enum and every
    /// `match` over it is exhaustive, so the Rust compiler rejects any code
    /// path that could construct this variant at compile time. It is kept
    /// only so the error surface matches the specification's taxonomy.
    #[error("encountered an AST node of unknown shape")]
    MalformedAst,
}
