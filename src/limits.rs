//! The crate's only configuration surface: the two capacity knobs the
//! underlying construction and matching algorithms are bounded by.
//!
//! There is no config file or environment variable layer here — nothing in
//! this crate's scope reads files or an environment — so a plain struct
//! passed explicitly to [`crate::compiler::compile`],
//! [`crate::refine::refine_epsilon`], and [`crate::matcher::matches`] is
//! proportionate.

/// Capacity limits for NFA construction and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of states the compiler may allocate.
    pub max_states: usize,
    /// Maximum depth of the explicit stack used by ε-closure refinement and
    /// by the backtracking matcher.
    pub max_stack: usize,
}

impl Default for Limits {
    fn default() -> Limits {
        Limits {
            max_states: 100,
            max_stack: 300,
        }
    }
}
