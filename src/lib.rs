//! Compiles a regular expression AST into a nondeterministic finite
//! automaton over printable ASCII, and matches input strings against it via
//! depth-first backtracking.
//!
//! The pipeline is: build a [`Regex`] with its constructors, [`compile`] it
//! into an [`Nfa`], run [`refine_epsilon`] once to close every state's
//! ε-transitions, then call [`matches`] as many times as needed against
//! that refined NFA.
//!
//! There is no surface-syntax parser, no Unicode, no capture groups, no
//! anchors or lookaround, no lazy quantifiers or counted repetition, and no
//! conversion to a deterministic automaton; the alphabet is printable ASCII
//! (`32..=126`) plus a reserved ε marker.

pub mod ast;
pub mod compiler;
pub mod error;
pub mod limits;
pub mod matcher;
pub mod nfa;
pub mod refine;

pub use ast::Regex;
pub use compiler::compile;
pub use error::Error;
pub use limits::Limits;
pub use matcher::matches;
pub use nfa::Nfa;
pub use refine::refine_epsilon;
