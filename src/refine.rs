//! Rewrites every state's ε-slot into its full reflexive, transitive
//! ε-closure, so the matcher can treat "all states reachable via ε" as
//! already materialized rather than discovering it mid-walk.

use crate::error::Error;
use crate::limits::Limits;
use crate::nfa::{Nfa, StateId, EPSILON_SLOT};
use std::collections::HashSet;

/// For every state, computes its ε-closure via an explicit-stack
/// depth-first traversal (never native recursion, so the bound on depth is
/// a bound on an actual `Vec`, not on the call stack) and rewrites the
/// state's ε-slot to hold exactly that closure.
pub fn refine_epsilon(nfa: &mut Nfa, limits: &Limits) -> Result<(), Error> {
    let num_states = nfa.num_states();
    for s in 0..num_states {
        let s = s as StateId;
        let closure = closure_of(nfa, s, limits)?;
        log::trace!("state {s}: closure discovered {} states", closure.len());
        for t in &closure {
            nfa.add_transition(s, EPSILON_SLOT, *t)?;
        }
        log::debug!("state {s}: ε-closure stabilized at size {}", closure.len());
    }
    Ok(())
}

fn closure_of(nfa: &Nfa, start: StateId, limits: &Limits) -> Result<HashSet<StateId>, Error> {
    let mut visited = HashSet::new();
    let mut stack = vec![start];
    visited.insert(start);

    while let Some(cur) = stack.pop() {
        for &next in nfa.epsilon_transitions(cur) {
            if visited.insert(next) {
                if stack.len() + 1 > limits.max_stack {
                    return Err(Error::StackOverflow {
                        max_stack: limits.max_stack,
                    });
                }
                stack.push(next);
            }
        }
    }
    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Regex;
    use crate::compiler::compile;
    use crate::nfa::ACCEPT;

    #[test]
    fn star_closure_reaches_accept_from_start_on_zero_reps() {
        let ast = Regex::star(Regex::literal(b'a'));
        let mut nfa = compile(&ast, &Limits::default()).unwrap();
        refine_epsilon(&mut nfa, &Limits::default()).unwrap();
        assert!(nfa.epsilon_transitions(crate::nfa::START).contains(&ACCEPT));
    }

    #[test]
    fn every_state_contains_itself_in_its_own_closure() {
        let ast = Regex::concat(Regex::literal(b'a'), Regex::star(Regex::literal(b'b')));
        let mut nfa = compile(&ast, &Limits::default()).unwrap();
        refine_epsilon(&mut nfa, &Limits::default()).unwrap();
        for s in 0..nfa.num_states() as StateId {
            assert!(nfa.epsilon_transitions(s).contains(&s), "state {s} missing self in closure");
        }
    }

    #[test]
    fn stack_overflow_is_surfaced_on_tiny_budget() {
        // A long ε-chain: Alt nesting creates branching but Concat-of-Stars
        // creates a long chain of distinct states connected by ε.
        let mut ast = Regex::star(Regex::literal(b'a'));
        for _ in 0..20 {
            ast = Regex::concat(ast, Regex::star(Regex::literal(b'a')));
        }
        let limits = Limits {
            max_states: 1000,
            max_stack: 1,
        };
        let mut nfa = compile(&ast, &limits).unwrap();
        let err = refine_epsilon(&mut nfa, &limits).unwrap_err();
        assert!(matches!(err, Error::StackOverflow { max_stack: 1 }));
    }
}
