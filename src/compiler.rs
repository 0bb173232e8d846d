//! Compiles a [`Regex`] into an [`Nfa`] via an in-place, worklist-driven
//! rewriting of pending "expression edges" into character transitions and
//! intermediate states.
//!
//! The compiler only ever reads the AST; it never takes ownership, so the
//! caller may drop the tree immediately after `compile` returns.

use crate::ast::Regex;
use crate::error::Error;
use crate::limits::Limits;
use crate::nfa::{Nfa, StateId, ACCEPT, EPSILON_SLOT, START};
use std::collections::VecDeque;

/// An as-yet-unexpanded transition labeled by an AST fragment: "if `expr`
/// matches, control reaches `target`".
struct PendingEdge<'a> {
    expr: &'a Regex,
    target: StateId,
}

fn ensure_pending<'a>(pending: &mut Vec<VecDeque<PendingEdge<'a>>>, state: StateId) {
    let needed = state as usize + 1;
    if pending.len() < needed {
        pending.resize_with(needed, VecDeque::new);
    }
}

/// Compiles `root` into an NFA with state [`ACCEPT`] (0) as the accepting
/// state and state [`START`] (1) as the start state.
///
/// Processes states in increasing index. Each state with a non-empty
/// pending list first gets a reflexive ε self-transition (harmless, and it
/// makes every visited state insert itself during [`crate::refine`]'s
/// closure pass uniformly), then has its pending edges popped and
/// dispatched one at a time until none remain.
pub fn compile(root: &Regex, limits: &Limits) -> Result<Nfa, Error> {
    let mut nfa = Nfa::new();
    let mut pending: Vec<VecDeque<PendingEdge>> = Vec::new();
    ensure_pending(&mut pending, START);
    pending[START as usize].push_back(PendingEdge {
        expr: root,
        target: ACCEPT,
    });

    let mut s: StateId = START;
    loop {
        if (s as usize) >= pending.len() {
            break;
        }
        if pending[s as usize].is_empty() {
            s += 1;
            continue;
        }

        nfa.add_transition(s, EPSILON_SLOT, s)?;
        log::debug!("state {s}: seeded self ε-loop");

        while let Some(edge) = pending[s as usize].pop_front() {
            dispatch(&mut nfa, &mut pending, limits, s, edge)?;
        }
        log::debug!("state {s}: fully expanded");
        s += 1;
    }

    Ok(nfa)
}

fn dispatch<'a>(
    nfa: &mut Nfa,
    pending: &mut Vec<VecDeque<PendingEdge<'a>>>,
    limits: &Limits,
    s: StateId,
    edge: PendingEdge<'a>,
) -> Result<(), Error> {
    let target = edge.target;
    match edge.expr {
        Regex::Literal(c) => {
            let slot = crate::nfa::slot_of(*c)?;
            log::trace!("state {s}: literal {c} -> {target}");
            nfa.add_transition(s, slot, target)?;
        }
        Regex::Range(lo, hi) => {
            if lo > hi {
                return Err(Error::InvalidCharacter { byte: *lo });
            }
            log::trace!("state {s}: range {lo}..={hi} -> {target}");
            for c in *lo..=*hi {
                let slot = crate::nfa::slot_of(c)?;
                nfa.add_transition(s, slot, target)?;
            }
        }
        Regex::Concat(l, r) => {
            let m = nfa.alloc_state(limits)?;
            log::trace!("state {s}: concat, intermediate {m}");
            ensure_pending(pending, m);
            pending[m as usize].push_back(PendingEdge { expr: r, target });
            pending[s as usize].push_front(PendingEdge { expr: l, target: m });
        }
        Regex::Alt(l, r) => {
            log::trace!("state {s}: alt -> {target}");
            pending[s as usize].push_back(PendingEdge { expr: r, target });
            pending[s as usize].push_front(PendingEdge { expr: l, target });
        }
        Regex::Star(inner) => {
            log::trace!("state {s}: star, skip -> {target}");
            nfa.add_transition(s, EPSILON_SLOT, target)?;
            pending[s as usize].push_front(PendingEdge { expr: inner, target: s });
        }
    }
    Ok(())
}
