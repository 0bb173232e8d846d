//! Executes a compiled, ε-refined NFA against an input string via
//! depth-first backtracking over an explicit frame stack.
//!
//! This realizes the eager-ε-closure alternative: because
//! [`crate::refine::refine_epsilon`] has already made every state's ε-slot
//! its own full closure, a frame need only look at the *current* state's
//! (already closed) ε-list rather than alternating even/odd "ε-frame" and
//! "char-frame" levels. Pushing a child frame is the only thing that
//! consumes an input byte, so stack depth never exceeds the remaining
//! input length plus one.

use crate::error::Error;
use crate::limits::Limits;
use crate::nfa::{slot_of, Nfa, StateId, ACCEPT, START};

struct Frame {
    state: StateId,
    pos: usize,
    candidates: Vec<StateId>,
    idx: usize,
}

fn candidates_for(nfa: &Nfa, state: StateId, input: &[u8], pos: usize) -> Vec<StateId> {
    if pos >= input.len() {
        return Vec::new();
    }
    // `slot_of` cannot fail here: every byte in `input` was validated
    // before the walk began.
    let slot = slot_of(input[pos]).expect("input byte validated upfront");
    let mut out = Vec::new();
    for &s in nfa.epsilon_transitions(state) {
        out.extend_from_slice(nfa.transitions(s, slot));
    }
    out
}

fn is_accepting(nfa: &Nfa, state: StateId, input: &[u8], pos: usize) -> bool {
    pos == input.len() && nfa.epsilon_transitions(state).contains(&ACCEPT)
}

fn push_frame(
    stack: &mut Vec<Frame>,
    nfa: &Nfa,
    limits: &Limits,
    state: StateId,
    input: &[u8],
    pos: usize,
) -> Result<(), Error> {
    if stack.len() + 1 > limits.max_stack {
        return Err(Error::StackOverflow {
            max_stack: limits.max_stack,
        });
    }
    log::trace!("push frame state={state} pos={pos}");
    stack.push(Frame {
        state,
        pos,
        candidates: candidates_for(nfa, state, input, pos),
        idx: 0,
    });
    Ok(())
}

/// Returns whether `input` is accepted by `nfa`, starting from
/// [`crate::nfa::START`].
///
/// Every byte of `input` must lie in `32..=126`; an out-of-range byte is
/// rejected up front as [`Error::InvalidCharacter`] before any frame is
/// pushed, so `candidates_for` never has to special-case an invalid byte
/// mid-walk.
pub fn matches(nfa: &Nfa, input: &[u8], limits: &Limits) -> Result<bool, Error> {
    for &byte in input {
        slot_of(byte)?;
    }

    let mut stack = Vec::new();
    push_frame(&mut stack, nfa, limits, START, input, 0)?;

    loop {
        let Some(top) = stack.last() else {
            log::debug!("verdict: reject");
            return Ok(false);
        };
        if is_accepting(nfa, top.state, input, top.pos) {
            log::debug!("verdict: accept");
            return Ok(true);
        }

        let next_candidate = {
            let frame = stack.last_mut().expect("checked non-empty above");
            if frame.idx < frame.candidates.len() {
                let candidate = frame.candidates[frame.idx];
                frame.idx += 1;
                Some((candidate, frame.pos + 1))
            } else {
                None
            }
        };

        match next_candidate {
            Some((state, pos)) => push_frame(&mut stack, nfa, limits, state, input, pos)?,
            None => {
                log::trace!("pop frame state={}", stack.last().unwrap().state);
                stack.pop();
            }
        }
    }
}
