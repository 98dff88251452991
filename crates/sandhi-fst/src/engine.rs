// Two-tape validation: a synchronous walk over the transducer.

use sandhi_core::ZERO;

use crate::transducer::{StateId, Transducer};

/// How a single validation step consumed the tapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Ordinary transition: one underlying and one surface symbol.
    Match,
    /// A surface symbol with no underlying correspondent.
    Epenthesis,
    /// An underlying symbol with no surface correspondent.
    Deletion,
    /// No transition was defined; validation stopped here.
    Undefined,
}

/// One entry in the validation trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub kind: StepKind,
    /// Underlying-tape index at the start of the step.
    pub underlying_index: usize,
    /// Surface-tape index at the start of the step.
    pub surface_index: usize,
    pub from: StateId,
    /// Destination state; `None` for undefined steps.
    pub to: Option<StateId>,
}

/// Outcome of validating a tape pair.
#[derive(Debug, Clone)]
pub struct Validation {
    pub accepted: bool,
    /// State the walk ended in (for rejected walks, the state where the
    /// undefined transition was hit).
    pub end_state: StateId,
    pub steps: Vec<Step>,
}

/// Walk both tapes through the transducer and judge acceptance.
///
/// At each step the engine first tries an epenthesis transition (the
/// sentinel input against the current surface symbol), then an ordinary
/// transition, then a deletion transition (the current underlying symbol
/// against the sentinel output). The first undefined position rejects
/// immediately; there is no backtracking.
///
/// The loop is bounded by the underlying tape: epenthesis advances only the
/// surface cursor, but the surface tape is finite too, so the walk cannot
/// stall. Once the underlying tape is exhausted the pair is accepted iff
/// the current state is final; leftover surface symbols are ignored.
pub fn validate(fst: &Transducer, underlying: &[char], surface: &[char]) -> Validation {
    let mut state: StateId = 0;
    let mut steps = Vec::new();
    let mut u = 0;
    let mut s = 0;

    while u < underlying.len() {
        if s < surface.len() {
            if let Some(to) = fst.step(ZERO, state, surface[s]) {
                steps.push(Step {
                    kind: StepKind::Epenthesis,
                    underlying_index: u,
                    surface_index: s,
                    from: state,
                    to: Some(to),
                });
                s += 1;
                state = to;
                continue;
            }
            if let Some(to) = fst.step(underlying[u], state, surface[s]) {
                steps.push(Step {
                    kind: StepKind::Match,
                    underlying_index: u,
                    surface_index: s,
                    from: state,
                    to: Some(to),
                });
                u += 1;
                s += 1;
                state = to;
                continue;
            }
        }
        if let Some(to) = fst.step(underlying[u], state, ZERO) {
            steps.push(Step {
                kind: StepKind::Deletion,
                underlying_index: u,
                surface_index: s,
                from: state,
                to: Some(to),
            });
            u += 1;
            state = to;
            continue;
        }

        steps.push(Step {
            kind: StepKind::Undefined,
            underlying_index: u,
            surface_index: s,
            from: state,
            to: None,
        });
        return Validation {
            accepted: false,
            end_state: state,
            steps,
        };
    }

    Validation {
        accepted: fst.is_final(state),
        end_state: state,
        steps,
    }
}
