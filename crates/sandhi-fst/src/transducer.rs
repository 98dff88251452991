// States, alphabets and the transition relation.

use hashbrown::{HashMap, HashSet};

use crate::FstError;

/// Opaque state identifier. State 0 is always the designated initial state
/// and always final: the neutral resting point between segments.
pub type StateId = u32;

/// A two-tape finite state transducer over single-character symbols.
///
/// The transition relation is a set of unique 4-tuples
/// `(input symbol, from state, to state, output symbol)`. It is stored
/// indexed by `(from state, input symbol)` so that the validation engine
/// resolves a step with one map lookup instead of scanning the state set.
/// The index does not enforce determinism beyond exact-tuple uniqueness:
/// two edges sharing `(input, from)` but differing in output or destination
/// coexist, and ambiguity is avoided by construction.
pub struct Transducer {
    states: HashSet<StateId>,
    initial_states: HashSet<StateId>,
    final_states: HashSet<StateId>,
    input_alphabet: HashSet<char>,
    output_alphabet: HashSet<char>,
    /// `(from, input)` -> candidate `(output, to)` pairs, in insertion order.
    edges: HashMap<(StateId, char), Vec<(char, StateId)>>,
}

impl Transducer {
    /// Create a transducer holding only state 0 (initial and final) and the
    /// given alphabets. Starting point for rule compilation.
    pub fn new(input_alphabet: &str, output_alphabet: &str) -> Self {
        let mut t = Self {
            states: HashSet::new(),
            initial_states: HashSet::new(),
            final_states: HashSet::new(),
            input_alphabet: input_alphabet.chars().collect(),
            output_alphabet: output_alphabet.chars().collect(),
            edges: HashMap::new(),
        };
        t.states.insert(0);
        t.initial_states.insert(0);
        t.final_states.insert(0);
        t
    }

    /// Build a transducer from explicit state lists ("synthetic" path, used
    /// for hand-specified automata in tests and fixtures).
    ///
    /// Fails with [`FstError::SubsetViolation`] if a declared initial or
    /// final state is not a member of the state set.
    pub fn from_parts(
        states: &[StateId],
        initial_states: &[StateId],
        final_states: &[StateId],
        input_alphabet: &str,
        output_alphabet: &str,
    ) -> Result<Self, FstError> {
        let state_set: HashSet<StateId> = states.iter().copied().collect();

        for &s in initial_states {
            if !state_set.contains(&s) {
                return Err(FstError::SubsetViolation {
                    which: "initial",
                    state: s,
                });
            }
        }
        for &s in final_states {
            if !state_set.contains(&s) {
                return Err(FstError::SubsetViolation {
                    which: "final",
                    state: s,
                });
            }
        }

        Ok(Self {
            states: state_set,
            initial_states: initial_states.iter().copied().collect(),
            final_states: final_states.iter().copied().collect(),
            input_alphabet: input_alphabet.chars().collect(),
            output_alphabet: output_alphabet.chars().collect(),
            edges: HashMap::new(),
        })
    }

    /// Add a state to the state set. Re-adding is a no-op.
    pub fn add_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    /// Mark a state as final.
    pub fn mark_final(&mut self, state: StateId) {
        self.final_states.insert(state);
    }

    /// Insert the edge `(input, from, to, output)` into the transition
    /// relation.
    ///
    /// The relation has mathematical-set semantics: inserting an exact
    /// duplicate tuple is a no-op and returns `false`.
    pub fn insert_edge(&mut self, input: char, from: StateId, to: StateId, output: char) -> bool {
        let candidates = self.edges.entry((from, input)).or_default();
        if candidates.iter().any(|&(o, t)| o == output && t == to) {
            return false;
        }
        candidates.push((output, to));
        true
    }

    /// Resolve one step: the destination of an edge matching
    /// `(input, from, ?, output)`.
    ///
    /// If several edges match (a malformed, ambiguous transducer), the one
    /// inserted first wins; well-formed compiled transducers never have
    /// more than one.
    pub fn step(&self, input: char, from: StateId, output: char) -> Option<StateId> {
        self.edges
            .get(&(from, input))?
            .iter()
            .find(|&&(o, _)| o == output)
            .map(|&(_, to)| to)
    }

    /// True if any edge leaves `from` on the given input symbol.
    pub fn has_edge_on(&self, from: StateId, input: char) -> bool {
        self.edges.contains_key(&(from, input))
    }

    /// True if the state is in the final set.
    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(&state)
    }

    /// True if the state is in the initial set.
    pub fn is_initial(&self, state: StateId) -> bool {
        self.initial_states.contains(&state)
    }

    pub fn states(&self) -> &HashSet<StateId> {
        &self.states
    }

    pub fn final_states(&self) -> &HashSet<StateId> {
        &self.final_states
    }

    pub fn input_alphabet(&self) -> &HashSet<char> {
        &self.input_alphabet
    }

    pub fn output_alphabet(&self) -> &HashSet<char> {
        &self.output_alphabet
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// All edges as `(input, from, to, output)` tuples, in no particular
    /// order.
    pub fn edge_tuples(&self) -> Vec<(char, StateId, StateId, char)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (&(from, input), candidates) in &self.edges {
            for &(output, to) in candidates {
                out.push((input, from, to, output));
            }
        }
        out
    }
}

impl std::fmt::Debug for Transducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transducer")
            .field("state_count", &self.states.len())
            .field("final_count", &self.final_states.len())
            .field("edge_count", &self.edge_count())
            .finish()
    }
}
