// Rule compilation: building the transducer graph from a parsed rule.
//
// The compiled graph is a chain: state 0 is neutral, the prefix walks the
// chain forward one state per context symbol, the alternation edge is the
// single place where the tapes may differ, and the suffix walks back to 0.
// Default identity edges make every other symbol either restart the prefix
// chain or reset to neutral.

use sandhi_core::{PhonRule, ZERO};

use crate::FstError;
use crate::transducer::{StateId, Transducer};

/// One explicitly constructed (non-default) edge, recorded in construction
/// order for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltEdge {
    pub input: char,
    pub from: StateId,
    pub to: StateId,
    pub output: char,
}

impl std::fmt::Display for BuiltEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "edge {} -> {} on {}/{}",
            self.from, self.to, self.input, self.output
        )
    }
}

/// Result of compiling a rule: the transducer plus the record of every
/// non-default edge.
#[derive(Debug)]
pub struct CompiledRule {
    pub fst: Transducer,
    pub built: Vec<BuiltEdge>,
}

/// Compile a phonological rule into a transducer over the given alphabets.
///
/// Context symbols must be members of both alphabets (identity edges match
/// them on both tapes), a non-sentinel rule input must be in the input
/// alphabet and a non-sentinel rule output in the output alphabet.
pub fn compile_rule(
    input_alphabet: &str,
    output_alphabet: &str,
    rule: &PhonRule,
) -> Result<CompiledRule, FstError> {
    let fst = Transducer::new(input_alphabet, output_alphabet);
    check_preconditions(&fst, rule)?;

    let mut builder = Builder {
        fst,
        built: Vec::new(),
        blocked: Vec::new(),
        next_state: 1,
        prefix_first: rule.prefix().first().copied(),
    };
    builder.run(rule);

    Ok(CompiledRule {
        fst: builder.fst,
        built: builder.built,
    })
}

fn check_preconditions(fst: &Transducer, rule: &PhonRule) -> Result<(), FstError> {
    for &c in rule.prefix().iter().chain(rule.suffix()) {
        if !fst.input_alphabet().contains(&c) || !fst.output_alphabet().contains(&c) {
            return Err(FstError::UnknownContextSymbol { symbol: c });
        }
    }
    if rule.input() != ZERO && !fst.input_alphabet().contains(&rule.input()) {
        return Err(FstError::SymbolNotInAlphabet {
            which: "input",
            symbol: rule.input(),
        });
    }
    if rule.output() != ZERO && !fst.output_alphabet().contains(&rule.output()) {
        return Err(FstError::SymbolNotInAlphabet {
            which: "output",
            symbol: rule.output(),
        });
    }
    Ok(())
}

struct Builder {
    fst: Transducer,
    built: Vec<BuiltEdge>,
    /// `(state, symbol)` pairs the default pass must leave without an
    /// identity fallback.
    blocked: Vec<(StateId, char)>,
    next_state: StateId,
    prefix_first: Option<char>,
}

impl Builder {
    fn run(&mut self, rule: &PhonRule) {
        // Prefix chain: one state per context symbol, each final so a tape
        // may end mid-context.
        let mut cur: StateId = 0;
        for &p in rule.prefix() {
            let next = self.alloc();
            self.fst.mark_final(next);
            self.edge(p, cur, next, p);
            cur = next;
        }

        match rule.suffix().split_last() {
            None => {
                // No right context: the alternation completes the
                // environment by itself and loops back to neutral.
                self.edge(rule.input(), cur, 0, rule.output());
            }
            Some((&last, body)) => {
                let target = self.alloc();
                self.edge(rule.input(), cur, target, rule.output());

                // Suffix chain. The last context symbol closes the
                // environment with an edge back to state 0; the
                // alternation-target state is not final because the
                // environment is still incomplete there.
                let mut chain = target;
                for &s in body {
                    let next = self.alloc();
                    self.fst.mark_final(next);
                    self.edge(s, chain, next, s);
                    chain = next;
                }
                self.edge(last, chain, 0, last);

                if rule.is_epenthesis() {
                    self.add_divergent_chain(cur, body, last);
                }
            }
        }

        self.add_default_edges();
    }

    /// Parallel chain for tapes that head into a mandatory-insertion
    /// environment without the insertion. Its states are final, so a tape
    /// that ends before the suffix completes is still accepted, but the
    /// suffix's last symbol has no edge out of the chain: actually
    /// completing the environment without the insertion strands the walk.
    fn add_divergent_chain(&mut self, from: StateId, body: &[char], last: char) {
        let mut div = from;
        for &s in body {
            let next = self.alloc();
            self.fst.mark_final(next);
            self.edge(s, div, next, s);
            div = next;
        }
        self.blocked.push((div, last));
    }

    /// Fallback pass, run once after every explicit edge exists: any
    /// alphabet symbol with no outgoing edge from a state gets an identity
    /// edge re-entering the prefix chain (if it equals the prefix's first
    /// symbol) or resetting to neutral. Because the alternation edge
    /// already occupies its `(state, symbol)` slot, the rule input gets no
    /// identity fallback at the alternation origin -- the alternation is
    /// mandatory there.
    fn add_default_edges(&mut self) {
        let mut states: Vec<StateId> = self.fst.states().iter().copied().collect();
        states.sort_unstable();
        let mut symbols: Vec<char> = self.fst.input_alphabet().iter().copied().collect();
        symbols.sort_unstable();

        for &state in &states {
            for &sym in &symbols {
                if self.fst.has_edge_on(state, sym) || self.blocked.contains(&(state, sym)) {
                    continue;
                }
                // An identity edge writes the symbol to the surface tape,
                // so the symbol must be in the output alphabet too.
                if !self.fst.output_alphabet().contains(&sym) {
                    continue;
                }
                let to = if self.prefix_first == Some(sym) { 1 } else { 0 };
                self.fst.insert_edge(sym, state, to, sym);
            }
        }
    }

    fn alloc(&mut self) -> StateId {
        let state = self.next_state;
        self.next_state += 1;
        self.fst.add_state(state);
        state
    }

    fn edge(&mut self, input: char, from: StateId, to: StateId, output: char) {
        self.fst.insert_edge(input, from, to, output);
        self.built.push(BuiltEdge {
            input,
            from,
            to,
            output,
        });
    }
}
