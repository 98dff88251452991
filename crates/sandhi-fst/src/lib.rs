//! Finite state transducer engine for phonological alternation rules.
//!
//! A [`PhonRule`](sandhi_core::PhonRule) is compiled into a two-tape
//! transducer whose edges encode the rule's environment, and a pair of
//! tapes (underlying form, surface form) is then validated against it by
//! a synchronous walk.
//!
//! # Architecture
//!
//! - [`transducer`] -- states, alphabets and the transition relation
//! - [`compile`] -- turning a parsed rule into a transducer graph
//! - [`engine`] -- two-tape validation with a per-step trace
//!
//! Compilation is the only fallible stage. Validation never fails: an
//! underlying/surface pair that does not fit the rule is reported through
//! the returned [`Validation`](engine::Validation), not through an error.

pub mod compile;
pub mod engine;
pub mod transducer;

pub use compile::{BuiltEdge, CompiledRule, compile_rule};
pub use engine::{Step, StepKind, Validation, validate};
pub use transducer::{StateId, Transducer};

/// Error type for transducer construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FstError {
    /// A declared initial or final state is not a member of the state set.
    #[error("{which} state {state} is not a member of the declared state set")]
    SubsetViolation {
        which: &'static str,
        state: StateId,
    },
    /// A prefix or suffix symbol is missing from one of the alphabets.
    /// Context symbols are matched identically on both tapes, so they must
    /// be members of both.
    #[error("context symbol '{symbol}' is not in both alphabets")]
    UnknownContextSymbol { symbol: char },
    /// The rule's input or output symbol is missing from its alphabet.
    #[error("rule {which} symbol '{symbol}' is not in the {which} alphabet")]
    SymbolNotInAlphabet {
        which: &'static str,
        symbol: char,
    },
}
