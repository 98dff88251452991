//! Shared types for the sandhi phonological alternation checker.
//!
//! This crate holds the data model that both the FST engine and the
//! command-line front end depend on: the [`PhonRule`] type, its text-syntax
//! parser, and the [`ZERO`] insertion/deletion sentinel.

pub mod rule;

pub use rule::{PhonRule, ZERO};

/// Error type for rule parsing.
///
/// A rule that does not split into exactly one input symbol, one output
/// symbol and a prefix/suffix environment fails to parse. Parsing never
/// proceeds with truncated fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("missing '{0}' delimiter in rule")]
    MissingDelimiter(char),
    #[error("rule {field} \"{text}\" is not a single symbol")]
    NotSingleSymbol {
        field: &'static str,
        text: String,
    },
}
