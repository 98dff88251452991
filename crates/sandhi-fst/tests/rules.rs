//! End-to-end tests: parse a rule, compile it, validate tape pairs.

use sandhi_core::PhonRule;
use sandhi_fst::{StepKind, compile_rule, validate};

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

fn check(rule: &str, underlying: &str, surface: &str) -> bool {
    let rule = PhonRule::parse(rule).unwrap();
    let compiled = compile_rule(ALPHABET, ALPHABET, &rule).unwrap();
    let underlying: Vec<char> = underlying.chars().collect();
    let surface: Vec<char> = surface.chars().collect();
    validate(&compiled.fst, &underlying, &surface).accepted
}

#[test]
fn context_free_alternation_is_mandatory() {
    assert!(check("a>b/_", "a", "b"));
    assert!(!check("a>b/_", "a", "a"));
}

#[test]
fn alternation_inside_context() {
    assert!(check("a>b/c_d", "cad", "cbd"));
    assert!(!check("a>b/c_d", "cad", "cad"));
    assert!(!check("a>b/c_d", "ad", "bd"));
}

#[test]
fn alternation_embedded_in_longer_word() {
    assert!(check("a>b/c_d", "xcady", "xcbdy"));
    assert!(!check("a>b/c_d", "xcady", "xcady"));
}

#[test]
fn unrelated_words_pass_through() {
    assert!(check("a>b/c_d", "dog", "dog"));
    assert!(!check("a>b/c_d", "dog", "dig"));
}

#[test]
fn tape_ending_mid_context_is_accepted() {
    // The prefix chain states are final: a word that ends inside the
    // environment never required the alternation.
    assert!(check("a>b/c_d", "c", "c"));
    assert!(check("a>b/c_d", "xc", "xc"));
}

#[test]
fn tape_ending_right_after_alternation_rejects() {
    // The alternation applied but its right context never arrived.
    assert!(!check("a>b/c_d", "ca", "cb"));
}

#[test]
fn overlapping_prefix_contexts() {
    assert!(check("b>p/aa_", "aab", "aap"));
    assert!(!check("b>p/aa_", "aab", "aab"));
    assert!(!check("b>p/aa_", "ab", "ap"));
    // A third 'a' re-enters the chain at one matched symbol, so the
    // environment is not complete at the following 'b'.
    assert!(check("b>p/aa_", "aaab", "aaab"));
    assert!(!check("b>p/aa_", "aaab", "aaap"));
}

#[test]
fn insertion_rule_scenarios() {
    assert!(check("0>e/st_r", "str", "ster"));
    assert!(!check("0>e/st_r", "str", "str"));
    assert!(!check("0>e/st_r", "str", "stur"));
}

#[test]
fn insertion_divergence_with_two_symbol_suffix() {
    assert!(check("0>e/st_ra", "stra", "stera"));
    // Completing the environment without the insertion is never accepted.
    assert!(!check("0>e/st_ra", "stra", "stra"));
    // Running out of tape one symbol before the suffix completes is not an
    // environment violation.
    assert!(check("0>e/st_ra", "str", "str"));
    // Diverging from the suffix means no insertion was ever required.
    assert!(check("0>e/st_ra", "strut", "strut"));
}

#[test]
fn deletion_rule_scenarios() {
    assert!(check("e>0/st_r", "ster", "str"));
    assert!(!check("e>0/st_r", "ster", "ster"));
    assert!(check("e>0/st_r", "stop", "stop"));
}

#[test]
fn mismatched_tape_lengths_terminate() {
    assert!(!check("a>b/c_d", "cad", "c"));
    assert!(check("a>b/c_d", "cad", "cbdzz")); // leftover surface is ignored
    assert!(!check("a>b/c_d", "cadcad", "cbd"));
}

#[test]
fn compiling_twice_accepts_the_same_pairs() {
    let rule = PhonRule::parse("0>e/st_ra").unwrap();
    let one = compile_rule(ALPHABET, ALPHABET, &rule).unwrap();
    let two = compile_rule(ALPHABET, ALPHABET, &rule).unwrap();

    let pairs = [
        ("stra", "stera"),
        ("stra", "stra"),
        ("str", "str"),
        ("strut", "strut"),
        ("sat", "sat"),
        ("", ""),
    ];
    for (u, s) in pairs {
        let u: Vec<char> = u.chars().collect();
        let s: Vec<char> = s.chars().collect();
        assert_eq!(
            validate(&one.fst, &u, &s).accepted,
            validate(&two.fst, &u, &s).accepted,
        );
    }
}

#[test]
fn every_state_has_default_routing() {
    // For a non-insertion rule, every (state, symbol) pair except the
    // mandatory alternation slot has some outgoing edge, and symbols with
    // no explicit identity edge fall back to state 0 or 1.
    let rule = PhonRule::parse("a>b/c_d").unwrap();
    let compiled = compile_rule(ALPHABET, ALPHABET, &rule).unwrap();
    let fst = &compiled.fst;

    let explicit: Vec<_> = compiled
        .built
        .iter()
        .map(|e| (e.from, e.input))
        .collect();

    for &state in fst.states() {
        for &sym in fst.input_alphabet() {
            if explicit.contains(&(state, sym)) {
                continue;
            }
            let to = fst.step(sym, state, sym);
            assert!(
                to == Some(0) || to == Some(1),
                "no default routing for '{sym}' at state {state}"
            );
        }
    }
}

#[test]
fn rejection_trace_pinpoints_the_failure() {
    let rule = PhonRule::parse("a>b/c_d").unwrap();
    let compiled = compile_rule(ALPHABET, ALPHABET, &rule).unwrap();

    let underlying: Vec<char> = "cad".chars().collect();
    let surface: Vec<char> = "cad".chars().collect();
    let result = validate(&compiled.fst, &underlying, &surface);

    assert!(!result.accepted);
    let last = result.steps.last().unwrap();
    assert_eq!(last.kind, StepKind::Undefined);
    assert_eq!(last.underlying_index, 1);
    assert_eq!(last.surface_index, 1);
}
