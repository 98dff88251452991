// sandhi-edges: dump the complete compiled graph for a rule.
//
// Shows every state, the final-state set, and the full edge list with
// default edges included -- the debugging view of what sandhi-check builds.
//
// Usage:
//   sandhi-edges -r RULE [-a SYMS]

use sandhi_core::PhonRule;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rule_text, args) = sandhi_cli::parse_value_flag(&args, "--rule", "-r");
    let (alphabet, args) = sandhi_cli::parse_value_flag(&args, "--alphabet", "-a");

    if sandhi_cli::wants_help(&args) || rule_text.is_none() {
        println!("sandhi-edges: dump the compiled transducer graph for a rule.");
        println!();
        println!("Usage: sandhi-edges -r RULE [-a SYMS]");
        println!();
        println!("Options:");
        println!("  -r, --rule RULE        Rule text, e.g. \"a>b/c_d\"");
        println!("  -a, --alphabet SYMS    Tape alphabet (default: a-z)");
        println!("  -h, --help             Print this help");
        return;
    }

    let alphabet = alphabet.unwrap_or_else(|| sandhi_cli::DEFAULT_ALPHABET.to_string());
    let rule_text = rule_text.unwrap_or_default();

    let rule = match PhonRule::parse(&rule_text) {
        Ok(rule) => rule,
        Err(e) => sandhi_cli::fatal(&e.to_string()),
    };
    println!("rule: {rule}");

    let compiled = match sandhi_fst::compile_rule(&alphabet, &alphabet, &rule) {
        Ok(compiled) => compiled,
        Err(e) => sandhi_cli::fatal(&e.to_string()),
    };
    let fst = &compiled.fst;

    let mut states: Vec<_> = fst.states().iter().copied().collect();
    states.sort_unstable();
    let mut finals: Vec<_> = fst.final_states().iter().copied().collect();
    finals.sort_unstable();

    println!("states: {states:?}");
    println!("final:  {finals:?}");

    let mut edges = fst.edge_tuples();
    edges.sort_unstable_by_key(|&(input, from, to, output)| (from, input, output, to));
    println!("edges ({}):", edges.len());
    for (input, from, to, output) in edges {
        println!("  {from} -> {to} on {input}/{output}");
    }
}
