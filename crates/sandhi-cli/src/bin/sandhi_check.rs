// sandhi-check: validate underlying/surface tape pairs against one rule.
//
// Reads one phonological rule (from --rule or the first stdin line), builds
// its transducer, then reads pairs of lines from stdin -- an underlying
// form followed by a surface form -- and prints the validation trace and
// verdict for each pair. Runs until end-of-input.
//
// Usage:
//   sandhi-check [OPTIONS]
//
// Options:
//   -r, --rule RULE        Rule text, e.g. "a>b/c_d" or "0>e/st_r"
//   -a, --alphabet SYMS    Tape alphabet (default: abcdefghijklmnopqrstuvwxyz)
//   -h, --help             Print help

use std::io::{self, BufRead};

use sandhi_core::PhonRule;
use sandhi_fst::validate;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (rule_text, args) = sandhi_cli::parse_value_flag(&args, "--rule", "-r");
    let (alphabet, args) = sandhi_cli::parse_value_flag(&args, "--alphabet", "-a");

    if sandhi_cli::wants_help(&args) {
        println!("sandhi-check: validate tape pairs against a phonological rule.");
        println!();
        println!("Usage: sandhi-check [OPTIONS]");
        println!();
        println!("The rule syntax is input>output/prefix_suffix, where '0' as the");
        println!("input means insertion and '0' as the output means deletion.");
        println!("After the rule is read, stdin is consumed in pairs of lines:");
        println!("an underlying form followed by a surface form.");
        println!();
        println!("Options:");
        println!("  -r, --rule RULE        Rule text (prompted for if absent)");
        println!("  -a, --alphabet SYMS    Tape alphabet (default: a-z)");
        println!("  -h, --help             Print this help");
        return;
    }

    let alphabet = alphabet.unwrap_or_else(|| sandhi_cli::DEFAULT_ALPHABET.to_string());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let rule_text = match rule_text {
        Some(text) => text,
        None => {
            println!("Enter a phonological rule (input>output/prefix_suffix):");
            match lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => sandhi_cli::fatal(&format!("reading stdin: {e}")),
                None => return,
            }
        }
    };

    let rule = match PhonRule::parse(&rule_text) {
        Ok(rule) => rule,
        Err(e) => sandhi_cli::fatal(&e.to_string()),
    };
    println!("rule: {rule}");

    let compiled = match sandhi_fst::compile_rule(&alphabet, &alphabet, &rule) {
        Ok(compiled) => compiled,
        Err(e) => sandhi_cli::fatal(&e.to_string()),
    };
    println!(
        "built transducer: {} states, {} edges",
        compiled.fst.state_count(),
        compiled.fst.edge_count()
    );
    for edge in &compiled.built {
        println!("  {edge}");
    }

    println!();
    println!("Enter an underlying form followed by a surface form:");

    loop {
        let underlying = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => sandhi_cli::fatal(&format!("reading stdin: {e}")),
            None => break,
        };
        let surface = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => sandhi_cli::fatal(&format!("reading stdin: {e}")),
            None => break,
        };

        let underlying: Vec<char> = underlying.trim().chars().collect();
        let surface: Vec<char> = surface.trim().chars().collect();

        let result = validate(&compiled.fst, &underlying, &surface);
        for step in &result.steps {
            println!("  {}", sandhi_cli::format_step(step, &underlying, &surface));
        }
        println!(
            "{} (ended in state {})",
            if result.accepted { "valid" } else { "invalid" },
            result.end_state
        );
    }
}
