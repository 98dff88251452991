// sandhi-cli: shared utilities for the command-line tools.

use std::process;

use sandhi_core::ZERO;
use sandhi_fst::{Step, StepKind};

/// Default tape alphabet used when `--alphabet` is not given.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Parse a `--flag VALUE`, `--flag=VALUE` or `-f VALUE` argument.
///
/// Returns `(value, remaining_args)`.
pub fn parse_value_flag(args: &[String], long: &str, short: &str) -> (Option<String>, Vec<String>) {
    let prefix = format!("{long}=");
    let mut value = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if let Some(val) = arg.strip_prefix(&prefix) {
            value = Some(val.to_string());
        } else if arg == long || arg == short {
            if i + 1 < args.len() {
                value = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                eprintln!("error: {arg} requires a value");
                process::exit(1);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (value, remaining)
}

/// Render one validation step as a trace line.
pub fn format_step(step: &Step, underlying: &[char], surface: &[char]) -> String {
    let u = step.underlying_index;
    let s = step.surface_index;
    match (step.kind, step.to) {
        (StepKind::Match, Some(to)) => {
            format!(
                "{}/{} takes state {} -> {}",
                underlying[u], surface[s], step.from, to
            )
        }
        (StepKind::Epenthesis, Some(to)) => {
            format!(
                "{ZERO}/{} takes state {} -> {} (epenthesis)",
                surface[s], step.from, to
            )
        }
        (StepKind::Deletion, Some(to)) => {
            format!(
                "{}/{ZERO} takes state {} -> {} (deletion)",
                underlying[u], step.from, to
            )
        }
        _ => {
            let surface_sym = surface
                .get(s)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "<end>".to_string());
            format!(
                "undefined transition in state {} at underlying[{u}] = {} / surface[{s}] = {}",
                step.from, underlying[u], surface_sym
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sandhi_fst::Step;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_long_flag_with_space() {
        let (value, rest) = parse_value_flag(&args(&["--rule", "a>b/_", "x"]), "--rule", "-r");
        assert_eq!(value.as_deref(), Some("a>b/_"));
        assert_eq!(rest, args(&["x"]));
    }

    #[test]
    fn parse_long_flag_with_equals() {
        let (value, rest) = parse_value_flag(&args(&["--rule=a>b/_"]), "--rule", "-r");
        assert_eq!(value.as_deref(), Some("a>b/_"));
        assert!(rest.is_empty());
    }

    #[test]
    fn parse_short_flag() {
        let (value, _) = parse_value_flag(&args(&["-r", "a>b/_"]), "--rule", "-r");
        assert_eq!(value.as_deref(), Some("a>b/_"));
    }

    #[test]
    fn absent_flag_leaves_args_untouched() {
        let (value, rest) = parse_value_flag(&args(&["foo", "bar"]), "--rule", "-r");
        assert_eq!(value, None);
        assert_eq!(rest, args(&["foo", "bar"]));
    }

    #[test]
    fn format_match_step() {
        let step = Step {
            kind: StepKind::Match,
            underlying_index: 0,
            surface_index: 0,
            from: 0,
            to: Some(1),
        };
        assert_eq!(
            format_step(&step, &['c'], &['c']),
            "c/c takes state 0 -> 1"
        );
    }

    #[test]
    fn format_undefined_step_past_surface_end() {
        let step = Step {
            kind: StepKind::Undefined,
            underlying_index: 1,
            surface_index: 1,
            from: 2,
            to: None,
        };
        let line = format_step(&step, &['a', 'b'], &['a']);
        assert!(line.contains("undefined transition"));
        assert!(line.contains("<end>"));
    }
}
