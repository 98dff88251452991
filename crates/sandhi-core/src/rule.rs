// Phonological rewrite rules and their text syntax.

use crate::RuleError;

/// Sentinel symbol standing for the empty string in a rule field.
///
/// As a rule's input it marks epenthesis (the output symbol is inserted on
/// the surface tape with no underlying correspondent); as a rule's output it
/// marks deletion. It is never a member of either alphabet.
pub const ZERO: char = '0';

/// A single phonological alternation rule, `input > output / prefix _ suffix`.
///
/// The rule rewrites one underlying symbol into one surface symbol, but only
/// when the symbol sits inside the prefix/suffix environment. Either context
/// may be empty. A rule is parsed once and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhonRule {
    input: char,
    output: char,
    prefix: Vec<char>,
    suffix: Vec<char>,
}

impl PhonRule {
    /// Build a rule from already-separated fields.
    pub fn new(input: char, output: char, prefix: &str, suffix: &str) -> Self {
        Self {
            input,
            output,
            prefix: prefix.chars().collect(),
            suffix: suffix.chars().collect(),
        }
    }

    /// Parse the `input>output/prefix_suffix` text syntax.
    ///
    /// All whitespace is stripped before splitting, so `a > b / c _ d` and
    /// `a>b/c_d` are the same rule. The input and output fields must each
    /// reduce to exactly one character.
    pub fn parse(text: &str) -> Result<Self, RuleError> {
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        let gt = stripped
            .find('>')
            .ok_or(RuleError::MissingDelimiter('>'))?;
        let slash = stripped[gt + 1..]
            .find('/')
            .map(|i| gt + 1 + i)
            .ok_or(RuleError::MissingDelimiter('/'))?;
        let underscore = stripped[slash + 1..]
            .find('_')
            .map(|i| slash + 1 + i)
            .ok_or(RuleError::MissingDelimiter('_'))?;

        let input = single_symbol(&stripped[..gt], "input")?;
        let output = single_symbol(&stripped[gt + 1..slash], "output")?;
        let prefix = stripped[slash + 1..underscore].chars().collect();
        let suffix = stripped[underscore + 1..].chars().collect();

        Ok(Self {
            input,
            output,
            prefix,
            suffix,
        })
    }

    /// The underlying symbol the rule consumes ([`ZERO`] for epenthesis).
    pub fn input(&self) -> char {
        self.input
    }

    /// The surface symbol the rule produces ([`ZERO`] for deletion).
    pub fn output(&self) -> char {
        self.output
    }

    /// Left context, possibly empty.
    pub fn prefix(&self) -> &[char] {
        &self.prefix
    }

    /// Right context, possibly empty.
    pub fn suffix(&self) -> &[char] {
        &self.suffix
    }

    /// True if the rule inserts its output with no underlying correspondent.
    pub fn is_epenthesis(&self) -> bool {
        self.input == ZERO
    }

    /// True if the rule deletes its input from the surface form.
    pub fn is_deletion(&self) -> bool {
        self.output == ZERO
    }
}

impl std::fmt::Display for PhonRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} > {} / ", self.input, self.output)?;
        for c in &self.prefix {
            write!(f, "{c}")?;
        }
        write!(f, "_")?;
        for c in &self.suffix {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Reduce a rule field to exactly one character.
fn single_symbol(text: &str, field: &'static str) -> Result<char, RuleError> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(RuleError::NotSingleSymbol {
            field,
            text: text.to_string(),
        }),
    }
}
