//! Line-by-line pseudocode-to-Python conversion.

use tracing::debug;

use super::Ruleset;
use crate::models::{ConversionReport, LineOutcome, LineReport};

/// Regex-rule line converter
///
/// Holds an immutable ruleset and converts lines independently of each
/// other. There is no cross-line state: no block tracking, no bracket
/// balancing. Conversion is a total function over all text input; a line no
/// rule matches passes through unchanged. The converter never mutates its
/// ruleset, so one instance is safe to share across threads.
pub struct Converter {
    ruleset: Ruleset,
}

impl Converter {
    /// Create a converter over an explicit ruleset
    pub fn new(ruleset: Ruleset) -> Self {
        Self { ruleset }
    }

    pub fn ruleset(&self) -> &Ruleset {
        &self.ruleset
    }

    /// Convert a single line of pseudocode
    ///
    /// Leading whitespace is preserved verbatim on the output. A blank or
    /// whitespace-only line collapses to an empty string (indentation of
    /// blank lines carries no information and is dropped).
    pub fn convert_line(&self, line: &str) -> String {
        let (output, _) = self.classify_line(line);
        output
    }

    /// Convert a whole pseudocode program
    ///
    /// Splits on `\n`, converts each line independently, and rejoins with
    /// `\n` (line endings are normalized; a stray `\r` is trimmed away with
    /// the rest of the body whitespace). Output line count always equals
    /// input line count.
    pub fn convert_program(&self, source: &str) -> String {
        source
            .split('\n')
            .map(|line| self.convert_line(line))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Convert a program and report which rule fired on each line
    pub fn annotate_program(&self, source: &str) -> ConversionReport {
        let lines = source
            .split('\n')
            .enumerate()
            .map(|(i, line)| {
                let (output, outcome) = self.classify_line(line);
                LineReport {
                    line_number: i + 1,
                    input: line.to_string(),
                    output,
                    outcome,
                }
            })
            .collect();
        ConversionReport::new(lines)
    }

    fn classify_line(&self, line: &str) -> (String, LineOutcome) {
        let indent_len = line
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(line.len());
        let indent = &line[..indent_len];
        let body = line.trim();

        if body.is_empty() {
            return (String::new(), LineOutcome::Blank);
        }

        match self.ruleset.find_match(body) {
            Some(rule) => {
                debug!("Rule '{}' matched: {}", rule.name(), body);
                let converted = rule.apply(body);
                (
                    format!("{}{}", indent, converted),
                    LineOutcome::Converted {
                        rule: rule.name().to_string(),
                    },
                )
            }
            None => {
                debug!("No rule matched, passing through: {}", body);
                (format!("{}{}", indent, body), LineOutcome::PassThrough)
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(Ruleset::builtin())
    }
}
