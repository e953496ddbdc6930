//! Ordered pattern-to-template rules for line conversion.

use regex::Regex;
use thiserror::Error;

/// A single line-shape translation: a regex pattern with capture groups and
/// an output template referencing those groups as `$1`, `$2`, ...
///
/// Patterns are compiled anchored to the start of the line body, so a rule
/// matches a line prefix; trailing text after the match is left in place.
/// Rules are immutable once constructed.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    pattern: Regex,
    raw_pattern: String,
    template: String,
}

impl Rule {
    /// Compile a rule from a pattern and template
    ///
    /// The pattern is wrapped in `^(?:...)` before compilation. The
    /// non-capturing group keeps user-visible group numbering intact.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        template: impl Into<String>,
    ) -> Result<Self, RulesetError> {
        let name = name.into();
        let raw_pattern = pattern.into();
        let anchored = format!("^(?:{})", raw_pattern);
        let compiled = Regex::new(&anchored).map_err(|e| RulesetError::InvalidPattern {
            name: name.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            name,
            pattern: compiled,
            raw_pattern,
            template: template.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The pattern as written, without the anchoring wrapper
    pub fn pattern(&self) -> &str {
        &self.raw_pattern
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether this rule matches the start of the given line body
    pub fn matches(&self, body: &str) -> bool {
        self.pattern.is_match(body)
    }

    /// Rewrite the matched prefix of `body` using the template
    ///
    /// Text after the matched prefix is preserved verbatim.
    pub fn apply(&self, body: &str) -> String {
        self.pattern.replace(body, self.template.as_str()).into_owned()
    }
}

/// The fixed, ordered collection of rules
///
/// Traversal order is part of the contract: the first rule that matches a
/// line wins, so more specific shapes must come before the generic
/// fallbacks they share a prefix with (`if x is greater than y then` must
/// hit the comparison rule, not the generic `if ... then`).
#[derive(Debug, Clone)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

/// Built-in rule table in priority order. Order is load-bearing:
/// function-with-params before function, list assignment before plain
/// assignment, the three comparison forms before the generic if.
const BUILTIN_RULES: &[(&str, &str, &str)] = &[
    (
        "function-with-params",
        r"create a function called (\w+) with parameter (.*)",
        r"def $1($2):",
    ),
    ("function", r"create a function called (\w+)", r"def $1():"),
    ("list-assignment", r"set (\w+) to list of (.*)", r"$1 = [$2]"),
    ("assignment", r"set (\w+) to (.*)", r"$1 = $2"),
    ("for-each", r"for each (\w+) in (\w+)", r"for $1 in $2:"),
    ("if-greater-than", r"if (.*) is greater than (.*) then", r"if $1 > $2:"),
    ("if-less-than", r"if (.*) is less than (.*) then", r"if $1 < $2:"),
    ("if-equal-to", r"if (.*) is equal to (.*) then", r"if $1 == $2:"),
    ("if-generic", r"if (.*) then", r"if $1:"),
    ("otherwise", r"otherwise", r"else:"),
    ("print", r"print (.*)", r"print($1)"),
    ("return", r"return (.*)", r"return $1"),
];

impl Ruleset {
    /// Create a ruleset from an explicit ordered list of rules
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The built-in pseudocode grammar
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .map(|(name, pattern, template)| {
                Rule::new(*name, *pattern, *template).expect("builtin rule pattern is valid")
            })
            .collect();
        Self { rules }
    }

    /// First rule that matches the given line body, in priority order
    pub fn find_match(&self, body: &str) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(body))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Errors related to rule construction
#[derive(Error, Debug)]
pub enum RulesetError {
    #[error("Invalid pattern in rule '{name}': {message}")]
    InvalidPattern { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_new_valid_pattern() {
        let rule = Rule::new("test", r"say (\w+)", r"speak($1)").unwrap();
        assert_eq!(rule.name(), "test");
        assert_eq!(rule.pattern(), r"say (\w+)");
        assert_eq!(rule.template(), r"speak($1)");
    }

    #[test]
    fn test_rule_new_invalid_pattern() {
        let result = Rule::new("broken", r"say (\w+", r"speak($1)");
        match result {
            Err(RulesetError::InvalidPattern { name, .. }) => assert_eq!(name, "broken"),
            _ => panic!("Expected InvalidPattern"),
        }
    }

    #[test]
    fn test_rule_matches_prefix_only() {
        let rule = Rule::new("for-each", r"for each (\w+) in (\w+)", r"for $1 in $2:").unwrap();
        assert!(rule.matches("for each x in items"));
        assert!(rule.matches("for each x in items with extra text"));
        assert!(!rule.matches("loop for each x in items"));
    }

    #[test]
    fn test_rule_apply_preserves_trailing_text() {
        let rule = Rule::new("for-each", r"for each (\w+) in (\w+)", r"for $1 in $2:").unwrap();
        assert_eq!(rule.apply("for each x in items"), "for x in items:");
        assert_eq!(rule.apply("for each x in items trailing"), "for x in items: trailing");
    }

    #[test]
    fn test_anchoring_does_not_shift_group_numbers() {
        // The ^(?:...) wrapper must not renumber user capture groups
        let rule = Rule::new("assignment", r"set (\w+) to (.*)", r"$1 = $2").unwrap();
        assert_eq!(rule.apply("set total to 0"), "total = 0");
    }

    #[test]
    fn test_builtin_ruleset_order() {
        let ruleset = Ruleset::builtin();
        assert_eq!(ruleset.len(), 12);

        let names: Vec<&str> = ruleset.iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec![
                "function-with-params",
                "function",
                "list-assignment",
                "assignment",
                "for-each",
                "if-greater-than",
                "if-less-than",
                "if-equal-to",
                "if-generic",
                "otherwise",
                "print",
                "return",
            ]
        );
    }

    #[test]
    fn test_find_match_first_wins() {
        let ruleset = Ruleset::builtin();

        // Comparison form must beat the generic if rule that also matches
        let rule = ruleset.find_match("if x is greater than y then").unwrap();
        assert_eq!(rule.name(), "if-greater-than");

        // List assignment must beat plain assignment
        let rule = ruleset.find_match("set mylist to list of 1, 2, 3").unwrap();
        assert_eq!(rule.name(), "list-assignment");
    }

    #[test]
    fn test_find_match_none() {
        let ruleset = Ruleset::builtin();
        assert!(ruleset.find_match("do something weird").is_none());
    }

    #[test]
    fn test_empty_ruleset() {
        let ruleset = Ruleset::new(Vec::new());
        assert!(ruleset.is_empty());
        assert!(ruleset.find_match("set x to 5").is_none());
    }
}
