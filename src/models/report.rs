use serde::Serialize;

/// How a single line was handled by the converter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum LineOutcome {
    /// A rule matched and rewrote the line
    Converted { rule: String },
    /// No rule matched; the line passed through unchanged
    PassThrough,
    /// Blank or whitespace-only input, emitted as an empty line
    Blank,
}

/// Per-line conversion record
#[derive(Debug, Clone, Serialize)]
pub struct LineReport {
    /// 1-based line number in the source
    pub line_number: usize,
    pub input: String,
    pub output: String,
    pub outcome: LineOutcome,
}

/// Aggregate counts over a conversion
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub converted: usize,
    pub passed_through: usize,
    pub blank: usize,
}

/// Full diagnostic report for one program conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub lines: Vec<LineReport>,
    pub summary: ReportSummary,
    pub warnings: Vec<String>,
}

impl ConversionReport {
    pub fn new(lines: Vec<LineReport>) -> Self {
        let mut summary = ReportSummary {
            total: lines.len(),
            ..Default::default()
        };

        for line in &lines {
            match line.outcome {
                LineOutcome::Converted { .. } => summary.converted += 1,
                LineOutcome::PassThrough => summary.passed_through += 1,
                LineOutcome::Blank => summary.blank += 1,
            }
        }

        let warnings = collect_warnings(&lines);

        Self {
            lines,
            summary,
            warnings,
        }
    }

    /// Joined converted output, same text `convert_program` would produce
    pub fn output(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Flag converted print statements that concatenate with `+`
///
/// The converter emits the operands verbatim. Python raises a TypeError
/// when a str is concatenated with a non-str, so these lines may need
/// explicit str() casts that the rule grammar does not insert.
fn collect_warnings(lines: &[LineReport]) -> Vec<String> {
    lines
        .iter()
        .filter(|l| matches!(l.outcome, LineOutcome::Converted { .. }))
        .filter(|l| l.output.trim_start().starts_with("print(") && l.output.contains('+'))
        .map(|l| {
            format!(
                "Line {}: print with '+' concatenation may need str() casts in Python: {}",
                l.line_number,
                l.output.trim()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn converted(line_number: usize, input: &str, output: &str, rule: &str) -> LineReport {
        LineReport {
            line_number,
            input: input.to_string(),
            output: output.to_string(),
            outcome: LineOutcome::Converted {
                rule: rule.to_string(),
            },
        }
    }

    #[test]
    fn test_summary_counts() {
        let report = ConversionReport::new(vec![
            converted(1, "set a to 1", "a = 1", "assignment"),
            LineReport {
                line_number: 2,
                input: "   ".to_string(),
                output: String::new(),
                outcome: LineOutcome::Blank,
            },
            LineReport {
                line_number: 3,
                input: "mystery".to_string(),
                output: "mystery".to_string(),
                outcome: LineOutcome::PassThrough,
            },
        ]);

        assert_eq!(report.summary.total, 3);
        assert_eq!(report.summary.converted, 1);
        assert_eq!(report.summary.passed_through, 1);
        assert_eq!(report.summary.blank, 1);
    }

    #[test]
    fn test_output_joins_lines() {
        let report = ConversionReport::new(vec![
            converted(1, "set a to 1", "a = 1", "assignment"),
            converted(2, "print a", "print(a)", "print"),
        ]);
        assert_eq!(report.output(), "a = 1\nprint(a)");
    }

    #[test]
    fn test_print_concat_warning() {
        let report = ConversionReport::new(vec![converted(
            1,
            r#"print "Score: " + score"#,
            r#"print("Score: " + score)"#,
            "print",
        )]);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Line 1"));
        assert!(report.warnings[0].contains("str()"));
    }

    #[test]
    fn test_no_warning_for_plain_print() {
        let report = ConversionReport::new(vec![converted(1, "print a", "print(a)", "print")]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_no_warning_for_pass_through_with_plus() {
        let report = ConversionReport::new(vec![LineReport {
            line_number: 1,
            input: "print(a + b)".to_string(),
            output: "print(a + b)".to_string(),
            outcome: LineOutcome::PassThrough,
        }]);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = LineOutcome::Converted {
            rule: "assignment".to_string(),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"converted\""));
        assert!(json.contains("\"assignment\""));

        let json = serde_json::to_string(&LineOutcome::PassThrough).unwrap();
        assert!(json.contains("\"pass_through\""));
    }

    #[test]
    fn test_report_serialization() {
        let report = ConversionReport::new(vec![converted(1, "set a to 1", "a = 1", "assignment")]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"lines\""));
        assert!(json.contains("\"summary\""));
        assert!(json.contains("\"warnings\""));
    }
}
