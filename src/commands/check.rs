use std::path::PathBuf;

use crate::error::Result;
use crate::models::{ConversionReport, LineOutcome};

use super::convert::{load_converter, read_source};

/// Options for the check command
pub struct CheckOptions {
    pub input: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub no_builtin_rules: bool,
    /// Emit the report as JSON instead of the text summary
    pub json: bool,
}

/// Report which rule fires on each line of a pseudocode source
///
/// Pass-through lines are not failures: the converter deliberately cannot
/// tell "invalid pseudocode" from "a shape no rule covers yet", so the
/// check always exits 0 and only reports coverage.
pub fn check_source(project_root: &PathBuf, options: CheckOptions) -> Result<()> {
    let converter = load_converter(project_root, options.config.as_ref(), options.no_builtin_rules)?;
    let source = read_source(options.input.as_ref())?;

    let report = converter.annotate_program(&source);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

/// Print conversion report
pub fn print_report(report: &ConversionReport) {
    println!("=== Conversion Report ===\n");

    for line in &report.lines {
        match &line.outcome {
            LineOutcome::Converted { rule } => {
                println!("{:>4} [{}] {}", line.line_number, rule, line.output);
            }
            LineOutcome::PassThrough => {
                println!("{:>4} [pass-through] {}", line.line_number, line.output);
            }
            LineOutcome::Blank => {
                println!("{:>4} [blank]", line.line_number);
            }
        }
    }

    println!(
        "\nSummary: {} lines, {} converted, {} passed through, {} blank",
        report.summary.total,
        report.summary.converted,
        report.summary.passed_through,
        report.summary.blank
    );

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
    }
}
