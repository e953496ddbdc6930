use std::path::PathBuf;

use crate::error::Result;

use super::convert::load_converter;

/// Print the active ruleset in priority order
///
/// First match wins, so the printed order is the tie-break order.
pub fn show_rules(
    project_root: &PathBuf,
    config: Option<&PathBuf>,
    no_builtin_rules: bool,
) -> Result<()> {
    let converter = load_converter(project_root, config, no_builtin_rules)?;
    let ruleset = converter.ruleset();

    println!("=== Active Rules ({}) ===\n", ruleset.len());

    if ruleset.is_empty() {
        println!("No rules configured");
        return Ok(());
    }

    for (i, rule) in ruleset.iter().enumerate() {
        println!("{:>4}. {}", i + 1, rule.name());
        println!("      pattern:  {}", rule.pattern());
        println!("      template: {}", rule.template());
    }

    Ok(())
}
