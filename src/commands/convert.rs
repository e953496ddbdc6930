use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::core::Converter;
use crate::error::{PseudoPyError, Result};
use crate::models::Config;

/// Options for the convert command
pub struct ConvertOptions {
    /// Input file; stdin when None
    pub input: Option<PathBuf>,
    /// Output file; stdout when None
    pub output: Option<PathBuf>,
    /// Explicit config file instead of pseudopy.toml discovery
    pub config: Option<PathBuf>,
    /// Drop the built-in rule table, use config rules only
    pub no_builtin_rules: bool,
}

/// Build a converter from config discovery plus CLI overrides
pub fn load_converter(
    project_root: &PathBuf,
    config_path: Option<&PathBuf>,
    no_builtin_rules: bool,
) -> Result<Converter> {
    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_from_dir(project_root)?,
    };
    let config = config.with_overrides(no_builtin_rules);

    let ruleset = config.build_ruleset()?;
    debug!("Loaded ruleset with {} rules", ruleset.len());

    Ok(Converter::new(ruleset))
}

/// Read pseudocode source from a file or stdin
pub fn read_source(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => {
            if !path.exists() {
                return Err(PseudoPyError::InputFileNotFound(path.clone()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

/// Convert pseudocode to Python
pub fn convert_source(project_root: &PathBuf, options: ConvertOptions) -> Result<()> {
    let converter = load_converter(project_root, options.config.as_ref(), options.no_builtin_rules)?;
    let source = read_source(options.input.as_ref())?;

    let output = converter.convert_program(&source);

    match options.output {
        Some(path) => {
            std::fs::write(&path, &output).map_err(|e| PseudoPyError::OutputWrite(path.clone(), e))?;
            info!("Wrote {}", path.display());
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}
