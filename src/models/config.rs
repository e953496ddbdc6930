use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::{Rule, Ruleset, RulesetError};

/// Configuration loaded from pseudopy.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub behavior: BehaviorConfig,
    /// Custom rules, applied in file order
    #[serde(default)]
    pub rules: Vec<CustomRule>,
}

/// Behavior configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Include the built-in rule table
    #[serde(default = "default_use_builtin_rules")]
    pub use_builtin_rules: bool,
    /// Where custom rules go relative to the built-in table
    #[serde(default)]
    pub custom_rules_position: CustomRulesPosition,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            use_builtin_rules: default_use_builtin_rules(),
            custom_rules_position: CustomRulesPosition::default(),
        }
    }
}

fn default_use_builtin_rules() -> bool {
    true
}

/// Priority of custom rules relative to the built-in table
///
/// `Before` lets a custom rule shadow a built-in shape; `After` only
/// catches lines the built-in table leaves untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CustomRulesPosition {
    Before,
    #[default]
    After,
}

/// A user-supplied rule from pseudopy.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomRule {
    pub name: String,
    /// Regex matched against the start of the line body
    pub pattern: String,
    /// Replacement template; `$1`, `$2`, ... reference capture groups
    pub template: String,
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::ParseError(path.clone(), e))
    }

    /// Try to load config from pseudopy.toml in the given directory
    pub fn load_from_dir(dir: &PathBuf) -> Result<Self, ConfigError> {
        let config_path = dir.join("pseudopy.toml");
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, no_builtin_rules: bool) -> Self {
        if no_builtin_rules {
            self.behavior.use_builtin_rules = false;
        }
        self
    }

    /// Compile the configured ruleset
    ///
    /// Custom rules are compiled in file order and placed before or after
    /// the built-in table per `custom_rules_position`. Within each block,
    /// first match wins.
    pub fn build_ruleset(&self) -> Result<Ruleset, RulesetError> {
        let custom: Vec<Rule> = self
            .rules
            .iter()
            .map(|r| Rule::new(&r.name, &r.pattern, &r.template))
            .collect::<Result<_, _>>()?;

        if !self.behavior.use_builtin_rules {
            return Ok(Ruleset::new(custom));
        }

        let builtin: Vec<Rule> = Ruleset::builtin().iter().cloned().collect();
        let rules = match self.behavior.custom_rules_position {
            CustomRulesPosition::Before => {
                let mut rules = custom;
                rules.extend(builtin);
                rules
            }
            CustomRulesPosition::After => {
                let mut rules = builtin;
                rules.extend(custom);
                rules
            }
        };

        Ok(Ruleset::new(rules))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
}
