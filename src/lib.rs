#![allow(dead_code)]
//! PseudoPy - regex-rule pseudocode-to-Python converter
//!
//! PseudoPy is a CLI tool that translates a small, English-like pseudocode
//! grammar into Python source text. Each input line is matched against an
//! ordered list of regex rules; the first matching rule rewrites the line,
//! unmatched lines pass through unchanged.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (convert, check, rules)
//! - **core**: Core functionality (converter, ruleset)
//! - **models**: Data structures (config, report)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use error::{PseudoPyError, Result};
