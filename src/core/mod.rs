pub mod converter;
pub mod ruleset;

pub use converter::*;
pub use ruleset::*;
