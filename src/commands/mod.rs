pub mod check;
pub mod convert;
pub mod rules;

pub use check::*;
pub use convert::*;
pub use rules::*;
