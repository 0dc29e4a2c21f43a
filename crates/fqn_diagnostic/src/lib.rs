//! Diagnostic system for rule violations.
//!
//! Every violation the qualifier rule reports carries:
//! - An error code for searchability (`W0001`)
//! - A message naming the offending function
//! - A span at the identifier token
//! - A suggestion with the qualified replacement
//!
//! Replacements are applied to source text with [`fixes::apply_edits`].

mod diagnostic;
mod error_code;
pub mod fixes;

pub use diagnostic::{Diagnostic, Suggestion};
pub use error_code::ErrorCode;
