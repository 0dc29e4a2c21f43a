//! Error codes for rule diagnostics.

use std::fmt;

/// Error codes for all rule diagnostics.
///
/// Format: letter + four digits. `W` codes are warnings that never block a
/// run on their own.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Call to a global function without a leading namespace separator
    W0001,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "W0001",
        }
    }

    /// The rule identifier a host uses when it groups violations by sniff.
    pub const fn rule_name(&self) -> &'static str {
        match self {
            ErrorCode::W0001 => "FullyQualifiedGlobalFunctions",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
