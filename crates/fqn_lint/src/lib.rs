//! Fully-qualified global function rule for PHP token streams.
//!
//! Flags calls to PHP's global functions that are not written with a
//! leading `\` and, when the host asks for it, rewrites them in place:
//!
//! ```text
//! strlen($s)   =>   \strlen($s)
//! ```
//!
//! A fully qualified call skips the namespace fallback lookup at runtime,
//! and for a fixed set of functions lets the engine compile the call into
//! a dedicated opcode.
//!
//! # Pipeline
//!
//! token stream → [`context`] (nearest significant neighbors) →
//! [`classify`] (is this a global call?) → [`builtins`] (is it a registry
//! function?) → [`checker`] (report) → [`fixer`] (rewrite).

pub mod builtins;
pub mod checker;
pub mod classify;
pub mod config;
pub mod context;
pub mod fixer;

use std::sync::Once;

use fqn_diagnostic::ErrorCode;

pub use builtins::{BuiltinRegistry, BuiltinSource, BundledBuiltins, RegistryMode};
pub use checker::{violation_message, FileReport, QualifierChecker};
pub use classify::{classify, CallSite};
pub use config::{
    parse_permissive_bool, ConfigError, LayeredProperties, OptimizedOnly, PropertySource,
    RulesetProperties, RuntimeOverrides,
};
pub use fixer::{
    compute_fix, CollectingSink, DiagnosticSink, FixError, FixMode, Fixer, TokenRewriter,
    Violation,
};

/// Identifier under which ruleset properties for this rule are declared.
pub const RULE_ID: &str = ErrorCode::W0001.rule_name();

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing unless `RUST_LOG` is set; safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
