//! Builtin function registry.
//!
//! The set of global function names the rule treats as "must be qualified".
//! Two variants exist: the full set of the platform's internal functions,
//! supplied by a [`BuiltinSource`], and the curated list of functions the
//! PHP compiler and optimizer special-case when called fully qualified.

mod php_functions;

use rustc_hash::FxHashSet;

/// Functions the engine compiles to dedicated opcodes or evaluates at
/// compile time, but only when the call is resolved to the global
/// namespace (`zend_try_compile_special_func` and opcache pass 1).
pub const OPTIMIZED_FUNCTIONS: &[&str] = &[
    "array_key_exists",
    "array_slice",
    "assert",
    "boolval",
    "call_user_func",
    "call_user_func_array",
    "chr",
    "count",
    "defined",
    "doubleval",
    "floatval",
    "func_get_args",
    "func_num_args",
    "get_called_class",
    "get_class",
    "gettype",
    "in_array",
    "intval",
    "is_array",
    "is_bool",
    "is_double",
    "is_float",
    "is_int",
    "is_integer",
    "is_long",
    "is_null",
    "is_object",
    "is_real",
    "is_resource",
    "is_string",
    "ord",
    "strlen",
    "strval",
    // opcache
    "constant",
    "define",
    "dirname",
    "extension_loaded",
    "function_exists",
    "is_callable",
];

/// Supplier of the platform's builtin function names.
///
/// Names may arrive in any case; the registry lowercases them.
pub trait BuiltinSource {
    fn function_names(&self) -> Vec<String>;
}

/// Static list of PHP 8 internal functions for hosts that cannot ask a
/// live runtime.
#[derive(Copy, Clone, Debug, Default)]
pub struct BundledBuiltins;

impl BuiltinSource for BundledBuiltins {
    fn function_names(&self) -> Vec<String> {
        php_functions::PHP_INTERNAL_FUNCTIONS
            .iter()
            .map(|name| (*name).to_string())
            .collect()
    }
}

impl BuiltinSource for &[&str] {
    fn function_names(&self) -> Vec<String> {
        self.iter().map(|name| (*name).to_string()).collect()
    }
}

impl BuiltinSource for Vec<String> {
    fn function_names(&self) -> Vec<String> {
        self.clone()
    }
}

/// Which list a registry was populated from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegistryMode {
    Full,
    Optimized,
}

/// Lookup set of lowercase global function names.
#[derive(Clone, Debug)]
pub struct BuiltinRegistry {
    mode: RegistryMode,
    names: FxHashSet<Box<str>>,
}

impl BuiltinRegistry {
    /// Registry of every name `source` reports.
    pub fn full(source: &dyn BuiltinSource) -> Self {
        let names = source
            .function_names()
            .into_iter()
            .map(|name| name.to_ascii_lowercase().into_boxed_str())
            .collect();
        BuiltinRegistry {
            mode: RegistryMode::Full,
            names,
        }
    }

    /// Registry of [`OPTIMIZED_FUNCTIONS`].
    pub fn optimized() -> Self {
        BuiltinRegistry {
            mode: RegistryMode::Optimized,
            names: OPTIMIZED_FUNCTIONS.iter().map(|&name| Box::from(name)).collect(),
        }
    }

    /// Membership test; `name` must already be lowercase.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn mode(&self) -> RegistryMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
