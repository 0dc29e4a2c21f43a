//! Rule configuration.
//!
//! The rule has one switch, `onlyOptimizedFunctions`, looked up in two
//! tiers: a runtime override (set for one run) wins over the property
//! declared for this rule in the ruleset.

use rustc_hash::FxHashMap;

use crate::RULE_ID;

/// Property selecting the optimized registry.
pub const ONLY_OPTIMIZED_FUNCTIONS: &str = "onlyOptimizedFunctions";

/// Error raised while building a property source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("malformed override `{entry}`: expected `name=value`")]
    MalformedOverride { entry: String },
}

/// Value of the `onlyOptimizedFunctions` switch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OptimizedOnly {
    /// Declared in neither tier.
    #[default]
    Unset,
    False,
    True,
}

impl OptimizedOnly {
    /// Interpret a raw property value; `None` means the property is absent.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            None => OptimizedOnly::Unset,
            Some(raw) if parse_permissive_bool(raw) => OptimizedOnly::True,
            Some(_) => OptimizedOnly::False,
        }
    }

    /// Resolve the switch from a property source.
    pub fn resolve(properties: &dyn PropertySource) -> Self {
        Self::from_value(properties.get_property(ONLY_OPTIMIZED_FUNCTIONS))
    }

    #[inline]
    pub fn is_set(self) -> bool {
        !matches!(self, OptimizedOnly::Unset)
    }

    #[inline]
    pub fn is_true(self) -> bool {
        matches!(self, OptimizedOnly::True)
    }
}

/// Lenient boolean: `1`, `true`, `on`, `yes` (any case, surrounding
/// whitespace ignored) are true; every other string is false.
pub fn parse_permissive_bool(value: &str) -> bool {
    let value = value.trim();
    ["1", "true", "on", "yes"]
        .iter()
        .any(|truthy| value.eq_ignore_ascii_case(truthy))
}

/// A tier of named rule properties.
pub trait PropertySource {
    fn get_property(&self, name: &str) -> Option<&str>;
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn get_property(&self, name: &str) -> Option<&str> {
        (**self).get_property(name)
    }
}

/// Properties set for a single run, e.g. from `--runtime-set name value`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOverrides {
    values: FxHashMap<String, String>,
}

impl RuntimeOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `name=value` entries. The value may be empty, the name may not.
    pub fn from_pairs<I, S>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut overrides = Self::new();
        for entry in entries {
            let entry = entry.as_ref();
            let malformed = || ConfigError::MalformedOverride {
                entry: entry.to_string(),
            };
            let (name, value) = entry.split_once('=').ok_or_else(malformed)?;
            let name = name.trim();
            if name.is_empty() {
                return Err(malformed());
            }
            overrides.set(name, value.trim());
        }
        Ok(overrides)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }
}

impl PropertySource for RuntimeOverrides {
    fn get_property(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }
}

/// Properties declared in a ruleset, grouped by rule identifier.
///
/// As a [`PropertySource`] it answers for this rule's identifier only;
/// properties of other rules are kept but never consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RulesetProperties {
    rules: FxHashMap<String, FxHashMap<String, String>>,
}

impl RulesetProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(
        &mut self,
        rule: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.rules
            .entry(rule.into())
            .or_default()
            .insert(name.into(), value.into());
    }

    #[must_use]
    pub fn with(
        mut self,
        rule: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.set(rule, name, value);
        self
    }

    pub fn property(&self, rule: &str, name: &str) -> Option<&str> {
        self.rules.get(rule)?.get(name).map(String::as_str)
    }
}

impl PropertySource for RulesetProperties {
    fn get_property(&self, name: &str) -> Option<&str> {
        self.property(RULE_ID, name)
    }
}

/// Override tier first, ruleset tier second.
#[derive(Clone, Debug, Default)]
pub struct LayeredProperties<O, R> {
    overrides: O,
    ruleset: R,
}

impl<O: PropertySource, R: PropertySource> LayeredProperties<O, R> {
    pub fn new(overrides: O, ruleset: R) -> Self {
        LayeredProperties { overrides, ruleset }
    }
}

impl<O: PropertySource, R: PropertySource> PropertySource for LayeredProperties<O, R> {
    fn get_property(&self, name: &str) -> Option<&str> {
        self.overrides
            .get_property(name)
            .or_else(|| self.ruleset.get_property(name))
    }
}
