//! Variant resolution: turn a selection of named options into a class string.
//!
//! A [`VariantConfig`] is built once (in code through [`VariantConfigBuilder`] or from a
//! JSON table, see [`file`]) and then shared read-only by every render call.

pub mod file;

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use thiserror::Error;

/// Variant configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown variant group: {0:?}")]
    UnknownGroup(String),
    #[error("Value {value:?} is not defined for variant group {group:?}")]
    UnknownValue { group: String, value: String },
    #[error("No value selected and no default for variant group {0:?}")]
    MissingValue(String),
    #[error("Variant group {0:?} is required but not declared")]
    MissingGroup(String),
    #[error("Variant group {0:?} declared twice")]
    DuplicateGroup(String),
    #[error("Value {value:?} declared twice in variant group {group:?}")]
    DuplicateValue { group: String, value: String },
    #[error("Compound rule {index} references unknown variant group {group:?}")]
    UnknownRuleGroup { index: usize, group: String },
    #[error("Compound rule {index} accepts {value:?}, which is not defined for {group:?}")]
    UnknownRuleValue {
        index: usize,
        group: String,
        value: String,
    },
    #[error("Compound rule {0} has no conditions")]
    EmptyRule(usize),
    #[error("Compound rule {index} accepts no values for {group:?}")]
    EmptyCondition { index: usize, group: String },
    #[error("Default {value:?} for variant group {group:?} is not defined")]
    UnknownDefault { group: String, value: String },
    #[error("Variant group {0:?} has two defaults")]
    DuplicateDefault(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for variant operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Split a whitespace-separated class string into tokens.
pub fn split_classes(classes: &str) -> Vec<String> {
    classes.split_whitespace().map(str::to_string).collect()
}

/// One `group in {values}` condition of a compound rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    group: String,
    accepted: Vec<String>,
}

impl Condition {
    /// Name of the variant group this condition tests.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Values that satisfy the condition.
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    fn matches(&self, resolved: &ResolvedSelection<'_>) -> bool {
        resolved
            .get(&self.group)
            .is_some_and(|value| self.accepted.iter().any(|a| a == value))
    }
}

/// Extra classes applied when every condition holds at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundRule {
    conditions: Vec<Condition>,
    classes: Vec<String>,
}

impl CompoundRule {
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Whether all conditions hold for the resolved selection.
    pub fn matches(&self, resolved: &ResolvedSelection<'_>) -> bool {
        self.conditions.iter().all(|c| c.matches(resolved))
    }
}

/// Immutable variant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantConfig {
    base: Vec<String>,
    groups: IndexMap<String, IndexMap<String, Vec<String>>>,
    compound_rules: Vec<CompoundRule>,
    defaults: HashMap<String, String>,
}

impl VariantConfig {
    /// Start building a table with the given always-applied classes.
    pub fn builder(base: &str) -> VariantConfigBuilder {
        VariantConfigBuilder::new(base)
    }

    pub fn base_classes(&self) -> &[String] {
        &self.base
    }

    /// Group names in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Option values of a group in declaration order.
    pub fn values(&self, group: &str) -> Option<impl Iterator<Item = &str>> {
        self.groups
            .get(group)
            .map(|options| options.keys().map(String::as_str))
    }

    /// Class tokens for one option of one group.
    pub fn classes(&self, group: &str, value: &str) -> Option<&[String]> {
        self.groups
            .get(group)
            .and_then(|options| options.get(value))
            .map(Vec::as_slice)
    }

    pub fn compound_rules(&self) -> &[CompoundRule] {
        &self.compound_rules
    }

    pub fn default_value(&self, group: &str) -> Option<&str> {
        self.defaults.get(group).map(String::as_str)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains_key(group)
    }

    /// Fail unless every named group is declared.
    pub fn require_groups(&self, groups: &[&str]) -> ConfigResult<()> {
        match groups.iter().find(|g| !self.has_group(g)) {
            Some(missing) => Err(ConfigError::MissingGroup(missing.to_string())),
            None => Ok(()),
        }
    }

    /// Apply defaults to a selection, producing one value per declared group.
    pub fn resolve_selection<'a>(
        &'a self,
        selection: &'a SelectionRequest,
    ) -> ConfigResult<ResolvedSelection<'a>> {
        if let Some(unknown) = selection.groups().find(|g| !self.has_group(g)) {
            return Err(ConfigError::UnknownGroup(unknown.to_string()));
        }

        let mut values = IndexMap::with_capacity(self.groups.len());
        for (group, options) in &self.groups {
            let value = selection
                .get(group)
                .or_else(|| self.default_value(group))
                .ok_or_else(|| ConfigError::MissingValue(group.clone()))?;
            if !options.contains_key(value) {
                return Err(ConfigError::UnknownValue {
                    group: group.clone(),
                    value: value.to_string(),
                });
            }
            values.insert(group.as_str(), value);
        }
        Ok(ResolvedSelection { values })
    }

    /// Resolve a selection into its class string.
    ///
    /// Token order is base classes, each group in declaration order, each matching
    /// compound rule in declaration order, then the caller's extra classes. Duplicates
    /// are kept.
    pub fn resolve(&self, selection: &SelectionRequest) -> ConfigResult<String> {
        let resolved = self.resolve_selection(selection)?;

        let mut tokens: Vec<&str> = self.base.iter().map(String::as_str).collect();
        for (group, value) in resolved.iter() {
            if let Some(classes) = self.classes(group, value) {
                tokens.extend(classes.iter().map(String::as_str));
            }
        }
        for rule in &self.compound_rules {
            if rule.matches(&resolved) {
                tokens.extend(rule.classes.iter().map(String::as_str));
            }
        }

        let mut class = tokens.join(" ");
        if let Some(extra) = selection.class().filter(|c| !c.is_empty()) {
            if !class.is_empty() {
                class.push(' ');
            }
            class.push_str(extra);
        }

        log::trace!("resolved {:?} -> {:?}", resolved.values, class);
        Ok(class)
    }
}

/// Resolve `selection` against `config`.
pub fn resolve(config: &VariantConfig, selection: &SelectionRequest) -> ConfigResult<String> {
    config.resolve(selection)
}

/// Builder for [`VariantConfig`]. Validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct VariantConfigBuilder {
    base: Vec<String>,
    groups: Vec<(String, Vec<(String, Vec<String>)>)>,
    compound_rules: Vec<CompoundRule>,
    defaults: Vec<(String, String)>,
}

impl VariantConfigBuilder {
    pub fn new(base: &str) -> Self {
        Self {
            base: split_classes(base),
            ..Default::default()
        }
    }

    /// Declare a group and its `(value, classes)` options, in order.
    pub fn group<'a>(
        mut self,
        name: &str,
        options: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Self {
        let options = options
            .into_iter()
            .map(|(value, classes)| (value.to_string(), split_classes(classes)))
            .collect();
        self.groups.push((name.to_string(), options));
        self
    }

    /// Add a compound rule from `(group, accepted values)` conditions.
    pub fn compound<'a>(
        mut self,
        conditions: impl IntoIterator<Item = (&'a str, &'a [&'a str])>,
        classes: &str,
    ) -> Self {
        let conditions = conditions
            .into_iter()
            .map(|(group, accepted)| Condition {
                group: group.to_string(),
                accepted: accepted.iter().map(|v| v.to_string()).collect(),
            })
            .collect();
        self.compound_rules.push(CompoundRule {
            conditions,
            classes: split_classes(classes),
        });
        self
    }

    pub fn default_value(mut self, group: &str, value: &str) -> Self {
        self.defaults.push((group.to_string(), value.to_string()));
        self
    }

    pub fn build(self) -> ConfigResult<VariantConfig> {
        let mut groups = IndexMap::with_capacity(self.groups.len());
        for (name, entries) in self.groups {
            if groups.contains_key(&name) {
                return Err(ConfigError::DuplicateGroup(name));
            }
            let mut options = IndexMap::with_capacity(entries.len());
            for (value, classes) in entries {
                if options.contains_key(&value) {
                    return Err(ConfigError::DuplicateValue { group: name, value });
                }
                options.insert(value, classes);
            }
            groups.insert(name, options);
        }

        for (index, rule) in self.compound_rules.iter().enumerate() {
            if rule.conditions.is_empty() {
                return Err(ConfigError::EmptyRule(index));
            }
            for condition in &rule.conditions {
                if condition.accepted.is_empty() {
                    return Err(ConfigError::EmptyCondition {
                        index,
                        group: condition.group.clone(),
                    });
                }
                let Some(options) = groups.get(&condition.group) else {
                    return Err(ConfigError::UnknownRuleGroup {
                        index,
                        group: condition.group.clone(),
                    });
                };
                if let Some(value) = condition.accepted.iter().find(|v| !options.contains_key(*v)) {
                    return Err(ConfigError::UnknownRuleValue {
                        index,
                        group: condition.group.clone(),
                        value: value.clone(),
                    });
                }
            }
        }

        let mut defaults = HashMap::with_capacity(self.defaults.len());
        for (group, value) in self.defaults {
            let defined = groups
                .get(&group)
                .is_some_and(|options| options.contains_key(&value));
            if !defined {
                return Err(ConfigError::UnknownDefault { group, value });
            }
            if defaults.contains_key(&group) {
                return Err(ConfigError::DuplicateDefault(group));
            }
            defaults.insert(group, value);
        }

        Ok(VariantConfig {
            base: self.base,
            groups,
            compound_rules: self.compound_rules,
            defaults,
        })
    }
}

/// Per-call choice of option values plus optional extra classes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionRequest {
    values: BTreeMap<String, String>,
    class: Option<String>,
}

impl SelectionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose `value` for `group`.
    pub fn with(mut self, group: &str, value: &str) -> Self {
        self.values.insert(group.to_string(), value.to_string());
        self
    }

    /// Choose `value` for `group` if present; `None` leaves the default in place.
    pub fn with_opt(self, group: &str, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.with(group, value),
            None => self,
        }
    }

    /// Extra classes appended after everything else.
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn get(&self, group: &str) -> Option<&str> {
        self.values.get(group).map(String::as_str)
    }

    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

/// A selection after defaults were applied: one value per declared group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelection<'a> {
    values: IndexMap<&'a str, &'a str>,
}

impl<'a> ResolvedSelection<'a> {
    pub fn get(&self, group: &str) -> Option<&'a str> {
        self.values.get(group).copied()
    }

    /// `(group, value)` pairs in group declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.values.iter().map(|(g, v)| (*g, *v))
    }
}
