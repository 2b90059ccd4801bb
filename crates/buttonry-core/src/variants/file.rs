//! JSON variant tables.
//!
//! ```json
//! {
//!   "base": "font-semibold shadow-sm",
//!   "variants": { "size": { "xs": "text-xs", "sm": "text-sm" } },
//!   "compound_variants": [{ "when": { "size": ["xs", "sm"] }, "class": "rounded" }],
//!   "default_variants": { "size": "sm" }
//! }
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{ConfigResult, VariantConfig, VariantConfigBuilder};

/// A JSON object read as an ordered list of entries.
///
/// Repeated keys are kept so the builder can reject them instead of the last one
/// silently winning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entries<V>(pub Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> Entries<V> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> FromIterator<(String, V)> for Entries<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: Serialize> Serialize for Entries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct EntriesVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
    type Value = Entries<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(entry) = access.next_entry::<String, V>()? {
            entries.push(entry);
        }
        Ok(Entries(entries))
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// On-disk form of a [`VariantConfig`]. Class sets are whitespace-separated strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariantTable {
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub variants: Entries<Entries<String>>,
    #[serde(default)]
    pub compound_variants: Vec<CompoundEntry>,
    #[serde(default)]
    pub default_variants: Entries<String>,
}

/// One compound rule in a table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundEntry {
    pub when: Entries<OneOrMany>,
    pub class: String,
}

/// A condition value: one accepted value or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    pub fn values(&self) -> &[String] {
        match self {
            OneOrMany::One(value) => std::slice::from_ref(value),
            OneOrMany::Many(values) => values,
        }
    }
}

impl VariantTable {
    /// Validate and convert into a [`VariantConfig`].
    pub fn into_config(self) -> ConfigResult<VariantConfig> {
        let mut builder = VariantConfigBuilder::new(&self.base);

        for (group, options) in self.variants.iter() {
            builder = builder.group(
                group,
                options.iter().map(|(value, classes)| (value, classes.as_str())),
            );
        }

        for entry in &self.compound_variants {
            let accepted: Vec<(&str, Vec<&str>)> = entry
                .when
                .iter()
                .map(|(group, values)| (group, values.values().iter().map(String::as_str).collect()))
                .collect();
            builder = builder.compound(
                accepted.iter().map(|(group, values)| (*group, values.as_slice())),
                &entry.class,
            );
        }

        for (group, value) in self.default_variants.iter() {
            builder = builder.default_value(group, value);
        }

        builder.build()
    }
}

impl From<&VariantConfig> for VariantTable {
    fn from(config: &VariantConfig) -> Self {
        let variants = config
            .group_names()
            .map(|group| {
                let options = config
                    .values(group)
                    .into_iter()
                    .flatten()
                    .map(|value| {
                        let classes = config.classes(group, value).unwrap_or_default();
                        (value.to_string(), classes.join(" "))
                    })
                    .collect();
                (group.to_string(), options)
            })
            .collect();

        let compound_variants = config
            .compound_rules()
            .iter()
            .map(|rule| CompoundEntry {
                when: rule
                    .conditions()
                    .iter()
                    .map(|c| {
                        let values = match c.accepted() {
                            [one] => OneOrMany::One(one.clone()),
                            many => OneOrMany::Many(many.to_vec()),
                        };
                        (c.group().to_string(), values)
                    })
                    .collect(),
                class: rule.classes().join(" "),
            })
            .collect();

        // Declaration order, so the file is stable across runs.
        let default_variants = config
            .group_names()
            .filter_map(|group| {
                config
                    .default_value(group)
                    .map(|value| (group.to_string(), value.to_string()))
            })
            .collect();

        Self {
            base: config.base_classes().join(" "),
            variants,
            compound_variants,
            default_variants,
        }
    }
}

impl VariantConfig {
    /// Parse and validate a JSON table.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let table: VariantTable = serde_json::from_str(json)?;
        table.into_config()
    }

    /// Load a JSON table from disk.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!(
            "Loaded variant table from {:?} ({} groups, {} compound rules)",
            path,
            config.group_names().count(),
            config.compound_rules().len()
        );
        Ok(config)
    }

    /// Serialize as a pretty-printed JSON table.
    pub fn to_json_pretty(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(&VariantTable::from(self))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::{ConfigError, SelectionRequest};
    use std::io::Write;

    const TABLE: &str = r#"{
        "base": "font-semibold",
        "variants": {
            "size": { "xs": "text-xs", "md": "text-sm" },
            "rounded": { "normal": "", "full": "rounded-full" }
        },
        "compound_variants": [
            { "when": { "size": ["xs"], "rounded": "normal" }, "class": "rounded" },
            { "when": { "size": "md", "rounded": "normal" }, "class": "rounded-md" }
        ],
        "default_variants": { "size": "md", "rounded": "normal" }
    }"#;

    #[test]
    fn test_from_json_resolves() {
        let config = VariantConfig::from_json_str(TABLE).unwrap();
        assert_eq!(
            config.resolve(&SelectionRequest::new()).unwrap(),
            "font-semibold text-sm rounded-md"
        );
        assert_eq!(
            config.resolve(&SelectionRequest::new().with("size", "xs")).unwrap(),
            "font-semibold text-xs rounded"
        );
    }

    #[test]
    fn test_file_order_is_declaration_order() {
        let config = VariantConfig::from_json_str(TABLE).unwrap();
        let groups: Vec<_> = config.group_names().collect();
        assert_eq!(groups, vec!["size", "rounded"]);
    }

    #[test]
    fn test_json_validation_errors() {
        let json = r#"{
            "variants": { "size": { "xs": "text-xs" } },
            "compound_variants": [{ "when": { "tone": "loud" }, "class": "x" }]
        }"#;
        let err = VariantConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownRuleGroup { .. }));
    }

    #[test]
    fn test_json_duplicate_group_rejected() {
        let json = r#"{
            "variants": {
                "size": { "xs": "text-xs", "md": "text-sm" },
                "size": { "lg": "text-base" }
            }
        }"#;
        let err = VariantConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateGroup(ref g) if g == "size"));
    }

    #[test]
    fn test_json_duplicate_value_rejected() {
        let json = r#"{ "variants": { "size": { "xs": "text-xs", "xs": "text-sm" } } }"#;
        let err = VariantConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateValue { ref value, .. } if value == "xs"));
    }

    #[test]
    fn test_json_condition_without_values_rejected() {
        let json = r#"{
            "variants": { "size": { "xs": "text-xs" } },
            "compound_variants": [{ "when": { "size": [] }, "class": "never" }]
        }"#;
        let err = VariantConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCondition { index: 0, ref group } if group == "size"));
    }

    #[test]
    fn test_variants_must_be_object() {
        let err = VariantConfig::from_json_str(r#"{ "variants": ["size"] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = VariantConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_table_conversion_preserves_config() {
        let config = VariantConfig::from_json_str(TABLE).unwrap();
        let json = config.to_json_pretty().unwrap();
        let reloaded = VariantConfig::from_json_str(&json).unwrap();
        assert_eq!(config, reloaded);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TABLE.as_bytes()).unwrap();
        let config = VariantConfig::load(file.path()).unwrap();
        assert!(config.has_group("rounded"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = VariantConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
