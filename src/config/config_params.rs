// src/config/config_params.rs

//! Flat, ordered key-value configuration.
//!
//! Keys are dot-delimited (`connection.host`, `connections.backup.port`);
//! a *section* is the set of keys sharing a prefix. Values are always
//! strings and typed accessors parse them on demand, falling back to the
//! supplied default when a value is missing or does not parse.
//!
//! Iteration order is the key order, so two maps with the same entries
//! always serialize and compare identically.

use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Result;

/// Ordered string-to-string configuration map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigParams(BTreeMap<String, String>);

impl ConfigParams {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from `(key, value)` pairs. Later pairs replace earlier ones.
    ///
    /// ```
    /// use mom_kafka::ConfigParams;
    ///
    /// let config = ConfigParams::from_tuples([
    ///     ("connection.host", "localhost"),
    ///     ("connection.port", "9092"),
    /// ]);
    /// assert_eq!(config.get("connection.host"), Some("localhost"));
    /// ```
    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(
            tuples
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Parse a JSON document into a flat map.
    ///
    /// Nested objects become dot-delimited keys, scalars are stringified,
    /// arrays are indexed (`brokers.0`, `brokers.1`) and `null` is skipped.
    ///
    /// ```
    /// use mom_kafka::ConfigParams;
    ///
    /// let config = ConfigParams::from_json(r#"{"connection": {"host": "kafka", "port": 9093}}"#)?;
    /// assert_eq!(config.get("connection.port"), Some("9093"));
    /// # Ok::<(), mom_kafka::ConnectError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// Flatten an already parsed JSON value.
    pub fn from_value(value: &Value) -> Self {
        // ---
        let mut params = Self::new();
        flatten_into(&mut params.0, "", value);
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when the key is missing.
    pub fn get_as_string_with_default(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or(default).to_string()
    }

    /// Value for `key` parsed as an integer, or `default` when the key is
    /// missing or not a number.
    pub fn get_as_integer_with_default(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(default)
    }

    /// Value for `key` parsed as a boolean (`true`/`false`, `1`/`0`,
    /// `yes`/`no`), or `default` otherwise.
    pub fn get_as_bool_with_default(&self, key: &str, default: bool) -> bool {
        match self.get(key).map(|v| v.trim().to_ascii_lowercase()) {
            Some(v) if matches!(v.as_str(), "true" | "1" | "yes" | "y" | "t") => true,
            Some(v) if matches!(v.as_str(), "false" | "0" | "no" | "n" | "f") => false,
            _ => default,
        }
    }

    /// Insert or replace a value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Copy entries from `defaults` whose keys are not present yet.
    ///
    /// Existing values always win, so applying several sources in priority
    /// order keeps the first writer of every key.
    pub fn set_defaults(&mut self, defaults: &ConfigParams) {
        for (key, value) in defaults.iter() {
            if let btree_map::Entry::Vacant(entry) = self.0.entry(key.to_string()) {
                entry.insert(value.to_string());
            }
        }
    }

    /// Copy every entry from `overrides`, replacing existing values.
    pub fn override_with(&mut self, overrides: &ConfigParams) {
        for (key, value) in overrides.iter() {
            self.set(key, value);
        }
    }

    /// Entries under `name.` with the prefix stripped.
    ///
    /// ```
    /// use mom_kafka::ConfigParams;
    ///
    /// let config = ConfigParams::from_tuples([("credential.username", "admin"), ("host", "x")]);
    /// let section = config.get_section("credential");
    /// assert_eq!(section.get("username"), Some("admin"));
    /// assert_eq!(section.len(), 1);
    /// ```
    pub fn get_section(&self, name: &str) -> ConfigParams {
        // ---
        let prefix = format!("{name}.");
        Self(
            self.0
                .range(prefix.clone()..)
                .take_while(|(k, _)| k.starts_with(&prefix))
                .map(|(k, v)| (k[prefix.len()..].to_string(), v.clone()))
                .collect(),
        )
    }

    /// Distinct first segments of all dotted keys, in key order.
    pub fn section_names(&self) -> Vec<String> {
        // ---
        let names: BTreeSet<&str> = self
            .0
            .keys()
            .filter_map(|k| k.split_once('.').map(|(section, _)| section))
            .collect();
        names.into_iter().map(str::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ConfigParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_tuples(iter)
    }
}

impl IntoIterator for ConfigParams {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn flatten_into(out: &mut BTreeMap<String, String>, prefix: &str, value: &Value) {
    // ---
    let child_key = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{prefix}.{key}")
        }
    };

    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (key, child) in map {
                flatten_into(out, &child_key(key.as_str()), child);
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                flatten_into(out, &child_key(index.to_string().as_str()), child);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Bool(_) | Value::Number(_) => {
            out.insert(prefix.to_string(), value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_set_defaults_keeps_first_writer() {
        // ---
        let mut params = ConfigParams::from_tuples([("host", "kafka1"), ("port", "9092")]);
        let later = ConfigParams::from_tuples([("host", "kafka2"), ("protocol", "tcp")]);

        params.set_defaults(&later);

        assert_eq!(params.get("host"), Some("kafka1"));
        assert_eq!(params.get("protocol"), Some("tcp"));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn test_override_with_replaces() {
        // ---
        let mut params = ConfigParams::from_tuples([("host", "kafka1")]);
        params.override_with(&ConfigParams::from_tuples([("host", "kafka2")]));
        assert_eq!(params.get("host"), Some("kafka2"));
    }

    #[test]
    fn test_integer_parsing_falls_back() {
        // ---
        let params = ConfigParams::from_tuples([("port", " 9093 "), ("bad", "abc")]);
        assert_eq!(params.get_as_integer_with_default("port", 9092), 9093);
        assert_eq!(params.get_as_integer_with_default("bad", 9092), 9092);
        assert_eq!(params.get_as_integer_with_default("missing", 7), 7);
    }

    #[test]
    fn test_bool_parsing() {
        // ---
        let params = ConfigParams::from_tuples([("a", "TRUE"), ("b", "0"), ("c", "maybe")]);
        assert!(params.get_as_bool_with_default("a", false));
        assert!(!params.get_as_bool_with_default("b", true));
        assert!(params.get_as_bool_with_default("c", true));
    }

    #[test]
    fn test_section_does_not_leak_similar_prefix() {
        // ---
        let params = ConfigParams::from_tuples([
            ("connection.host", "a"),
            ("connections.primary.host", "b"),
            ("connection.port", "1"),
        ]);

        let section = params.get_section("connection");
        assert_eq!(section.len(), 2);
        assert_eq!(section.get("host"), Some("a"));
        assert_eq!(section.get("port"), Some("1"));

        let nested = params.get_section("connections");
        assert_eq!(nested.section_names(), vec!["primary".to_string()]);
    }

    #[test]
    fn test_from_json_flattens() {
        // ---
        let json = r#"{
            "connection": { "host": "kafka", "port": 9092, "secure": false, "skip": null },
            "brokers": ["a", "b"]
        }"#;

        let params = ConfigParams::from_json(json).expect("valid json");

        assert_eq!(params.get("connection.host"), Some("kafka"));
        assert_eq!(params.get("connection.port"), Some("9092"));
        assert_eq!(params.get("connection.secure"), Some("false"));
        assert!(!params.contains_key("connection.skip"));
        assert_eq!(params.get("brokers.1"), Some("b"));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        // ---
        let err = ConfigParams::from_json("{not json").unwrap_err();
        assert!(matches!(err, crate::ConnectError::Serialization(_)));
    }

    #[test]
    fn test_serializes_as_object() {
        // ---
        let params = ConfigParams::from_tuples([("uri", "broker:9092")]);
        let json = serde_json::to_string(&params).expect("serializable");
        assert_eq!(json, r#"{"uri":"broker:9092"}"#);
    }
}
