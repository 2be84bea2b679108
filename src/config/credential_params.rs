// src/config/credential_params.rs

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::ConfigParams;

/// Authentication parameters for a broker connection.
///
/// Either carries `username`/`password` (and optionally a SASL
/// `mechanism`) directly, or a `store_key` naming an entry in a
/// credential store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialParams(ConfigParams);

impl CredentialParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(ConfigParams::from_tuples(tuples))
    }

    /// Read every credential declared in `config`: the `credential`
    /// section first, then each named sub-section of `credentials`.
    pub fn many_from_config(config: &ConfigParams) -> Vec<CredentialParams> {
        // ---
        let mut result = Vec::new();

        let single = config.get_section("credential");
        if !single.is_empty() {
            result.push(Self(single));
        }

        let many = config.get_section("credentials");
        for name in many.section_names() {
            let section = many.get_section(&name);
            if !section.is_empty() {
                result.push(Self(section));
            }
        }

        result
    }

    /// Key under which a credential store keeps this credential.
    pub fn store_key(&self) -> Option<&str> {
        self.0.get("store_key").filter(|k| !k.is_empty())
    }

    pub fn use_credential_store(&self) -> bool {
        self.store_key().is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.0.get("username").filter(|u| !u.is_empty())
    }

    pub fn password(&self) -> Option<&str> {
        self.0.get("password")
    }

    /// SASL mechanism, e.g. `plain` or `scram-sha-256`.
    pub fn mechanism(&self) -> Option<&str> {
        self.0.get("mechanism").filter(|m| !m.is_empty())
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.set(key, value);
    }

    pub fn as_config(&self) -> &ConfigParams {
        &self.0
    }
}

impl Deref for CredentialParams {
    type Target = ConfigParams;

    fn deref(&self) -> &ConfigParams {
        &self.0
    }
}

impl From<ConfigParams> for CredentialParams {
    fn from(params: ConfigParams) -> Self {
        Self(params)
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_accessors() {
        // ---
        let cred = CredentialParams::from_tuples([
            ("username", "u"),
            ("password", "p"),
            ("mechanism", "plain"),
        ]);

        assert_eq!(cred.username(), Some("u"));
        assert_eq!(cred.password(), Some("p"));
        assert_eq!(cred.mechanism(), Some("plain"));
        assert!(!cred.use_credential_store());
    }

    #[test]
    fn test_store_key() {
        // ---
        let cred = CredentialParams::from_tuples([("store_key", "kafka-admin")]);
        assert!(cred.use_credential_store());
        assert_eq!(cred.store_key(), Some("kafka-admin"));

        let blank = CredentialParams::from_tuples([("store_key", "")]);
        assert!(!blank.use_credential_store());
    }

    #[test]
    fn test_many_from_config() {
        // ---
        let config = ConfigParams::from_tuples([
            ("credential.username", "first"),
            ("credentials.backup.store_key", "vault"),
        ]);

        let creds = CredentialParams::many_from_config(&config);

        assert_eq!(creds.len(), 2);
        assert_eq!(creds[0].username(), Some("first"));
        assert_eq!(creds[1].store_key(), Some("vault"));
    }
}
