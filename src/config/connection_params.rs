// src/config/connection_params.rs

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::ConfigParams;

/// Protocol assumed when a connection does not name one.
pub const DEFAULT_PROTOCOL: &str = "tcp";

/// Port assumed when a connection does not name one.
pub const DEFAULT_PORT: u16 = 9092;

/// Parameters describing one broker endpoint.
///
/// A connection is either a full `uri` (connection string with everything
/// in it) or a `protocol`/`host`/`port` triple. A `discovery_key` marks a
/// connection whose concrete parameters live in a discovery service.
///
/// Any other keys are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionParams(ConfigParams);

impl ConnectionParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Connection from a single `host:port` pair.
    pub fn from_host_port(host: impl Into<String>, port: u16) -> Self {
        // ---
        let mut params = ConfigParams::new();
        params.set("host", host);
        params.set("port", port.to_string());
        Self(params)
    }

    /// Connection from a full connection string.
    pub fn from_uri(uri: impl Into<String>) -> Self {
        let mut params = ConfigParams::new();
        params.set("uri", uri);
        Self(params)
    }

    pub fn from_tuples<K, V, I>(tuples: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self(ConfigParams::from_tuples(tuples))
    }

    /// Read every connection declared in `config`.
    ///
    /// Each named sub-section of `connections`, in key order. The singular
    /// `connection` section is read only when `connections` is empty.
    /// Empty sections produce no connection.
    pub fn many_from_config(config: &ConfigParams) -> Vec<ConnectionParams> {
        // ---
        let many = config.get_section("connections");
        if many.is_empty() {
            let single = config.get_section("connection");
            return if single.is_empty() { Vec::new() } else { vec![Self(single)] };
        }

        many.section_names()
            .into_iter()
            .map(|name| many.get_section(&name))
            .filter(|section| !section.is_empty())
            .map(Self)
            .collect()
    }

    /// Full connection string, `None` when unset or empty.
    pub fn uri(&self) -> Option<&str> {
        self.0.get("uri").filter(|u| !u.is_empty())
    }

    pub fn protocol(&self) -> Option<&str> {
        self.0.get("protocol")
    }

    /// Protocol, falling back to `default` only when the key is missing.
    pub fn protocol_with_default(&self, default: &str) -> String {
        self.0.get_as_string_with_default("protocol", default)
    }

    /// Host name or IP address, empty when unset.
    pub fn host(&self) -> &str {
        self.0.get("host").unwrap_or_default()
    }

    /// Port, falling back to `default` when missing or not a number.
    ///
    /// Any parsed value is returned as configured, including ones outside
    /// the TCP port range.
    pub fn port_with_default(&self, default: u16) -> i64 {
        self.0.get_as_integer_with_default("port", i64::from(default))
    }

    /// Key under which a discovery service knows this connection.
    pub fn discovery_key(&self) -> Option<&str> {
        self.0.get("discovery_key").filter(|k| !k.is_empty())
    }

    pub fn use_discovery(&self) -> bool {
        self.discovery_key().is_some()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.set(key, value);
    }

    pub fn as_config(&self) -> &ConfigParams {
        &self.0
    }

    pub fn into_config(self) -> ConfigParams {
        self.0
    }
}

impl Deref for ConnectionParams {
    type Target = ConfigParams;

    fn deref(&self) -> &ConfigParams {
        &self.0
    }
}

impl From<ConfigParams> for ConnectionParams {
    fn from(params: ConfigParams) -> Self {
        Self(params)
    }
}
