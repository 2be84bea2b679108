//! Typed broker-client settings.
//!
//! Converts a composed options bundle into the values a Kafka client
//! constructor needs: the bootstrap broker list, an optional client id and
//! optional SASL authentication. Nothing here opens a connection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{ConfigParams, ConnectError, CorrelationId, ErrorCode, Result};

/// SASL mechanism used to authenticate against the brokers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SaslMechanism {
    Plain,
    ScramSha256,
    ScramSha512,
}

impl SaslMechanism {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaslMechanism::Plain => "plain",
            SaslMechanism::ScramSha256 => "scram-sha-256",
            SaslMechanism::ScramSha512 => "scram-sha-512",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(SaslMechanism::Plain),
            "scram-sha-256" | "scram_sha_256" => Some(SaslMechanism::ScramSha256),
            "scram-sha-512" | "scram_sha_512" => Some(SaslMechanism::ScramSha512),
            _ => None,
        }
    }
}

impl fmt::Display for SaslMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// SASL authentication settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaslSettings {
    pub mechanism: SaslMechanism,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for SaslSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaslSettings")
            .field("mechanism", &self.mechanism)
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Everything a Kafka client needs to bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Bootstrap brokers, in configured order (e.g. `["kafka1:9092", "kafka2:9093"]`).
    pub brokers: Vec<String>,

    /// Client identifier reported to the brokers.
    pub client_id: Option<String>,

    /// SASL authentication, when a username is configured.
    pub sasl: Option<SaslSettings>,
}

impl ClientSettings {
    /// Build settings from a composed options bundle.
    ///
    /// # Errors
    ///
    /// - `NO_BROKERS` when `uri` names no broker
    /// - `UNSUPPORTED_MECHANISM` when `mechanism` is not `plain`,
    ///   `scram-sha-256` or `scram-sha-512`
    ///
    /// # Example
    ///
    /// ```
    /// use mom_kafka::{ClientSettings, ConfigParams, CorrelationId};
    ///
    /// let options = ConfigParams::from_tuples([
    ///     ("uri", "kafka1:9092, kafka2:9093"),
    ///     ("username", "user"),
    ///     ("password", "pass"),
    /// ]);
    /// let settings = ClientSettings::from_options(&CorrelationId::default(), &options)?;
    ///
    /// assert_eq!(settings.brokers, vec!["kafka1:9092", "kafka2:9093"]);
    /// assert_eq!(settings.sasl.unwrap().mechanism.as_str(), "plain");
    /// # Ok::<(), mom_kafka::ConnectError>(())
    /// ```
    pub fn from_options(correlation_id: &CorrelationId, options: &ConfigParams) -> Result<Self> {
        // ---
        let brokers: Vec<String> = options
            .get("uri")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect();

        if brokers.is_empty() {
            return Err(ConnectError::config(
                ErrorCode::NoBrokers,
                correlation_id,
                "Kafka brokers are not set",
            ));
        }

        let client_id = options
            .get("client_id")
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        let sasl = match options.get("username").filter(|u| !u.is_empty()) {
            None => None,
            Some(username) => {
                let raw = options.get_as_string_with_default("mechanism", "plain");
                let mechanism = SaslMechanism::parse(&raw).ok_or_else(|| {
                    ConnectError::config(
                        ErrorCode::UnsupportedMechanism,
                        correlation_id,
                        format!("The SASL mechanism {raw} is not supported"),
                    )
                })?;

                Some(SaslSettings {
                    mechanism,
                    username: username.to_string(),
                    password: options.get_as_string_with_default("password", ""),
                })
            }
        };

        Ok(Self {
            brokers,
            client_id,
            sasl,
        })
    }
}
