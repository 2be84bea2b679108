// src/resolver/kafka.rs

//! Kafka connection resolver.
//!
//! Turns declarative connection and credential configuration into a single
//! flattened options bundle that a Kafka client can consume. The bundle is
//! the union of:
//!
//! - every credential field,
//! - every connection field (the first connection to set a key wins),
//! - a synthesized `uri`.
//!
//! ## URI composition
//!
//! Three configuration styles collapse to the same `uri` key:
//!
//! - a pre-built connection string: `tcp://broker:9092?x=1` → `broker:9092`
//! - a single host/port pair: `kafka1:9092`
//! - a broker list: `kafka1:9092, kafka2:9093`
//!
//! The first connection with its own URI supplies the global URI (scheme
//! and query stripped) and the host/port list gathered so far is dropped.
//! Connections after that point still contribute their other fields but
//! nothing to the URI.

use super::{ConnectionResolver, CredentialResolver};
use crate::{
    // ---
    log_debug,
    log_error,
    log_warn,
    ConfigParams,
    ConnectError,
    ConnectionParams,
    CorrelationId,
    CredentialParams,
    ErrorCode,
    References,
    Result,
    DEFAULT_PORT,
    DEFAULT_PROTOCOL,
};

/// Resolves Kafka connection and credential parameters, validates them and
/// composes connection options.
///
/// Configuration:
/// - `connection(s)`: `discovery_key`, `host`, `port`, `uri`
/// - `credential(s)`: `store_key`, `username`, `password`, `mechanism`
///
/// References (all optional):
/// - a [`Discovery`](crate::Discovery) to resolve `discovery_key` entries
/// - a [`CredentialStore`](crate::CredentialStore) to resolve `store_key` entries
///
/// # Example
///
/// ```
/// use mom_kafka::{ConfigParams, CorrelationId, KafkaConnectionResolver};
///
/// let mut resolver = KafkaConnectionResolver::new();
/// resolver.configure(&ConfigParams::from_tuples([
///     ("connections.a.host", "kafka1"),
///     ("connections.b.host", "kafka2"),
///     ("connections.b.port", "9093"),
///     ("credential.username", "user"),
/// ]));
///
/// let options = resolver.resolve(&CorrelationId::from("123"))?;
/// assert_eq!(options.get("uri"), Some("kafka1:9092, kafka2:9093"));
/// assert_eq!(options.get("username"), Some("user"));
/// # Ok::<(), mom_kafka::ConnectError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct KafkaConnectionResolver {
    // ---
    connection_resolver: ConnectionResolver,
    credential_resolver: CredentialResolver,
}

impl KafkaConnectionResolver {
    /// Create a resolver with no configuration and no references.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with collaborators already wired in.
    pub fn with_references(references: &References) -> Self {
        // ---
        let mut resolver = Self::new();
        resolver.set_references(references);
        resolver
    }

    /// Store configuration in both sub-resolvers. Last call wins.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.connection_resolver.configure(config);
        self.credential_resolver.configure(config);
    }

    /// Wire optional discovery and credential-store collaborators.
    pub fn set_references(&mut self, references: &References) {
        self.connection_resolver.set_references(references);
        self.credential_resolver.set_references(references);
    }

    pub fn connection_resolver(&self) -> &ConnectionResolver {
        &self.connection_resolver
    }

    pub fn credential_resolver(&self) -> &CredentialResolver {
        &self.credential_resolver
    }

    /// Resolve connections and credential, validate every connection and
    /// compose the options bundle.
    ///
    /// Collaborator errors are returned unchanged. Validation stops at the
    /// first invalid connection.
    pub fn resolve(&self, correlation_id: &CorrelationId) -> Result<ConfigParams> {
        // ---
        let connections = self
            .connection_resolver
            .resolve_all(correlation_id)
            .inspect_err(|_err| {
                log_error!(correlation_id => "failed to resolve kafka connections: {}", _err);
            })?;
        let credential = self
            .credential_resolver
            .lookup(correlation_id)
            .inspect_err(|_err| {
                log_error!(correlation_id => "failed to resolve kafka credential: {}", _err);
            })?;

        self.compose(correlation_id, &connections, credential.as_ref())
    }

    /// Validate and compose caller-supplied connections and credential,
    /// bypassing the sub-resolvers.
    ///
    /// Produces the same options as [`resolve`](Self::resolve) for the
    /// same effective inputs.
    pub fn compose(
        &self,
        correlation_id: &CorrelationId,
        connections: &[ConnectionParams],
        credential: Option<&CredentialParams>,
    ) -> Result<ConfigParams> {
        // ---
        for connection in connections {
            validate_connection(correlation_id, Some(connection)).inspect_err(|_err| {
                log_warn!(correlation_id => "invalid kafka connection: {}", _err);
            })?;
        }

        let options = compose_options(connections, credential);
        log_debug!(
            correlation_id => "composed kafka options from {} connection(s), uri={:?}",
            connections.len(),
            options.get("uri").unwrap_or_default()
        );

        Ok(options)
    }
}

/// Check that one connection is usable.
///
/// Checks run in order and stop at the first failure: presence, full URI
/// (which skips the rest), protocol, host, port.
pub fn validate_connection(
    correlation_id: &CorrelationId,
    connection: Option<&ConnectionParams>,
) -> Result<()> {
    // ---
    let Some(connection) = connection else {
        return Err(ConnectError::config(
            ErrorCode::NoConnection,
            correlation_id,
            "Kafka connection is not set",
        ));
    };

    if connection.uri().is_some() {
        return Ok(());
    }

    let protocol = connection.protocol_with_default(DEFAULT_PROTOCOL);
    if protocol.is_empty() {
        return Err(ConnectError::config(
            ErrorCode::NoProtocol,
            correlation_id,
            "Connection protocol is not set",
        ));
    }
    if protocol != DEFAULT_PROTOCOL {
        return Err(ConnectError::config(
            ErrorCode::UnsupportedProtocol,
            correlation_id,
            format!("The protocol {protocol} is not supported"),
        ));
    }

    if connection.host().is_empty() {
        return Err(ConnectError::config(
            ErrorCode::NoHost,
            correlation_id,
            "Connection host is not set",
        ));
    }

    if connection.port_with_default(DEFAULT_PORT) == 0 {
        return Err(ConnectError::config(
            ErrorCode::NoPort,
            correlation_id,
            "Connection port is not set",
        ));
    }

    Ok(())
}

/// Merge credential and connections into one options bundle.
///
/// Pure and infallible; callers validate connections first.
pub fn compose_options(
    connections: &[ConnectionParams],
    credential: Option<&CredentialParams>,
) -> ConfigParams {
    // ---
    let mut options = ConfigParams::new();
    if let Some(credential) = credential {
        options.set_defaults(credential.as_config());
    }

    // A URI that strips to nothing does not count as found.
    let mut global_uri = String::new();
    let mut brokers: Vec<String> = Vec::new();

    for connection in connections {
        options.set_defaults(connection.as_config());

        if !global_uri.is_empty() {
            continue;
        }

        match connection.uri() {
            Some(uri) => global_uri = strip_uri(uri).to_string(),
            None => brokers.push(format!(
                "{}:{}",
                connection.host(),
                connection.port_with_default(DEFAULT_PORT)
            )),
        }
    }

    if global_uri.is_empty() {
        global_uri = brokers.join(", ");
    }
    options.set("uri", global_uri);

    options
}

/// Drop a leading `scheme://` and a trailing `?query`.
///
/// Markers at position zero are left alone.
fn strip_uri(uri: &str) -> &str {
    // ---
    let uri = match uri.find("://") {
        Some(pos) if pos > 0 => &uri[pos + 3..],
        _ => uri,
    };

    match uri.find('?') {
        Some(pos) if pos > 0 => &uri[..pos],
        _ => uri,
    }
}
