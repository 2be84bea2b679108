// src/resolver/connection_resolver.rs

use crate::{
    // ---
    log_debug,
    ConfigParams,
    ConnectError,
    ConnectionParams,
    CorrelationId,
    DiscoveryPtr,
    References,
    Result,
};

/// Resolves connection parameters from configuration and, for entries
/// carrying a `discovery_key`, from a discovery service.
///
/// Configuration:
/// - `connection.*`: a single connection
/// - `connections.<name>.*`: any number of named connections
///
/// Each entry holds `host`, `port`, `uri`, `protocol` or `discovery_key`.
#[derive(Debug, Clone, Default)]
pub struct ConnectionResolver {
    // ---
    connections: Vec<ConnectionParams>,
    references: References,
}

impl ConnectionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver holding the given connections.
    pub fn with_connections(connections: Vec<ConnectionParams>) -> Self {
        Self {
            connections,
            references: References::default(),
        }
    }

    /// Replace stored connections with the ones declared in `config`.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.connections = ConnectionParams::many_from_config(config);
    }

    /// Wire the discovery service used for `discovery_key` entries.
    pub fn set_references(&mut self, references: &References) {
        self.references = references.clone();
    }

    /// Connections as configured, before any discovery.
    pub fn connections(&self) -> &[ConnectionParams] {
        &self.connections
    }

    /// Append a connection.
    pub fn add(&mut self, connection: ConnectionParams) {
        self.connections.push(connection);
    }

    /// Register a discoverable connection with the discovery service.
    ///
    /// Returns `Ok(false)` when the connection has no discovery key or no
    /// discovery service is wired in.
    pub fn register(
        &self,
        correlation_id: &CorrelationId,
        connection: &ConnectionParams,
    ) -> Result<bool> {
        // ---
        let (Some(key), Some(discovery)) = (connection.discovery_key(), self.references.discovery())
        else {
            return Ok(false);
        };

        discovery.register(correlation_id, key, connection.clone())?;
        Ok(true)
    }

    /// First resolvable connection, if any.
    ///
    /// Static entries win. Otherwise discoverable entries are tried in
    /// order until the discovery service knows one of them.
    pub fn resolve(&self, correlation_id: &CorrelationId) -> Result<Option<ConnectionParams>> {
        // ---
        if let Some(connection) = self.connections.iter().find(|c| !c.use_discovery()) {
            return Ok(Some(connection.clone()));
        }

        for connection in &self.connections {
            let Some(key) = connection.discovery_key() else {
                continue;
            };
            let discovery = self.discovery(correlation_id)?;
            if let Some(found) = discovery.resolve_one(correlation_id, key)? {
                return Ok(Some(merge_discovered(connection, found)));
            }
        }

        Ok(None)
    }

    /// All connections: static entries first, in order, then everything the
    /// discovery service returns for each discoverable entry.
    ///
    /// A discovered connection is layered over the fields of the entry that
    /// named its key.
    pub fn resolve_all(&self, correlation_id: &CorrelationId) -> Result<Vec<ConnectionParams>> {
        // ---
        let (to_discover, static_entries): (Vec<&ConnectionParams>, Vec<&ConnectionParams>) =
            self.connections.iter().partition(|c| c.use_discovery());
        let mut resolved: Vec<ConnectionParams> = static_entries.into_iter().cloned().collect();

        for connection in to_discover {
            let Some(key) = connection.discovery_key() else {
                continue;
            };
            let discovery = self.discovery(correlation_id)?;
            let found = discovery.resolve_all(correlation_id, key)?;
            log_debug!(correlation_id => "discovery key {} resolved to {} connection(s)", key, found.len());
            resolved.extend(found.into_iter().map(|f| merge_discovered(connection, f)));
        }

        Ok(resolved)
    }

    fn discovery(&self, correlation_id: &CorrelationId) -> Result<&DiscoveryPtr> {
        self.references
            .discovery()
            .ok_or_else(|| ConnectError::DiscoveryNotFound {
                correlation_id: correlation_id.to_string(),
            })
    }
}

/// `found` over the fields of `local`, without the discovery key.
fn merge_discovered(local: &ConnectionParams, found: ConnectionParams) -> ConnectionParams {
    // ---
    let mut merged = local.as_config().clone();
    merged.override_with(found.as_config());
    merged.remove("discovery_key");
    ConnectionParams::from(merged)
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use crate::{Discovery, MemoryDiscovery, DEFAULT_PORT};
    use std::sync::Arc;

    fn discovery_with(key: &str, hosts: &[&str]) -> Arc<MemoryDiscovery> {
        // ---
        let discovery = Arc::new(MemoryDiscovery::new());
        for host in hosts {
            discovery
                .register(&CorrelationId::default(), key, ConnectionParams::from_host_port(*host, 9092))
                .unwrap();
        }
        discovery
    }

    #[test]
    fn test_static_connections_pass_through() {
        // ---
        let mut resolver = ConnectionResolver::new();
        resolver.configure(&ConfigParams::from_tuples([
            ("connection.host", "kafka1"),
            ("connection.port", "9092"),
        ]));

        let resolved = resolver.resolve_all(&CorrelationId::from("1")).unwrap();
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].host(), "kafka1");
    }

    #[test]
    fn test_configure_replaces() {
        // ---
        let mut resolver = ConnectionResolver::new();
        resolver.configure(&ConfigParams::from_tuples([("connection.host", "a")]));
        resolver.configure(&ConfigParams::from_tuples([("connection.host", "b")]));

        assert_eq!(resolver.connections().len(), 1);
        assert_eq!(resolver.connections()[0].host(), "b");
    }

    #[test]
    fn test_static_before_discovered() {
        // ---
        let mut resolver = ConnectionResolver::with_connections(vec![
            ConnectionParams::from_host_port("first", 9092),
            ConnectionParams::from_tuples([("discovery_key", "cluster")]),
            ConnectionParams::from_host_port("last", 9092),
        ]);
        let refs = References::new().with_discovery(discovery_with("cluster", &["d1", "d2"]));
        resolver.set_references(&refs);

        let hosts: Vec<String> = resolver
            .resolve_all(&CorrelationId::default())
            .unwrap()
            .iter()
            .map(|c| c.host().to_string())
            .collect();

        assert_eq!(hosts, vec!["first", "last", "d1", "d2"]);
    }

    #[test]
    fn test_discovered_layered_over_local_fields() {
        // ---
        let mut resolver = ConnectionResolver::with_connections(vec![ConnectionParams::from_tuples([
            ("discovery_key", "cluster"),
            ("protocol", "tcp"),
            ("port", "9000"),
        ])]);
        resolver.set_references(
            &References::new().with_discovery(discovery_with("cluster", &["d1"])),
        );

        let resolved = resolver.resolve_all(&CorrelationId::default()).unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].host(), "d1");
        assert_eq!(resolved[0].port_with_default(DEFAULT_PORT), 9092);
        assert_eq!(resolved[0].protocol(), Some("tcp"));
        assert!(!resolved[0].use_discovery());

        let first = resolver.resolve(&CorrelationId::default()).unwrap().unwrap();
        assert_eq!(first, resolved[0]);
    }

    #[test]
    fn test_resolve_prefers_static() {
        // ---
        let mut resolver = ConnectionResolver::with_connections(vec![
            ConnectionParams::from_tuples([("discovery_key", "cluster")]),
            ConnectionParams::from_host_port("static", 9092),
        ]);
        resolver.set_references(
            &References::new().with_discovery(discovery_with("cluster", &["d1"])),
        );

        let conn = resolver.resolve(&CorrelationId::default()).unwrap().unwrap();
        assert_eq!(conn.host(), "static");
    }

    #[test]
    fn test_discovery_key_without_discovery_fails() {
        // ---
        let resolver = ConnectionResolver::with_connections(vec![ConnectionParams::from_tuples([(
            "discovery_key",
            "cluster",
        )])]);

        let err = resolver.resolve_all(&CorrelationId::from("abc")).unwrap_err();
        assert!(matches!(
            err,
            ConnectError::DiscoveryNotFound { ref correlation_id } if correlation_id == "abc"
        ));
    }

    #[test]
    fn test_resolve_skips_unknown_keys() {
        // ---
        let mut resolver = ConnectionResolver::with_connections(vec![
            ConnectionParams::from_tuples([("discovery_key", "missing")]),
            ConnectionParams::from_tuples([("discovery_key", "cluster")]),
        ]);
        resolver.set_references(
            &References::new().with_discovery(discovery_with("cluster", &["found"])),
        );

        let conn = resolver.resolve(&CorrelationId::default()).unwrap().unwrap();
        assert_eq!(conn.host(), "found");
    }

    #[test]
    fn test_register() {
        // ---
        let discovery = Arc::new(MemoryDiscovery::new());
        let mut resolver = ConnectionResolver::new();
        let cid = CorrelationId::default();

        let conn = ConnectionParams::from_tuples([("discovery_key", "svc"), ("host", "me")]);
        assert!(!resolver.register(&cid, &conn).unwrap());

        resolver.set_references(&References::new().with_discovery(discovery.clone()));
        assert!(resolver.register(&cid, &conn).unwrap());
        assert!(!resolver
            .register(&cid, &ConnectionParams::from_host_port("x", 1))
            .unwrap());

        assert_eq!(discovery.resolve_all(&cid, "svc").unwrap().len(), 1);
    }
}
