// src/memory/discovery.rs

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{
    // ---
    ConfigParams,
    ConnectError,
    ConnectionParams,
    CorrelationId,
    Discovery,
    Result,
};

/// In-memory discovery service.
///
/// Keys map to an ordered list of connections; registering the same key
/// twice appends. Can be preloaded from configuration:
///
/// ```text
/// kafka.host = broker1
/// kafka.port = 9092
/// ```
///
/// registers one connection under the key `kafka`.
#[derive(Debug, Default)]
pub struct MemoryDiscovery {
    // ---
    entries: RwLock<HashMap<String, Vec<ConnectionParams>>>,
}

impl MemoryDiscovery {
    /// Create an empty discovery service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a discovery service holding one connection per section of
    /// `config`.
    pub fn from_config(config: &ConfigParams) -> Self {
        // ---
        let mut entries: HashMap<String, Vec<ConnectionParams>> = HashMap::new();
        for key in config.section_names() {
            entries
                .entry(key.clone())
                .or_default()
                .push(ConnectionParams::from(config.get_section(&key)));
        }

        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl Discovery for MemoryDiscovery {
    // ---
    fn register(
        &self,
        _correlation_id: &CorrelationId,
        key: &str,
        connection: ConnectionParams,
    ) -> Result<ConnectionParams> {
        // ---
        let mut entries = self
            .entries
            .write()
            .map_err(|_| ConnectError::Discovery("discovery registry lock poisoned".into()))?;

        entries
            .entry(key.to_string())
            .or_default()
            .push(connection.clone());

        Ok(connection)
    }

    fn resolve_one(
        &self,
        correlation_id: &CorrelationId,
        key: &str,
    ) -> Result<Option<ConnectionParams>> {
        Ok(self.resolve_all(correlation_id, key)?.into_iter().next())
    }

    fn resolve_all(
        &self,
        _correlation_id: &CorrelationId,
        key: &str,
    ) -> Result<Vec<ConnectionParams>> {
        // ---
        let entries = self
            .entries
            .read()
            .map_err(|_| ConnectError::Discovery("discovery registry lock poisoned".into()))?;

        Ok(entries.get(key).cloned().unwrap_or_default())
    }
}
