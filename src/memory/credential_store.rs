// src/memory/credential_store.rs

use std::collections::HashMap;
use std::sync::RwLock;

use crate::{
    // ---
    ConfigParams,
    ConnectError,
    CorrelationId,
    CredentialParams,
    CredentialStore,
    Result,
};

/// In-memory credential store.
///
/// Preloaded from configuration the same way as
/// [`MemoryDiscovery`](crate::MemoryDiscovery): each section becomes one
/// credential under the section name.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    // ---
    items: RwLock<HashMap<String, CredentialParams>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConfigParams) -> Self {
        // ---
        let items = config
            .section_names()
            .into_iter()
            .map(|key| {
                let credential = CredentialParams::from(config.get_section(&key));
                (key, credential)
            })
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    // ---
    fn store(
        &self,
        _correlation_id: &CorrelationId,
        key: &str,
        credential: CredentialParams,
    ) -> Result<()> {
        // ---
        let mut items = self
            .items
            .write()
            .map_err(|_| ConnectError::CredentialStore("credential store lock poisoned".into()))?;

        items.insert(key.to_string(), credential);
        Ok(())
    }

    fn lookup(&self, _correlation_id: &CorrelationId, key: &str) -> Result<Option<CredentialParams>> {
        // ---
        let items = self
            .items
            .read()
            .map_err(|_| ConnectError::CredentialStore("credential store lock poisoned".into()))?;

        Ok(items.get(key).cloned())
    }
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn test_store_replaces() {
        // ---
        let store = MemoryCredentialStore::new();
        let cid = CorrelationId::default();

        store
            .store(&cid, "admin", CredentialParams::from_tuples([("username", "old")]))
            .unwrap();
        store
            .store(&cid, "admin", CredentialParams::from_tuples([("username", "new")]))
            .unwrap();

        let found = store.lookup(&cid, "admin").unwrap().unwrap();
        assert_eq!(found.username(), Some("new"));
        assert!(store.lookup(&cid, "missing").unwrap().is_none());
    }

    #[test]
    fn test_from_config() {
        // ---
        let store = MemoryCredentialStore::from_config(&ConfigParams::from_tuples([
            ("admin.username", "root"),
            ("admin.password", "secret"),
        ]));

        let found = store
            .lookup(&CorrelationId::default(), "admin")
            .unwrap()
            .unwrap();
        assert_eq!(found.password(), Some("secret"));
    }
}
