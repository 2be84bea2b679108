// src/domain/references.rs

use std::fmt;

use super::{CredentialStorePtr, DiscoveryPtr};

/// Optional collaborators wired into resolvers.
///
/// Both slots may stay empty; resolvers then work from statically
/// configured values only.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use mom_kafka::{MemoryCredentialStore, MemoryDiscovery, References};
///
/// let refs = References::new()
///     .with_discovery(Arc::new(MemoryDiscovery::new()))
///     .with_credential_store(Arc::new(MemoryCredentialStore::new()));
///
/// assert!(refs.discovery().is_some());
/// ```
#[derive(Clone, Default)]
pub struct References {
    discovery: Option<DiscoveryPtr>,
    credential_store: Option<CredentialStorePtr>,
}

impl References {
    /// Create an empty set of references.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a discovery service.
    pub fn with_discovery(mut self, discovery: DiscoveryPtr) -> Self {
        self.discovery = Some(discovery);
        self
    }

    /// Attach a credential store.
    pub fn with_credential_store(mut self, store: CredentialStorePtr) -> Self {
        self.credential_store = Some(store);
        self
    }

    pub fn discovery(&self) -> Option<&DiscoveryPtr> {
        self.discovery.as_ref()
    }

    pub fn credential_store(&self) -> Option<&CredentialStorePtr> {
        self.credential_store.as_ref()
    }
}

impl fmt::Debug for References {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("References")
            .field("discovery", &self.discovery.is_some())
            .field("credential_store", &self.credential_store.is_some())
            .finish()
    }
}
