// src/domain/credential_store.rs

use std::sync::Arc;

use crate::{CorrelationId, CredentialParams, Result};

/// Credential store.
///
/// Maps a `store_key` from a credential entry to the actual
/// authentication parameters.
pub trait CredentialStore: Send + Sync {
    // ---
    /// Store `credential` under `key`, replacing any previous entry.
    fn store(
        &self,
        correlation_id: &CorrelationId,
        key: &str,
        credential: CredentialParams,
    ) -> Result<()>;

    /// Credential stored under `key`, if any.
    fn lookup(&self, correlation_id: &CorrelationId, key: &str) -> Result<Option<CredentialParams>>;
}

/// Shared handle to a credential store.
pub type CredentialStorePtr = Arc<dyn CredentialStore>;
