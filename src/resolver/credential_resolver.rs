// src/resolver/credential_resolver.rs

use crate::{
    // ---
    ConfigParams,
    ConnectError,
    CorrelationId,
    CredentialParams,
    References,
    Result,
};

/// Resolves one credential from configuration and, for entries carrying a
/// `store_key`, from a credential store.
///
/// Configuration:
/// - `credential.*`: a single credential
/// - `credentials.<name>.*`: any number of named credentials
#[derive(Debug, Clone, Default)]
pub struct CredentialResolver {
    // ---
    credentials: Vec<CredentialParams>,
    references: References,
}

impl CredentialResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_credentials(credentials: Vec<CredentialParams>) -> Self {
        Self {
            credentials,
            references: References::default(),
        }
    }

    /// Replace stored credentials with the ones declared in `config`.
    pub fn configure(&mut self, config: &ConfigParams) {
        self.credentials = CredentialParams::many_from_config(config);
    }

    /// Wire the credential store used for `store_key` entries.
    pub fn set_references(&mut self, references: &References) {
        self.references = references.clone();
    }

    pub fn credentials(&self) -> &[CredentialParams] {
        &self.credentials
    }

    pub fn add(&mut self, credential: CredentialParams) {
        self.credentials.push(credential);
    }

    /// The active credential.
    ///
    /// - no credentials configured → `None`
    /// - the first entry without a store key, when there is one
    /// - otherwise the first store-keyed entry the store knows about, or
    ///   `None` when it knows none of them
    pub fn lookup(&self, correlation_id: &CorrelationId) -> Result<Option<CredentialParams>> {
        // ---
        if let Some(local) = self.credentials.iter().find(|c| !c.use_credential_store()) {
            return Ok(Some(local.clone()));
        }

        let keys: Vec<&str> = self
            .credentials
            .iter()
            .filter_map(CredentialParams::store_key)
            .collect();

        if keys.is_empty() {
            return Ok(None);
        }

        let store = self
            .references
            .credential_store()
            .ok_or_else(|| ConnectError::CredentialStoreNotFound {
                correlation_id: correlation_id.to_string(),
            })?;

        for key in keys {
            if let Some(found) = store.lookup(correlation_id, key)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}
