// src/domain/discovery.rs

//! Discovery service abstraction.
//!
//! A discovery service maps a symbolic key (`discovery_key` in a connection
//! entry) to concrete connection parameters. The resolver only ever reads
//! from it; registration exists so that services can publish their own
//! endpoints.

use std::sync::Arc;

use crate::{ConnectionParams, CorrelationId, Result};

/// Discovery service.
///
/// Implementations are called synchronously from the resolving thread and
/// own any retry, caching or timeout behaviour they need. Errors are
/// surfaced to the caller of `resolve()` unchanged.
pub trait Discovery: Send + Sync {
    // ---
    /// Register connection parameters under `key`.
    ///
    /// Returns the parameters as stored.
    fn register(
        &self,
        correlation_id: &CorrelationId,
        key: &str,
        connection: ConnectionParams,
    ) -> Result<ConnectionParams>;

    /// First connection registered under `key`, if any.
    fn resolve_one(
        &self,
        correlation_id: &CorrelationId,
        key: &str,
    ) -> Result<Option<ConnectionParams>>;

    /// All connections registered under `key`, in registration order.
    fn resolve_all(&self, correlation_id: &CorrelationId, key: &str)
        -> Result<Vec<ConnectionParams>>;
}

/// Shared handle to a discovery service.
pub type DiscoveryPtr = Arc<dyn Discovery>;
