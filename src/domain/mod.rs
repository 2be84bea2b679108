//! Domain layer public interface.
//!
//! This module defines the collaborator seams the resolvers depend on:
//! discovery services and credential stores, and the [`References`] bundle
//! used to inject them. Nothing here knows about Kafka.
//!
//! All domain consumers must import symbols via this module, not by
//! referencing individual files directly.

mod credential_store;
mod discovery;
mod references;

pub use credential_store::{CredentialStore, CredentialStorePtr};
pub use discovery::{Discovery, DiscoveryPtr};
pub use references::References;
