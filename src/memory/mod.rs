// src/memory/mod.rs

//! In-memory collaborators.
//!
//! Pure in-process implementations of [`Discovery`](crate::Discovery) and
//! [`CredentialStore`](crate::CredentialStore). They serve tests, local
//! execution, and as the reference for collaborator semantics: lookups are
//! deterministic and never fail except on a poisoned lock.

mod credential_store;
mod discovery;

pub use credential_store::MemoryCredentialStore;
pub use discovery::MemoryDiscovery;
