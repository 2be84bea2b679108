//! Connection and credential resolution.
//!
//! [`ConnectionResolver`] and [`CredentialResolver`] read raw configuration
//! and consult the optional collaborators; [`KafkaConnectionResolver`]
//! combines both into one validated options bundle.

mod connection_resolver;
mod credential_resolver;
mod kafka;

pub use connection_resolver::ConnectionResolver;
pub use credential_resolver::CredentialResolver;
pub use kafka::{compose_options, validate_connection, KafkaConnectionResolver};
