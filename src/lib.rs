//! Kafka connection resolution for message-queue clients
//!
//! This library turns declarative connection and credential settings into a
//! single validated options bundle a Kafka client can consume. Connections
//! may be given as full URIs, host/port pairs or broker lists, or looked up
//! in a discovery service; credentials may be given inline or looked up in a
//! credential store. Descriptor-keyed factories build configured queue
//! handles on top of the resolver.
//!
//! No network I/O happens here.
//!
//! # Example
//!
//! ```
//! use mom_kafka::{ClientSettings, ConfigParams, CorrelationId, KafkaConnectionResolver};
//!
//! let mut resolver = KafkaConnectionResolver::new();
//! resolver.configure(&ConfigParams::from_tuples([
//!     ("connection.uri", "tcp://broker:9092?x=1"),
//!     ("credential.username", "user"),
//!     ("credential.password", "pass"),
//! ]));
//!
//! let cid = CorrelationId::generate();
//! let options = resolver.resolve(&cid)?;
//! assert_eq!(options.get("uri"), Some("broker:9092"));
//!
//! let settings = ClientSettings::from_options(&cid, &options)?;
//! assert_eq!(settings.brokers, vec!["broker:9092"]);
//! # Ok::<(), mom_kafka::ConnectError>(())
//! ```

// Import all sub modules once...
mod macros;

mod build;
mod client_settings;
mod config;
mod domain;
mod memory;
mod resolver;

mod correlation;
mod error;

#[allow(unused_imports)]
pub(crate) use macros::{log_debug, log_error, log_warn};

// Re-export main types
pub use resolver::{
    //
    compose_options,
    validate_connection,
    ConnectionResolver,
    CredentialResolver,
    KafkaConnectionResolver,
};

pub use build::{
    //
    DefaultKafkaFactory,
    Descriptor,
    Factory,
    KafkaComponent,
    KafkaMessageQueue,
    KafkaMessageQueueFactory,
    DESCRIPTOR_GROUP,
};

pub use client_settings::{ClientSettings, SaslMechanism, SaslSettings};

pub use config::{
    //
    ConfigParams,
    ConnectionParams,
    CredentialParams,
    DEFAULT_PORT,
    DEFAULT_PROTOCOL,
};

pub use correlation::CorrelationId;
pub use error::{ConnectError, ErrorCode, Result};

// --- public re-exports
pub use domain::{
    //
    CredentialStore,
    CredentialStorePtr,
    Discovery,
    DiscoveryPtr,
    References,
};

pub use memory::{MemoryCredentialStore, MemoryDiscovery};
