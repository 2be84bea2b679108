//! Configuration values.
//!
//! Raw settings arrive as a flat [`ConfigParams`] map; connection and
//! credential entries are read out of it as typed views that still carry
//! every key they were read from.
//!
//! All consumers import these types through this module.

mod config_params;
mod connection_params;
mod credential_params;

pub use config_params::ConfigParams;
pub use connection_params::{ConnectionParams, DEFAULT_PORT, DEFAULT_PROTOCOL};
pub use credential_params::CredentialParams;
