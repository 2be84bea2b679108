// src/macros.rs

//
// Logging macros
//
// Every call site names the correlation id of the call it belongs to:
//
//     log_debug!(correlation_id => "resolved {} connection(s)", n);
//
// logging feature enabled → tracing event with a `correlation_id` field
// logging feature disabled → only log_error prints to stderr
//

#![allow(unused_macros)]

// --------------------
// ERROR
// --------------------

#[cfg(feature = "logging")]
macro_rules! log_error {
    ($cid:expr => $($arg:tt)*) => {{
        let cid = &$cid;
        tracing::error!(correlation_id = %cid, $($arg)*)
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_error {
    ($cid:expr => $($arg:tt)*) => {
        eprintln!("[{}] {}", $cid, format_args!($($arg)*))
    };
}

// --------------------
// WARN
// --------------------

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($cid:expr => $($arg:tt)*) => {{
        let cid = &$cid;
        tracing::warn!(correlation_id = %cid, $($arg)*)
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($cid:expr => $($arg:tt)*) => {{
        let _ = &$cid;
    }};
}

// --------------------
// DEBUG
// --------------------

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($cid:expr => $($arg:tt)*) => {{
        let cid = &$cid;
        tracing::debug!(correlation_id = %cid, $($arg)*)
    }};
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($cid:expr => $($arg:tt)*) => {{
        let _ = &$cid;
    }};
}

#[allow(unused_imports)]
pub(crate) use log_debug;
#[allow(unused_imports)]
pub(crate) use log_error;
#[allow(unused_imports)]
pub(crate) use log_warn;
