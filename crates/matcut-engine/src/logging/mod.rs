//! Logging setup for matcut binaries and embedding hosts.
//!
//! Library code only talks to the `log` facade; binaries call
//! [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig, DEFAULT_FILTER, FILTER_ENV};
