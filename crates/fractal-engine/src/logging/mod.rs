//! Logging setup.
//!
//! The engine itself only uses the `log` facade; binaries call
//! [`init_logging`] to install the `env_logger` backend.

mod init;

pub use init::{LoggingConfig, init_logging};
