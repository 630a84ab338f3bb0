//! Environment-scoped configuration for the budget sync client.
//!
//! This crate answers two boot-time questions: which deployment environment
//! the process is running in, and what backend connection that environment
//! implies. Resolution happens once, at startup, and the resulting
//! [`ConfigRegistry`] is passed by reference to every consumer; nothing in
//! here opens a connection or performs network I/O.

#![cfg_attr(not(test), deny(clippy::panic))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod connection;
pub mod credentials;
pub mod environment;
pub mod error;
pub mod logger;
pub mod registry;

pub use connection::ConnectionDescriptor;
pub use credentials::CredentialsProvider;
pub use environment::Environment;
pub use error::ConfigError;
pub use registry::ConfigRegistry;
