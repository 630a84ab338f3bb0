//! Process-wide configuration registry.
//!
//! [`ConfigRegistry::configure`] is called once at startup, before
//! concurrency fans out; the resulting registry is immutable apart from the
//! injected credential and logging handles, so it can be shared by reference
//! across any number of readers without synchronization.

use std::env;

use tracing::info;

use crate::connection::{ConnectionDescriptor, API_VERSION};
use crate::credentials::CredentialsProvider;
use crate::environment::Environment;

/// Environment variable overriding the log level at process start.
pub const LOG_LEVEL_VAR: &str = "BUDGET_LOG_LEVEL";

/// Log level applied when no override is present.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Storage namespace shared by every non-testing environment.
const STORAGE_NAMESPACE: &str = "budgetshare";
/// Storage namespace reserved for the test harness, so test runs never touch
/// production-shaped persisted state.
const STORAGE_NAMESPACE_TEST: &str = "budgetshare_test";

/// Resolved process configuration.
///
/// All derived values are a pure function of the resolved [`Environment`];
/// re-running configuration recomputes identical values, so an accidental
/// double call is wasteful but harmless.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    environment: Environment,
    connection: ConnectionDescriptor,
    log_level: String,
    credentials: Option<CredentialsProvider>,
}

impl ConfigRegistry {
    /// Resolves the environment from the OS process context and derives all
    /// dependent configuration. Call once at process start.
    pub fn configure() -> Self {
        let log_level = env::var(LOG_LEVEL_VAR)
            .map(|val| val.to_lowercase())
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string());
        let mut registry = Self::configure_with(Environment::resolve());
        registry.log_level = log_level;
        registry
    }

    /// Builds a registry for an explicitly injected environment.
    ///
    /// This is the constructor tests and embedders use to exercise every
    /// environment without recompilation.
    pub fn configure_with(environment: Environment) -> Self {
        let connection = ConnectionDescriptor::for_environment(environment);
        info!(%environment, "configuration resolved");
        Self {
            environment,
            connection,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            credentials: None,
        }
    }

    /// The environment resolved at configuration time.
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The cached connection descriptor for the current environment.
    pub fn connection_descriptor(&self) -> &ConnectionDescriptor {
        &self.connection
    }

    /// The connection descriptor for an explicitly named environment.
    ///
    /// Useful for tests that need to inspect a descriptor other than the
    /// current one; the mapping is fixed, so this never differs between
    /// calls.
    pub fn connection_descriptor_for(&self, environment: Environment) -> ConnectionDescriptor {
        ConnectionDescriptor::for_environment(environment)
    }

    /// Name of the persistent store instance to open for this environment.
    pub fn storage_namespace(&self) -> &'static str {
        if self.environment.is_testing() {
            STORAGE_NAMESPACE_TEST
        } else {
            STORAGE_NAMESPACE
        }
    }

    /// REST API version used as the request path prefix.
    pub fn api_version(&self) -> &'static str {
        API_VERSION
    }

    /// Log level string driving subscriber installation.
    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn set_log_level(&mut self, log_level: &str) {
        self.log_level = log_level.to_lowercase();
    }

    /// Externally supplied credentials, when configured.
    pub fn credentials(&self) -> Option<&CredentialsProvider> {
        self.credentials.as_ref()
    }

    pub fn set_credentials(&mut self, credentials: CredentialsProvider) {
        self.credentials = Some(credentials);
    }
}
