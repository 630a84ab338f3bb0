//! Backend connection descriptors derived from the active environment.

use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::error::ConfigError;

/// REST API version, used as the request path prefix.
pub const API_VERSION: &str = "v1";

/// Loopback host used by the local development backend.
const LOCAL_HOST: &str = "127.0.0.1";
/// Port the local development backend listens on.
const LOCAL_PORT: u16 = 5000;
/// Host serving both the remote development and production backends.
const REMOTE_HOST: &str = "budgetshare-development.herokuapp.com";

/// Where outgoing requests should be directed.
///
/// A descriptor is a value: it is derived deterministically from an
/// [`Environment`] and carries no connection state. Request builders read it;
/// nothing here performs network I/O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    /// URL scheme (`http` or `https`); empty under the test harness.
    pub scheme: String,
    /// Backend host; unset under the test harness.
    pub host: Option<String>,
    /// Explicit port, when the scheme default does not apply.
    pub port: Option<u16>,
    /// Path prefix prepended to every request path.
    pub path_prefix: String,
}

impl ConnectionDescriptor {
    /// Returns the fixed descriptor for the given environment.
    ///
    /// The mapping is the single source of truth for backend targets; calling
    /// this repeatedly yields identical values.
    pub fn for_environment(environment: Environment) -> Self {
        match environment {
            Environment::DevelopmentLocal => Self {
                scheme: "http".to_string(),
                host: Some(LOCAL_HOST.to_string()),
                port: Some(LOCAL_PORT),
                path_prefix: API_VERSION.to_string(),
            },
            Environment::DevelopmentRemote | Environment::Production => Self {
                scheme: "https".to_string(),
                host: Some(REMOTE_HOST.to_string()),
                port: None,
                path_prefix: API_VERSION.to_string(),
            },
            // No network access is expected under the test harness, so the
            // descriptor is left empty rather than pointed anywhere.
            Environment::Testing => Self {
                scheme: String::new(),
                host: None,
                port: None,
                path_prefix: API_VERSION.to_string(),
            },
        }
    }

    /// Renders the base URL for request building, or `None` when the
    /// descriptor carries no target (the testing descriptor).
    pub fn base_url(&self) -> Option<String> {
        let host = self.host.as_deref()?;
        if self.scheme.is_empty() {
            return None;
        }
        let url = match self.port {
            Some(port) => format!("{}://{host}:{port}/{}", self.scheme, self.path_prefix),
            None => format!("{}://{host}/{}", self.scheme, self.path_prefix),
        };
        Some(url)
    }

    /// Validates the descriptor invariants.
    ///
    /// Non-testing descriptors must carry a non-empty scheme and host; the
    /// testing descriptor must carry neither.
    pub fn validate(&self, environment: Environment) -> Result<(), ConfigError> {
        if environment.is_testing() {
            if !self.scheme.is_empty() || self.host.is_some() || self.port.is_some() {
                return Err(ConfigError::InvalidConfig(
                    "testing descriptor must not carry a backend target".to_string(),
                ));
            }
            return Ok(());
        }

        if self.scheme.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(format!(
                "scheme cannot be empty for {environment}"
            )));
        }
        match self.host.as_deref() {
            Some(host) if !host.trim().is_empty() => Ok(()),
            _ => Err(ConfigError::InvalidConfig(format!(
                "host cannot be empty for {environment}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_local_descriptor_matches_mapping() {
        let descriptor = ConnectionDescriptor::for_environment(Environment::DevelopmentLocal);
        assert_eq!(descriptor.scheme, "http");
        assert_eq!(descriptor.host.as_deref(), Some(LOCAL_HOST));
        assert_eq!(descriptor.port, Some(LOCAL_PORT));
        assert_eq!(descriptor.path_prefix, "v1");
    }

    #[test]
    fn remote_environments_share_the_backend_host() {
        let remote = ConnectionDescriptor::for_environment(Environment::DevelopmentRemote);
        let production = ConnectionDescriptor::for_environment(Environment::Production);
        assert_eq!(remote, production);
        assert_eq!(remote.scheme, "https");
        assert_eq!(remote.host.as_deref(), Some(REMOTE_HOST));
        assert_eq!(remote.port, None);
    }

    #[test]
    fn testing_descriptor_carries_no_target() {
        let descriptor = ConnectionDescriptor::for_environment(Environment::Testing);
        assert!(descriptor.scheme.is_empty());
        assert!(descriptor.host.is_none());
        assert!(descriptor.port.is_none());
        assert_eq!(descriptor.base_url(), None);
    }

    /// Derivation is pure: repeated calls yield identical descriptors.
    #[test]
    fn derivation_is_deterministic() {
        for environment in [
            Environment::Testing,
            Environment::Production,
            Environment::DevelopmentLocal,
            Environment::DevelopmentRemote,
        ] {
            assert_eq!(
                ConnectionDescriptor::for_environment(environment),
                ConnectionDescriptor::for_environment(environment),
            );
        }
    }

    #[test]
    fn base_url_includes_explicit_port() {
        let descriptor = ConnectionDescriptor::for_environment(Environment::DevelopmentLocal);
        assert_eq!(
            descriptor.base_url().as_deref(),
            Some("http://127.0.0.1:5000/v1")
        );
    }

    #[test]
    fn base_url_omits_default_port() {
        let descriptor = ConnectionDescriptor::for_environment(Environment::Production);
        assert_eq!(
            descriptor.base_url().as_deref(),
            Some("https://budgetshare-development.herokuapp.com/v1")
        );
    }

    #[test]
    fn validate_accepts_every_mapped_descriptor() {
        for environment in [
            Environment::Testing,
            Environment::Production,
            Environment::DevelopmentLocal,
            Environment::DevelopmentRemote,
        ] {
            let descriptor = ConnectionDescriptor::for_environment(environment);
            assert!(descriptor.validate(environment).is_ok());
        }
    }

    #[test]
    fn validate_rejects_empty_host_outside_testing() {
        let mut descriptor = ConnectionDescriptor::for_environment(Environment::Production);
        descriptor.host = Some("   ".to_string());
        assert!(descriptor.validate(Environment::Production).is_err());

        descriptor.host = None;
        assert!(descriptor.validate(Environment::Production).is_err());
    }

    #[test]
    fn validate_rejects_target_under_testing() {
        let descriptor = ConnectionDescriptor::for_environment(Environment::Production);
        assert!(descriptor.validate(Environment::Testing).is_err());
    }
}
