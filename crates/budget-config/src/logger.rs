//! One-shot logging setup driven by the configuration registry.

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::registry::ConfigRegistry;

/// Installs the global `tracing` subscriber using the registry's log level.
///
/// Noisy transport internals are filtered out regardless of the configured
/// level. Fails if the filter string cannot be parsed or a subscriber is
/// already installed; callers treat both as boot-time configuration errors.
pub fn init_logging(registry: &ConfigRegistry) -> Result<(), ConfigError> {
    let env_filter = format!("h2=off,hyper=off,rustls=off,{}", registry.log_level());
    let filter =
        EnvFilter::try_new(env_filter).map_err(|err| ConfigError::Logging(err.to_string()))?;

    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_level(true)
        .with_thread_names(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .with_file(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| ConfigError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Environment;

    #[test]
    fn invalid_log_level_is_reported_not_panicked() {
        let mut registry = ConfigRegistry::configure_with(Environment::Testing);
        registry.set_log_level("no,such=level=");
        assert!(matches!(
            init_logging(&registry),
            Err(ConfigError::Logging(_))
        ));
    }

    #[test]
    fn second_installation_fails_cleanly() {
        let registry = ConfigRegistry::configure_with(Environment::Testing);
        let first = init_logging(&registry);
        let second = init_logging(&registry);
        // Only one global subscriber can ever be installed; the losing call
        // must surface an error rather than panic.
        if first.is_ok() {
            assert!(matches!(second, Err(ConfigError::Logging(_))));
        }
    }
}
