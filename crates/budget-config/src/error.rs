/// Errors that can occur when working with the configuration registry.
///
/// Environment resolution itself is total and never fails; these cover
/// descriptor validation and logging setup only.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = ConfigError::InvalidConfig("host cannot be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: host cannot be empty"
        );
    }

    #[test]
    fn test_error_debug() {
        let error = ConfigError::Logging("subscriber already set".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("Logging"));
    }
}
