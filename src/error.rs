//! Error types for configuration and serving.

use thiserror::Error;

/// An unrecognised theme name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct ThemeParseError(pub String);

/// Errors raised while starting or running the server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be assembled or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The listener could not bind to the configured address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    #[test]
    fn config_failures_convert_to_app_error() {
        let err: AppError = AppConfig::load_from_args(["toolify-web", "--theme", "sepia"])
            .map_err(AppError::Config)
            .unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("configuration error:"));
    }

    #[test]
    fn bind_error_names_address() {
        let err = AppError::Bind {
            addr: "127.0.0.1:1".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().contains("127.0.0.1:1"));
    }
}
