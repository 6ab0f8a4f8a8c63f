//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use featurelayer::service::ServiceError;
use std::fmt;
use std::process;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Failed to create the service
    ServiceCreation(ServiceError),
    /// Failed to render output
    Render(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::ServiceCreation(_) = self {
            eprintln!();
            eprintln!("Check that --base-url points at the map backend,");
            eprintln!("e.g. --base-url http://localhost:8080");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::ServiceCreation(e) => write!(f, "Failed to create service: {}", e),
            CliError::Render(msg) => write!(f, "Failed to render output: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_init_display() {
        let err = CliError::LoggingInit("permission denied".to_string());
        assert_eq!(
            err.to_string(),
            "Failed to initialize logging: permission denied"
        );
    }

    #[test]
    fn test_service_creation_display() {
        let err = CliError::ServiceCreation(ServiceError::Config("base URL is empty".to_string()));
        assert_eq!(
            err.to_string(),
            "Failed to create service: Configuration error: base URL is empty"
        );
    }
}
