use crate::config::ConfigError;
use crate::portal::PortalError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Top-level failure surfaced by the service shell.
///
/// Portal errors carry their own HTTP mapping and bubble through unchanged;
/// the remaining variants are startup faults reported on the CLI before the
/// server ever accepts a request.
#[derive(Debug)]
pub enum AppError {
    Portal(PortalError),
    Config(ConfigError),
    Telemetry(TelemetryError),
    Network(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Portal(err) => write!(f, "{err}"),
            AppError::Config(err) => write!(f, "failed to load configuration: {err}"),
            AppError::Telemetry(err) => write!(f, "failed to initialize tracing: {err}"),
            AppError::Network(err) => write!(f, "network failure: {err}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Portal(err) => Some(err),
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Network(err) => Some(err),
        }
    }
}

impl From<PortalError> for AppError {
    fn from(value: PortalError) -> Self {
        Self::Portal(value)
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Network(value)
    }
}
