use std::env;
use std::net::{IpAddr, SocketAddr};

/// Environment variables read by [`AppConfig::load`].
pub const ENV_VAR: &str = "HOUSING_ENV";
pub const HOST_VAR: &str = "HOUSING_HOST";
pub const PORT_VAR: &str = "HOUSING_PORT";
pub const LOG_LEVEL_VAR: &str = "HOUSING_LOG_LEVEL";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";

/// Deployment stage of the portal, used only for reporting at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    pub const fn label(self) -> &'static str {
        match self {
            AppEnvironment::Development => "development",
            AppEnvironment::Test => "test",
            AppEnvironment::Production => "production",
        }
    }

    /// Unknown tokens fall back to Development so a typo never flips a
    /// process into production behavior.
    fn parse(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the portal service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&env_or(ENV_VAR, "development"));

        let port_value = env_or(PORT_VAR, &DEFAULT_PORT.to_string());
        let port = port_value
            .parse::<u16>()
            .map_err(|_| ConfigError::Port { value: port_value })?;

        Ok(Self {
            environment,
            server: ServerConfig {
                host: env_or(HOST_VAR, DEFAULT_HOST),
                port,
            },
            telemetry: TelemetryConfig {
                log_level: env_or(LOG_LEVEL_VAR, DEFAULT_LOG_LEVEL),
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Resolve the configured host and port to a bindable address.
    /// `localhost` is accepted as an alias for the IPv4 loopback.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip = self.host.parse::<IpAddr>().map_err(|_| ConfigError::Host {
            value: self.host.clone(),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("HOUSING_PORT '{value}' is not a valid port number")]
    Port { value: String },
    #[error("HOUSING_HOST '{value}' is not an IP address or 'localhost'")]
    Host { value: String },
}
