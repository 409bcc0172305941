use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing session tokens
    pub secret: String,
    /// Token lifetime embedded in the `exp` claim
    pub token_lifetime_seconds: u64,
    /// Clock-skew tolerance applied when validating `exp`
    #[serde(default = "default_leeway_seconds")]
    pub leeway_seconds: u64,
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CorsConfig {
    /// Origin allowed to call the API with credentials
    #[serde(default = "default_client_origin")]
    pub client_origin: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            client_origin: default_client_origin(),
        }
    }
}

fn default_leeway_seconds() -> u64 {
    30
}

fn default_client_origin() -> String {
    "http://localhost:5173".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (COOKIEGATE__AUTH__SECRET, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        // Set defaults
        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3010)?
            .set_default("auth.token_lifetime_seconds", 3600)?
            .set_default("auth.leeway_seconds", 30)?
            .set_default("auth.admin_username", "admin")?
            .set_default("auth.admin_password", "password")?
            .set_default("cors.client_origin", default_client_origin())?;

        // Load config file if path provided or CONFIG_PATH env var set
        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Try to load config file (optional - ignore if not found)
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        // Override with environment variables (COOKIEGATE__SERVER__PORT, etc.)
        builder = builder.add_source(
            Environment::with_prefix("COOKIEGATE")
                .separator("__")
                .try_parsing(true),
        );

        // Also support the legacy environment variable without prefix
        if let Ok(jwt_secret) = env::var("JWT_SECRET") {
            builder = builder.set_override("auth.secret", jwt_secret)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.auth.secret.len() < 32 {
            return Err("Auth secret must be at least 32 characters long".to_string());
        }
        if self.auth.token_lifetime_seconds == 0 {
            return Err("Token lifetime must be greater than 0".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
