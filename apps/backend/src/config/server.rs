use crate::config::store::optional_var;
use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3001;

/// Where the HTTP server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `BACKEND_HOST` and `BACKEND_PORT`.
    pub fn from_env() -> Result<Self, AppError> {
        let host = optional_var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match optional_var("BACKEND_PORT") {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::config(format!("BACKEND_PORT must be a valid port number, got '{raw}'"))
            })?,
        };
        Ok(Self { host, port })
    }
}
