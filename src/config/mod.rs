use std::env;

/// Default location of the Superstore order export.
pub const DEFAULT_ORDERS_SOURCE: &str =
    "https://raw.githubusercontent.com/teejay13/Supperstore_with_Dash/main/Sample_Superstore.csv";

/// Default location of the state name to abbreviation lookup.
pub const DEFAULT_STATES_SOURCE: &str =
    "https://raw.githubusercontent.com/teejay13/Supperstore_with_Dash/main/states.csv";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub orders_source: String,
    pub states_source: String,
    pub host: String,
    pub port: u16,
    pub frontend_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, env::VarError> {
        Ok(Self {
            orders_source: env::var("ORDERS_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_ORDERS_SOURCE.to_string()),
            states_source: env::var("STATES_SOURCE_URL")
                .unwrap_or_else(|_| DEFAULT_STATES_SOURCE.to_string()),
            host: env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BACKEND_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:8050".to_string()),
        })
    }
}
