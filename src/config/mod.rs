use serde::Deserialize;
use std::env;

// Top-level configuration container. Room dimensions are deliberately not
// here: they are interactive input, read once at session start.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
}

// Application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "cinema_system=info".to_string()),
            },
        }
    }
}
