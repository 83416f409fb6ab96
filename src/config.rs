use std::env;
use std::path::PathBuf;

use crate::db::memory::MAX_STORED_ITINERARIES;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;
const DATA_DIR: &str = "data";
const ENVIRONMENT: &str = "development";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub environment: String,
    pub max_itineraries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: HOST.to_string(),
            port: PORT,
            data_dir: PathBuf::from(DATA_DIR),
            environment: ENVIRONMENT.to_string(),
            max_itineraries: MAX_STORED_ITINERARIES,
        }
    }
}

impl AppConfig {
    /// Read server settings from the environment, keeping defaults for anything unset or invalid
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            data_dir: env::var("TRAVEL_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            environment: env::var("RUST_ENV").unwrap_or(defaults.environment),
            max_itineraries: env::var("MAX_STORED_ITINERARIES")
                .ok()
                .and_then(|n| n.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_itineraries),
        }
    }
}
