use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::AppError;

const DEFAULT_CONFIG: &str = include_str!("../../resources/config/default.toml");
const DEFAULT_CONFIG_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub service_host: String,
    pub service_port: u16,
    pub statsd_host: String,
    pub statsd_port: u16,
}

impl AppConfig {
    pub fn new() -> Result<Self, AppError> {
        let config = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(Environment::with_prefix(DEFAULT_CONFIG_PREFIX))
            .build()?;

        config.try_deserialize().map_err(|e| e.into())
    }
}
