use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct MockConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_service_name")]
    pub service_name: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_port() -> u16 {
    9090
}

fn default_service_name() -> String {
    "sinvoice-mock".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            service_name: default_service_name(),
            log_level: default_log_level(),
        }
    }
}

impl MockConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
