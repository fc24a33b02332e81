//! Application configuration

mod app_config;

pub use app_config::{
    ActuatorConfig, AppConfig, DatabaseConfig, LogFormat, LoggingConfig, ServerConfig,
};
