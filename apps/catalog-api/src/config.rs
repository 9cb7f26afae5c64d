//! Configuration for the Catalog API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// What to do when the startup database check fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartupCheck {
    /// Fail fast: refuse to start without a reachable database
    Required,
    /// Log the failure and serve anyway; requests answer 500 until the
    /// database comes back
    Lenient,
}

impl StartupCheck {
    fn from_env() -> Self {
        let value = std::env::var("DB_STARTUP_CHECK").unwrap_or_else(|_| "required".to_string());

        if value.eq_ignore_ascii_case("lenient") {
            StartupCheck::Lenient
        } else {
            StartupCheck::Required
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub postgres: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
    pub db_startup: StartupCheck,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let postgres = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            postgres,
            server,
            environment,
            db_startup: StartupCheck::from_env(),
        })
    }
}
