//! PostgreSQL connectivity for the catalog services.
//!
//! Wraps SeaORM with configuration loading, connection retry with
//! exponential backoff, a `SELECT 1` health check and a generic
//! migration runner.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config_with_retry(config, None).await?;
//! postgres::check_health(&db).await?;
//! postgres::run_migrations::<migration::Migrator>(&db, "catalog_api").await?;
//! ```

pub mod common;
pub mod postgres;

pub use common::{DatabaseError, DatabaseResult};
