//! # lightbnb-db
//!
//! Data-access layer for the LightBnB booking store, backed by PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the repository traits
//! defined in `lightbnb-core`. It handles:
//!
//! - Connection pool management and schema migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the property search builder
//! - The [`Database`] handle exposing the booking operations
//! - Fixture loading from JSON
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lightbnb_common::AppConfig;
//! use lightbnb_db::{create_pool, run_migrations, Database, DatabaseConfig};
//! use lightbnb_core::PropertySearch;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let pool = create_pool(&DatabaseConfig::from(&config.database)).await?;
//!     run_migrations(&pool).await?;
//!
//!     let db = Database::from_pool(pool);
//!     let search = PropertySearch::new().city("Vancouver").max_price(150);
//!     let listings = db.get_all_properties(&search, Some(5)).await?;
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;
pub mod seed;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use database::Database;
pub use pool::{create_pool, run_migrations, run_migrations_from, DatabaseConfig, PgPool};
pub use repositories::{
    build_search_query, PgPropertyRepository, PgReservationRepository, PgUserRepository,
};
pub use seed::{load_dir, load_fixtures, SeedError, SeedReport};
