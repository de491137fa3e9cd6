//! Entity to model mappers
//!
//! This module provides conversions between domain entities (lightbnb-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod property;
mod reservation;
mod user;

pub use property::PropertyInsert;
pub use user::UserInsert;
