//! # lightbnb-core
//!
//! Domain layer containing entities, value objects and repository traits for
//! the LightBnB booking store.
//! This crate has zero dependencies on infrastructure (database, runtime, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    NewProperty, NewUser, Property, PropertyListing, Reservation, ReservationDetails, User,
};
pub use error::DomainError;
pub use traits::{
    clamp_limit, PropertyRepository, PropertySearch, RepoResult, ReservationRepository,
    UserRepository, DEFAULT_LIMIT,
};
pub use value_objects::{Cents, IdParseError, PropertyId, ReservationId, UserId};
