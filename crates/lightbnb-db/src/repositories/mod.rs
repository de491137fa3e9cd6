//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in lightbnb-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod property;
mod reservation;
mod search;
mod user;

pub use property::PgPropertyRepository;
pub use reservation::PgReservationRepository;
pub use search::build_search_query;
pub use user::PgUserRepository;
