//! Database models - SQLx-compatible structs for PostgreSQL tables

mod property;
mod reservation;
mod user;

pub use property::{PropertyListingModel, PropertyModel};
pub use reservation::ReservationDetailsModel;
pub use user::UserModel;
