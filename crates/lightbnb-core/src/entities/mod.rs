//! Domain entities - core business objects

mod property;
mod reservation;
mod user;

pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::{Reservation, ReservationDetails};
pub use user::{NewUser, User};
