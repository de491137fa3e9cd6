//! Repository traits and query options

mod repositories;

pub use repositories::{
    clamp_limit, PropertyRepository, PropertySearch, RepoResult, ReservationRepository,
    UserRepository, DEFAULT_LIMIT,
};
