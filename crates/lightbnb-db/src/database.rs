//! Data-access handle
//!
//! [`Database`] bundles the repositories behind trait objects and exposes the
//! booking operations. Callers construct it once and pass it where needed;
//! tests can swap in their own repository implementations.

use std::sync::Arc;

use sqlx::PgPool;
use tracing::instrument;

use lightbnb_core::entities::{
    NewProperty, NewUser, Property, PropertyListing, ReservationDetails, User,
};
use lightbnb_core::traits::{
    clamp_limit, PropertyRepository, PropertySearch, RepoResult, ReservationRepository,
    UserRepository, DEFAULT_LIMIT,
};
use lightbnb_core::value_objects::UserId;

use crate::repositories::{PgPropertyRepository, PgReservationRepository, PgUserRepository};

/// Data-access handle for users, properties and reservations
#[derive(Clone)]
pub struct Database {
    users: Arc<dyn UserRepository>,
    properties: Arc<dyn PropertyRepository>,
    reservations: Arc<dyn ReservationRepository>,
}

impl Database {
    /// Create a handle from explicit repository implementations
    pub fn new(
        users: Arc<dyn UserRepository>,
        properties: Arc<dyn PropertyRepository>,
        reservations: Arc<dyn ReservationRepository>,
    ) -> Self {
        Self {
            users,
            properties,
            reservations,
        }
    }

    /// Create a handle backed by PostgreSQL repositories sharing `pool`
    pub fn from_pool(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgPropertyRepository::new(pool.clone())),
            Arc::new(PgReservationRepository::new(pool)),
        )
    }

    // === Users ===

    /// Get a single user by email; `Ok(None)` when no user matches
    #[instrument(skip(self))]
    pub async fn get_user_with_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.users.find_by_email(email).await
    }

    /// Get a single user by id; `Ok(None)` when no user matches
    #[instrument(skip(self))]
    pub async fn get_user_with_id(&self, id: UserId) -> RepoResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    /// Add a new user and return it with its generated id
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn add_user(&self, user: &NewUser) -> RepoResult<User> {
        self.users.create(user).await
    }

    // === Reservations ===

    /// Get a guest's completed reservations, earliest first
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`].
    #[instrument(skip(self))]
    pub async fn get_all_reservations(
        &self,
        guest_id: UserId,
        limit: Option<i64>,
    ) -> RepoResult<Vec<ReservationDetails>> {
        self.reservations
            .find_completed_by_guest(guest_id, effective_limit(limit))
            .await
    }

    // === Properties ===

    /// Search properties, cheapest first
    ///
    /// `limit` defaults to [`DEFAULT_LIMIT`].
    #[instrument(skip(self))]
    pub async fn get_all_properties(
        &self,
        search: &PropertySearch,
        limit: Option<i64>,
    ) -> RepoResult<Vec<PropertyListing>> {
        self.properties.search(search, effective_limit(limit)).await
    }

    /// Add a property and return it with its generated id
    #[instrument(skip(self, property), fields(owner_id = %property.owner_id))]
    pub async fn add_property(&self, property: &NewProperty) -> RepoResult<Property> {
        self.properties.create(property).await
    }
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

fn effective_limit(limit: Option<i64>) -> i64 {
    clamp_limit(limit.unwrap_or(DEFAULT_LIMIT))
}
