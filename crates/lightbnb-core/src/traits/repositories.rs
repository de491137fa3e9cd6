//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use serde::Deserialize;

use crate::entities::{
    NewProperty, NewUser, Property, PropertyListing, ReservationDetails, User,
};
use crate::error::DomainError;
use crate::value_objects::{Cents, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

/// Row cap used when the caller does not pass one
pub const DEFAULT_LIMIT: i64 = 10;

/// Clamp a caller-supplied row cap to be non-negative
///
/// Any non-negative cap is passed through unchanged.
#[inline]
pub fn clamp_limit(limit: i64) -> i64 {
    limit.max(0)
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by email (exact, case-sensitive match)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Insert a new user and return the stored row
    async fn create(&self, user: &NewUser) -> RepoResult<User>;
}

// ============================================================================
// Property Repository
// ============================================================================

/// Filters for property search
///
/// Every field is optional; absent fields add no predicate. Prices are whole
/// dollars and are compared against the stored cents. A `minimum_rating` of
/// zero or below is treated as absent, so unreviewed properties are still
/// listed. Also deserializes from
/// the camelCase names (`ownerId`, `minPrice`, `maxPrice`, `minRating`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PropertySearch {
    /// Substring of the city name
    #[serde(default)]
    pub city: Option<String>,

    #[serde(default, alias = "ownerId")]
    pub owner_id: Option<UserId>,

    #[serde(default, alias = "minPrice")]
    pub minimum_price_per_night: Option<i64>,

    #[serde(default, alias = "maxPrice")]
    pub maximum_price_per_night: Option<i64>,

    /// Lower bound on the average review rating
    #[serde(default, alias = "minRating")]
    pub minimum_rating: Option<f64>,
}

impl PropertySearch {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    #[must_use]
    pub fn min_price(mut self, dollars: i64) -> Self {
        self.minimum_price_per_night = Some(dollars);
        self
    }

    #[must_use]
    pub fn max_price(mut self, dollars: i64) -> Self {
        self.maximum_price_per_night = Some(dollars);
        self
    }

    #[must_use]
    pub fn min_rating(mut self, rating: f64) -> Self {
        self.minimum_rating = Some(rating);
        self
    }

    /// City filter, ignoring blank input
    pub fn city_filter(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }

    /// Lower price bound converted to cents
    pub fn min_cost(&self) -> Option<Cents> {
        self.minimum_price_per_night.map(Cents::from_dollars)
    }

    /// Upper price bound converted to cents
    pub fn max_cost(&self) -> Option<Cents> {
        self.maximum_price_per_night.map(Cents::from_dollars)
    }

    /// Average-rating floor, ignoring values that exclude nothing
    pub fn rating_filter(&self) -> Option<f64> {
        self.minimum_rating.filter(|r| *r > 0.0)
    }
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Search properties, cheapest first, with their average rating
    async fn search(&self, search: &PropertySearch, limit: i64)
        -> RepoResult<Vec<PropertyListing>>;

    /// Insert a new property and return the stored row
    async fn create(&self, property: &NewProperty) -> RepoResult<Property>;
}

// ============================================================================
// Reservation Repository
// ============================================================================

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// List a guest's completed reservations, earliest start first
    async fn find_completed_by_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> RepoResult<Vec<ReservationDetails>>;
}
