//! PostgreSQL implementation of PropertyRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use lightbnb_core::entities::{NewProperty, Property, PropertyListing};
use lightbnb_core::error::DomainError;
use lightbnb_core::traits::{PropertyRepository, PropertySearch, RepoResult};

use crate::mappers::PropertyInsert;
use crate::models::{PropertyListingModel, PropertyModel};

use super::error::{map_db_error, map_foreign_key_violation};
use super::search::build_search_query;

/// PostgreSQL implementation of PropertyRepository
#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    /// Create a new PgPropertyRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    #[instrument(skip(self))]
    async fn search(
        &self,
        search: &PropertySearch,
        limit: i64,
    ) -> RepoResult<Vec<PropertyListing>> {
        let mut query = build_search_query(search, limit);
        debug!(sql = query.sql(), "Property search");

        let results = query
            .build_query_as::<PropertyListingModel>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PropertyListing::from).collect())
    }

    #[instrument(skip(self, property), fields(owner_id = %property.owner_id))]
    async fn create(&self, property: &NewProperty) -> RepoResult<Property> {
        let insert = PropertyInsert::try_new(property)?;

        let model = sqlx::query_as::<_, PropertyModel>(
            r"
            INSERT INTO properties (
                owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                country, street, city, province, post_code, active
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, owner_id, title, description, thumbnail_photo_url, cover_photo_url,
                      cost_per_night, parking_spaces, number_of_bathrooms, number_of_bedrooms,
                      country, street, city, province, post_code, active
            ",
        )
        .bind(insert.owner_id)
        .bind(insert.title)
        .bind(insert.description)
        .bind(insert.thumbnail_photo_url)
        .bind(insert.cover_photo_url)
        .bind(insert.cost_per_night)
        .bind(insert.parking_spaces)
        .bind(insert.number_of_bathrooms)
        .bind(insert.number_of_bedrooms)
        .bind(insert.country)
        .bind(insert.street)
        .bind(insert.city)
        .bind(insert.province)
        .bind(insert.post_code)
        .bind(insert.active)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_foreign_key_violation(e, || DomainError::UserNotFound(property.owner_id)))?;

        Ok(Property::from(model))
    }
}
