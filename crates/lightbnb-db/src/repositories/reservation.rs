//! PostgreSQL implementation of ReservationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use lightbnb_core::entities::ReservationDetails;
use lightbnb_core::traits::{clamp_limit, RepoResult, ReservationRepository};
use lightbnb_core::value_objects::UserId;

use crate::models::ReservationDetailsModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReservationRepository
#[derive(Clone)]
pub struct PgReservationRepository {
    pool: PgPool,
}

impl PgReservationRepository {
    /// Create a new PgReservationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for PgReservationRepository {
    #[instrument(skip(self))]
    async fn find_completed_by_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> RepoResult<Vec<ReservationDetails>> {
        let results = sqlx::query_as::<_, ReservationDetailsModel>(
            r"
            SELECT properties.*,
                   reservations.id AS reservation_id,
                   reservations.guest_id,
                   reservations.start_date,
                   reservations.end_date,
                   avg(property_reviews.rating)::float8 AS average_rating
            FROM reservations
            JOIN properties ON reservations.property_id = properties.id
            LEFT JOIN property_reviews ON properties.id = property_reviews.property_id
            WHERE reservations.guest_id = $1
              AND reservations.end_date < now()::date
            GROUP BY properties.id, reservations.id
            ORDER BY reservations.start_date, reservations.id
            LIMIT $2
            ",
        )
        .bind(guest_id.into_inner())
        .bind(clamp_limit(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(ReservationDetails::from).collect())
    }
}
