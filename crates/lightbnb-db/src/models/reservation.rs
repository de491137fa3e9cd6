//! Reservation database models

use chrono::NaiveDate;
use sqlx::FromRow;

use super::property::PropertyModel;

/// Completed reservation joined with its property
///
/// `properties.*` supplies the flattened property columns, so the
/// reservation's own id is selected as `reservation_id`.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationDetailsModel {
    #[sqlx(flatten)]
    pub property: PropertyModel,
    pub reservation_id: i64,
    pub guest_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub average_rating: Option<f64>,
}
