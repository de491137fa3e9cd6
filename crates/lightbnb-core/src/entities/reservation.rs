//! Reservation entity - a guest's stay at a property

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::property::Property;
use crate::value_objects::{PropertyId, ReservationId, UserId};

/// Reservation entity
///
/// The store guarantees `end_date > start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub guest_id: UserId,
    pub property_id: PropertyId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Reservation {
    /// Number of nights booked
    pub fn nights(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// A stay is completed once its end date is strictly before `today`
    pub fn is_completed(&self, today: NaiveDate) -> bool {
        self.end_date < today
    }
}

/// A completed reservation joined with its property and average rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub property: Property,
    pub average_rating: Option<f64>,
}
