//! Reservation entity <-> model mapper

use lightbnb_core::entities::{Property, Reservation, ReservationDetails};
use lightbnb_core::value_objects::{PropertyId, ReservationId, UserId};

use crate::models::ReservationDetailsModel;

impl From<ReservationDetailsModel> for ReservationDetails {
    fn from(model: ReservationDetailsModel) -> Self {
        let reservation = Reservation {
            id: ReservationId::new(model.reservation_id),
            guest_id: UserId::new(model.guest_id),
            property_id: PropertyId::new(model.property.id),
            start_date: model.start_date,
            end_date: model.end_date,
        };

        ReservationDetails {
            reservation,
            property: Property::from(model.property),
            average_rating: model.average_rating,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::mappers::property::sample_model;

    #[test]
    fn test_details_take_property_id_from_join() {
        let details = ReservationDetails::from(ReservationDetailsModel {
            property: sample_model(12, 15000),
            reservation_id: 40,
            guest_id: 3,
            start_date: NaiveDate::from_ymd_opt(2018, 9, 11).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2018, 9, 26).unwrap(),
            average_rating: None,
        });
        assert_eq!(details.reservation.id, ReservationId::new(40));
        assert_eq!(details.reservation.property_id, PropertyId::new(12));
        assert_eq!(details.property.id, PropertyId::new(12));
        assert_eq!(details.reservation.nights(), 15);
    }
}
