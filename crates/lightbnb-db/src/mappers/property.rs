//! Property entity <-> model mapper

use lightbnb_core::entities::{NewProperty, Property, PropertyListing};
use lightbnb_core::error::DomainError;
use lightbnb_core::value_objects::{Cents, PropertyId, UserId};

use crate::models::{PropertyListingModel, PropertyModel};

/// Convert PropertyModel to Property entity
impl From<PropertyModel> for Property {
    fn from(model: PropertyModel) -> Self {
        Property {
            id: PropertyId::new(model.id),
            owner_id: UserId::new(model.owner_id),
            title: model.title,
            description: model.description,
            thumbnail_photo_url: model.thumbnail_photo_url,
            cover_photo_url: model.cover_photo_url,
            cost_per_night: Cents::new(i64::from(model.cost_per_night)),
            parking_spaces: model.parking_spaces,
            number_of_bathrooms: model.number_of_bathrooms,
            number_of_bedrooms: model.number_of_bedrooms,
            country: model.country,
            street: model.street,
            city: model.city,
            province: model.province,
            post_code: model.post_code,
            active: model.active,
        }
    }
}

impl From<PropertyListingModel> for PropertyListing {
    fn from(model: PropertyListingModel) -> Self {
        PropertyListing {
            property: Property::from(model.property),
            average_rating: model.average_rating,
        }
    }
}

/// Borrowed column values for inserting a property
///
/// `cost_per_night` is narrowed to the `INTEGER` column type.
pub struct PropertyInsert<'a> {
    pub owner_id: i64,
    pub title: &'a str,
    pub description: &'a str,
    pub thumbnail_photo_url: &'a str,
    pub cover_photo_url: &'a str,
    pub cost_per_night: i32,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub province: &'a str,
    pub post_code: &'a str,
    pub active: bool,
}

impl<'a> PropertyInsert<'a> {
    pub fn try_new(property: &'a NewProperty) -> Result<Self, DomainError> {
        let cost_per_night = i32::try_from(property.cost_per_night.into_inner())
            .map_err(|_| {
                DomainError::ValidationError(format!(
                    "Cost per night out of range: {}",
                    property.cost_per_night
                ))
            })?;

        Ok(Self {
            owner_id: property.owner_id.into_inner(),
            title: &property.title,
            description: &property.description,
            thumbnail_photo_url: &property.thumbnail_photo_url,
            cover_photo_url: &property.cover_photo_url,
            cost_per_night,
            parking_spaces: property.parking_spaces,
            number_of_bathrooms: property.number_of_bathrooms,
            number_of_bedrooms: property.number_of_bedrooms,
            country: &property.country,
            street: &property.street,
            city: &property.city,
            province: &property.province,
            post_code: &property.post_code,
            active: property.active,
        })
    }
}

#[cfg(test)]
pub(crate) fn sample_model(id: i64, cost_per_night: i32) -> PropertyModel {
    PropertyModel {
        id,
        owner_id: 1,
        title: format!("Property {id}"),
        description: "description".to_string(),
        thumbnail_photo_url: String::new(),
        cover_photo_url: String::new(),
        cost_per_night,
        parking_spaces: 1,
        number_of_bathrooms: 2,
        number_of_bedrooms: 3,
        country: "Canada".to_string(),
        street: "1 Main St".to_string(),
        city: "Vancouver".to_string(),
        province: "British Columbia".to_string(),
        post_code: "V5K 0A1".to_string(),
        active: true,
    }
}
