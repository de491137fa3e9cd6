//! Property entity - a rentable listing

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::value_objects::{Cents, PropertyId, UserId};

/// Property entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub owner_id: UserId,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    pub cost_per_night: Cents,
    pub parking_spaces: i32,
    pub number_of_bathrooms: i32,
    pub number_of_bedrooms: i32,
    pub country: String,
    pub street: String,
    pub city: String,
    pub province: String,
    pub post_code: String,
    pub active: bool,
}

impl Property {
    /// Check if the property is owned by the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

/// A property together with the average of its review ratings
///
/// `average_rating` is `None` when the property has no reviews yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyListing {
    #[serde(flatten)]
    pub property: Property,
    pub average_rating: Option<f64>,
}

/// Data for inserting a new property; the store assigns the id
///
/// `cost_per_night` is in cents, matching the stored column.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct NewProperty {
    pub owner_id: UserId,

    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub thumbnail_photo_url: String,

    #[serde(default)]
    pub cover_photo_url: String,

    #[validate(custom(function = "validate_cost"))]
    pub cost_per_night: Cents,

    #[serde(default)]
    #[validate(range(min = 0, message = "Parking spaces cannot be negative"))]
    pub parking_spaces: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Bathrooms cannot be negative"))]
    pub number_of_bathrooms: i32,

    #[serde(default)]
    #[validate(range(min = 0, message = "Bedrooms cannot be negative"))]
    pub number_of_bedrooms: i32,

    pub country: String,
    pub street: String,

    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,

    pub province: String,
    pub post_code: String,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

fn validate_cost(cost: &Cents) -> Result<(), ValidationError> {
    if cost.into_inner() < 0 {
        return Err(ValidationError::new("negative_cost")
            .with_message("Cost per night cannot be negative".into()));
    }
    Ok(())
}
