//! Property database models

use sqlx::FromRow;

/// Database model for properties table
#[derive(Debug, Clone, FromRow)]
pub struct PropertyModel {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub description: String,
    pub thumbnail_photo_url: String,
    pub cover_photo_url: String,
    /// Cents
    pub cost_per_night: i32,
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

/// Property row joined with the average of its review ratings
#[derive(Debug, Clone, FromRow)]
pub struct PropertyListingModel {
    #[sqlx(flatten)]
    pub property: PropertyModel,
    pub average_rating: Option<f64>,
}
