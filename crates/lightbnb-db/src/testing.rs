//! In-memory repositories for unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use lightbnb_core::entities::{
    NewProperty, NewUser, Property, PropertyListing, Reservation, ReservationDetails, User,
};
use lightbnb_core::error::DomainError;
use lightbnb_core::traits::{
    PropertyRepository, PropertySearch, RepoResult, ReservationRepository, UserRepository,
};
use lightbnb_core::value_objects::{Cents, PropertyId, ReservationId, UserId};

use crate::database::Database;

/// In-memory stand-in for all three repositories
#[derive(Default)]
pub(crate) struct MemoryStore {
    users: Mutex<Vec<User>>,
    properties: Mutex<Vec<Property>>,
    pub(crate) last_limit: Mutex<Option<i64>>,
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.has_email(email)).cloned())
    }

    async fn create(&self, user: &NewUser) -> RepoResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        let created = User {
            id: UserId::new(users.len() as i64 + 1),
            name: user.name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
        };
        users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl PropertyRepository for MemoryStore {
    async fn search(
        &self,
        search: &PropertySearch,
        limit: i64,
    ) -> RepoResult<Vec<PropertyListing>> {
        *self.last_limit.lock().unwrap() = Some(limit);
        let mut matches: Vec<Property> = self
            .properties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| search.city_filter().map_or(true, |c| p.city.contains(c)))
            .filter(|p| search.owner_id.map_or(true, |o| p.is_owned_by(o)))
            .filter(|p| search.min_cost().map_or(true, |c| p.cost_per_night >= c))
            .filter(|p| search.max_cost().map_or(true, |c| p.cost_per_night <= c))
            .cloned()
            .collect();
        matches.sort_by_key(|p| (p.cost_per_night, p.id));
        matches.truncate(limit as usize);
        Ok(matches
            .into_iter()
            .map(|property| PropertyListing {
                property,
                average_rating: None,
            })
            .collect())
    }

    async fn create(&self, property: &NewProperty) -> RepoResult<Property> {
        if self.users.lock().unwrap().iter().all(|u| u.id != property.owner_id) {
            return Err(DomainError::UserNotFound(property.owner_id));
        }
        let mut properties = self.properties.lock().unwrap();
        let created = Property {
            id: PropertyId::new(properties.len() as i64 + 1),
            owner_id: property.owner_id,
            title: property.title.clone(),
            description: property.description.clone(),
            thumbnail_photo_url: property.thumbnail_photo_url.clone(),
            cover_photo_url: property.cover_photo_url.clone(),
            cost_per_night: property.cost_per_night,
            parking_spaces: property.parking_spaces,
            number_of_bathrooms: property.number_of_bathrooms,
            number_of_bedrooms: property.number_of_bedrooms,
            country: property.country.clone(),
            street: property.street.clone(),
            city: property.city.clone(),
            province: property.province.clone(),
            post_code: property.post_code.clone(),
            active: property.active,
        };
        properties.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ReservationRepository for MemoryStore {
    async fn find_completed_by_guest(
        &self,
        guest_id: UserId,
        limit: i64,
    ) -> RepoResult<Vec<ReservationDetails>> {
        *self.last_limit.lock().unwrap() = Some(limit);
        let properties = self.properties.lock().unwrap();
        let Some(property) = properties.first().cloned() else {
            return Ok(Vec::new());
        };
        let reservation = Reservation {
            id: ReservationId::new(1),
            guest_id,
            property_id: property.id,
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2020, 1, 4).unwrap(),
        };
        Ok(vec![ReservationDetails {
            reservation,
            property,
            average_rating: Some(4.0),
        }])
    }
}

pub(crate) fn memory_database() -> (Database, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    let db = Database::new(store.clone(), store.clone(), store.clone());
    (db, store)
}

pub(crate) fn new_property(owner_id: UserId, city: &str, dollars: i64) -> NewProperty {
    NewProperty {
        owner_id,
        title: format!("{city} loft"),
        description: String::new(),
        thumbnail_photo_url: String::new(),
        cover_photo_url: String::new(),
        cost_per_night: Cents::from_dollars(dollars),
        parking_spaces: 0,
        number_of_bathrooms: 1,
        number_of_bedrooms: 1,
        country: "Canada".to_string(),
        street: "1 Main St".to_string(),
        city: city.to_string(),
        province: "Ontario".to_string(),
        post_code: "K1A".to_string(),
        active: true,
    }
}
