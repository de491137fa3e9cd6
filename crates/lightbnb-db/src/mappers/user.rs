//! User entity <-> model mapper

use lightbnb_core::entities::{NewUser, User};
use lightbnb_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            name: model.name,
            email: model.email,
            password: model.password,
        }
    }
}

/// Borrowed column values for inserting a user
pub struct UserInsert<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> UserInsert<'a> {
    pub fn new(user: &'a NewUser) -> Self {
        Self {
            name: &user.name,
            email: &user.email,
            password: &user.password,
        }
    }
}
