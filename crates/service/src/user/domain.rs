use serde::{Deserialize, Serialize};
use validator::Validate;

/// Registration input
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct RegisterUserRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: String,
}

/// Login input
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoginUserRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub username: String,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub password: String,
}

/// Partial profile update; absent fields stay as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub password: Option<String>,
}

/// Public user view; never carries the password hash or the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub username: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenView {
    pub token: String,
}

/// Stored user row as the service sees it.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub username: String,
    pub name: String,
    pub password_hash: String,
    pub token: Option<String>,
}

impl UserRecord {
    pub fn view(&self) -> UserView {
        UserView { username: self.username.clone(), name: self.name.clone() }
    }
}

impl From<models::users::Model> for UserRecord {
    fn from(m: models::users::Model) -> Self {
        Self { username: m.username, name: m.name, password_hash: m.password, token: m.token }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub name: String,
    pub password_hash: String,
}

/// Columns to overwrite; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub password_hash: Option<String>,
}
