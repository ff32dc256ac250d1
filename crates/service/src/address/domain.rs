use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AddressRequest {
    #[validate(length(min = 1, max = 255, message = "must be 1 to 255 characters"))]
    pub street: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub city: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub province: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub country: String,
    #[validate(length(min = 1, max = 10, message = "must be 1 to 10 characters"))]
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<models::addresses::Model> for Address {
    fn from(m: models::addresses::Model) -> Self {
        Self {
            id: m.id,
            street: m.street,
            city: m.city,
            province: m.province,
            country: m.country,
            postal_code: m.postal_code,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressData {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

impl From<AddressRequest> for AddressData {
    fn from(r: AddressRequest) -> Self {
        Self { street: r.street, city: r.city, province: r.province, country: r.country, postal_code: r.postal_code }
    }
}
