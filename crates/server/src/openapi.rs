//! OpenAPI document served at `/api-docs/openapi.json` and rendered under `/docs`.
//!
//! The request/response structs live in the service crate, which stays free
//! of HTTP concerns, so their shapes are mirrored here for the schema only.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}

#[derive(ToSchema)]
pub struct ErrorDoc {
    pub errors: String,
    pub violations: Option<Vec<ViolationDoc>>,
}

#[derive(ToSchema)]
pub struct ViolationDoc {
    pub field: String,
    pub message: String,
}

#[derive(ToSchema)]
pub struct OkDoc {
    #[schema(example = "OK")]
    pub data: String,
}

#[derive(ToSchema)]
pub struct RegisterRequestDoc {
    pub username: String,
    pub password: String,
    pub name: String,
}

#[derive(ToSchema)]
pub struct LoginRequestDoc {
    pub username: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct UpdateUserRequestDoc {
    pub name: Option<String>,
    pub password: Option<String>,
}

#[derive(ToSchema)]
pub struct UserDoc {
    pub username: String,
    pub name: String,
}

#[derive(ToSchema)]
pub struct UserDataDoc {
    pub data: UserDoc,
}

#[derive(ToSchema)]
pub struct TokenDoc {
    pub token: String,
}

#[derive(ToSchema)]
pub struct TokenDataDoc {
    pub data: TokenDoc,
}

#[derive(ToSchema)]
pub struct ContactRequestDoc {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactDoc {
    pub id: i32,
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(ToSchema)]
pub struct ContactDataDoc {
    pub data: ContactDoc,
}

#[derive(ToSchema)]
pub struct PagingDoc {
    pub page: u64,
    pub total_page: u64,
    pub total_item: u64,
}

#[derive(ToSchema)]
pub struct ContactPageDoc {
    pub data: Vec<ContactDoc>,
    pub paging: PagingDoc,
}

#[derive(ToSchema)]
pub struct AddressRequestDoc {
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

#[derive(ToSchema)]
pub struct AddressDoc {
    pub id: i32,
    pub street: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub country: String,
    pub postal_code: String,
}

#[derive(ToSchema)]
pub struct AddressDataDoc {
    pub data: AddressDoc,
}

#[derive(ToSchema)]
pub struct AddressListDoc {
    pub data: Vec<AddressDoc>,
}

/// Registers the raw session token header as the `token` scheme.
struct SessionToken;

impl Modify for SessionToken {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::users::register,
        crate::routes::users::login,
        crate::routes::users::current,
        crate::routes::users::update,
        crate::routes::users::logout,
        crate::routes::contacts::create,
        crate::routes::contacts::search,
        crate::routes::contacts::get,
        crate::routes::contacts::update,
        crate::routes::contacts::remove,
        crate::routes::addresses::create,
        crate::routes::addresses::list,
        crate::routes::addresses::get,
        crate::routes::addresses::update,
        crate::routes::addresses::remove,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorDoc,
            ViolationDoc,
            OkDoc,
            RegisterRequestDoc,
            LoginRequestDoc,
            UpdateUserRequestDoc,
            UserDoc,
            UserDataDoc,
            TokenDoc,
            TokenDataDoc,
            ContactRequestDoc,
            ContactDoc,
            ContactDataDoc,
            PagingDoc,
            ContactPageDoc,
            AddressRequestDoc,
            AddressDoc,
            AddressDataDoc,
            AddressListDoc,
        )
    ),
    modifiers(&SessionToken),
    tags(
        (name = "health"),
        (name = "users"),
        (name = "contacts"),
        (name = "addresses")
    )
)]
pub struct ApiDoc;
